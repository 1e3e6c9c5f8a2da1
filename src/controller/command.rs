//! Network requests issued by the controller and their results.
//!
//! Controller operations never touch the network themselves. An operation that
//! needs the remote resource returns a [`Command`]; whoever owns the runtime
//! executes it and hands the resulting [`Completion`] back to
//! [`Controller::apply`](super::Controller::apply).

use log::{debug, warn};

use super::task::TaskId;
use crate::backend::{Backend, BackendError, BackendTask, CreatedTask, TaskPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load { limit: u32 },
    Create { title: String },
    SaveTitle { id: TaskId, title: String, completed: bool },
    SetCompleted { id: TaskId, title: String, completed: bool },
    Delete { id: TaskId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Loaded(Result<Vec<BackendTask>, BackendError>),
    Created {
        title: String,
        result: Result<CreatedTask, BackendError>,
    },
    TitleSaved {
        id: TaskId,
        title: String,
        result: Result<(), BackendError>,
    },
    CompletionSet {
        id: TaskId,
        completed: bool,
        result: Result<(), BackendError>,
    },
    Deleted {
        id: TaskId,
        result: Result<(), BackendError>,
    },
}

impl Command {
    /// Short human description used in logs and task manager bookkeeping.
    pub fn describe(&self) -> String {
        match self {
            Self::Load { limit } => format!("Load tasks (limit {})", limit),
            Self::Create { title } => format!("Create task '{}'", title),
            Self::SaveTitle { id, title, .. } => format!("Save task {} as '{}'", id, title),
            Self::SetCompleted { id, completed, .. } => format!("Set task {} completed={}", id, completed),
            Self::Delete { id } => format!("Delete task {}", id),
        }
    }

    /// Run the request against `backend`. Failures are captured in the
    /// returned completion, never propagated.
    pub async fn execute(self, backend: &dyn Backend) -> Completion {
        let description = self.describe();
        debug!("Executing command: {}", description);

        let completion = match self {
            Self::Load { limit } => Completion::Loaded(backend.fetch_tasks(limit).await),
            Self::Create { title } => {
                let payload = TaskPayload {
                    user_id: backend.user_id(),
                    title: title.clone(),
                    completed: false,
                };
                let result = backend.create_task(payload).await;
                Completion::Created { title, result }
            }
            Self::SaveTitle { id, title, completed } => {
                let payload = TaskPayload {
                    user_id: backend.user_id(),
                    title: title.clone(),
                    completed,
                };
                let result = backend.update_task(id, payload).await;
                Completion::TitleSaved { id, title, result }
            }
            Self::SetCompleted { id, title, completed } => {
                let payload = TaskPayload {
                    user_id: backend.user_id(),
                    title,
                    completed,
                };
                let result = backend.update_task(id, payload).await;
                Completion::CompletionSet { id, completed, result }
            }
            Self::Delete { id } => Completion::Deleted {
                id,
                result: backend.delete_task(id).await,
            },
        };

        if let Some(e) = completion.error() {
            warn!("Command failed: {}: {}", description, e);
        }
        completion
    }
}

impl Completion {
    pub fn error(&self) -> Option<&BackendError> {
        match self {
            Self::Loaded(result) => result.as_ref().err(),
            Self::Created { result, .. } => result.as_ref().err(),
            Self::TitleSaved { result, .. } => result.as_ref().err(),
            Self::CompletionSet { result, .. } => result.as_ref().err(),
            Self::Deleted { result, .. } => result.as_ref().err(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error().is_none()
    }
}
