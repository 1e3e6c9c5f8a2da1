use serde::{Deserialize, Serialize};

use crate::backend::BackendTask;

pub type TaskId = u64;

/// A titled, completable to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

impl From<BackendTask> for Task {
    fn from(remote: BackendTask) -> Self {
        Self {
            id: remote.id,
            title: remote.title,
            completed: remote.completed,
        }
    }
}

/// The single edit slot. `saving` lives inside the slot, so a saving task is
/// always the task being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub task_id: TaskId,
    /// Title snapshot taken when editing began
    pub original_title: String,
    /// Text currently typed in the edit input
    pub staged_title: String,
    pub saving: bool,
}

impl EditState {
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            original_title: task.title.clone(),
            staged_title: task.title.clone(),
            saving: false,
        }
    }
}

/// Keys understood by an edit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Commit the edit (Enter)
    Activate,
    /// Abandon the edit (Escape)
    Cancel,
}
