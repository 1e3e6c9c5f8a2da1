use super::actions::Action;
use crate::backend::Backend;
use crate::controller::{Command, Completion};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs controller commands in the background, one tokio task per request.
///
/// Each finished request is delivered back to the UI loop as
/// [`Action::CommandCompleted`].
pub struct TaskManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background request for `command`
    pub fn spawn_command(&mut self, command: Command, backend: Arc<dyn Backend>) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let action_sender = self.action_sender.clone();
        let description = command.describe();
        debug!("Spawning job {}: {}", job_id, description);

        let handle = tokio::spawn(async move {
            let completion: Completion = command.execute(backend.as_ref()).await;
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(Action::CommandCompleted(completion));
        });

        let job = BackgroundJob {
            id: job_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.jobs.insert(job_id, job);
        job_id
    }

    /// Check for completed jobs and clean them up
    pub fn cleanup_finished_jobs(&mut self) -> Vec<JobId> {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for job_id in &finished {
            if let Some(job) = self.jobs.remove(job_id) {
                debug!(
                    "Job {} '{}' finished after {:?}",
                    job.id,
                    job.description,
                    job.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running jobs
    pub fn cancel_all_jobs(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }

    /// Get the number of active jobs
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all jobs when the manager is dropped
        self.cancel_all_jobs();
    }
}
