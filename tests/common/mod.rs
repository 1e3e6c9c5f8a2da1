#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use todoterm::backend::{Backend, BackendError, BackendTask, CreatedTask, TaskPayload};

/// In-memory backend that records every call.
#[derive(Default)]
pub struct MockBackend {
    pub tasks: Vec<BackendTask>,
    pub fail_with: Option<BackendError>,
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<TaskPayload>>,
}

impl MockBackend {
    pub fn with_tasks(tasks: Vec<BackendTask>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn failing(error: BackendError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn backend_type(&self) -> &str {
        "mock"
    }

    fn user_id(&self) -> u64 {
        1
    }

    async fn fetch_tasks(&self, limit: u32) -> Result<Vec<BackendTask>, BackendError> {
        self.record(format!("fetch {}", limit))?;
        Ok(self.tasks.iter().take(limit as usize).cloned().collect())
    }

    async fn create_task(&self, payload: TaskPayload) -> Result<CreatedTask, BackendError> {
        self.record(format!("create {}", payload.title))?;
        let created = CreatedTask {
            id: Some(201),
            title: Some(payload.title.clone()),
            completed: Some(payload.completed),
        };
        self.payloads.lock().unwrap().push(payload);
        Ok(created)
    }

    async fn update_task(&self, id: u64, payload: TaskPayload) -> Result<(), BackendError> {
        self.record(format!("update {}", id))?;
        self.payloads.lock().unwrap().push(payload);
        Ok(())
    }

    async fn delete_task(&self, id: u64) -> Result<(), BackendError> {
        self.record(format!("delete {}", id))
    }
}

pub fn remote(id: u64, title: &str, completed: bool) -> BackendTask {
    BackendTask {
        id,
        title: title.to_string(),
        completed,
    }
}
