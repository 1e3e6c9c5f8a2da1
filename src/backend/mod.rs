//! Backend abstraction layer for the remote task resource.
//!
//! This module defines the interface the controller's commands are executed
//! against, along with the wire data types and error handling.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod factory;
pub mod rest;

/// Common error types for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unexpected HTTP status {0}")]
    Http(u16),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

impl BackendError {
    /// Whether the request never got a response (connection refused, DNS, ...).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Task as returned by the remote resource.
///
/// Only the fields the list needs are kept; anything else in the payload is
/// dropped during deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendTask {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Echo returned by the create endpoint. The id is optional because mock
/// servers are free to omit it, and it is discarded anyway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTask {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body sent on create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// Backend trait for the remote task resource.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "rest").
    fn backend_type(&self) -> &str;

    /// Owner id attached to every create/update payload.
    fn user_id(&self) -> u64;

    async fn fetch_tasks(&self, limit: u32) -> Result<Vec<BackendTask>, BackendError>;
    async fn create_task(&self, payload: TaskPayload) -> Result<CreatedTask, BackendError>;
    async fn update_task(&self, id: u64, payload: TaskPayload) -> Result<(), BackendError>;
    async fn delete_task(&self, id: u64) -> Result<(), BackendError>;
}
