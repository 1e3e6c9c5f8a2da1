//! REST backend implementation over reqwest.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use super::{Backend, BackendError, BackendTask, CreatedTask, TaskPayload};

/// Backend for a JSON CRUD resource laid out like `/todos`.
pub struct RestBackend {
    client: Client,
    base_url: String,
    user_id: u64,
}

impl RestBackend {
    /// Create a new REST backend rooted at `base_url`.
    pub fn new(base_url: &str, user_id: u64, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| BackendError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // Helper: any non-2xx status becomes an error
    fn check_status(response: Response, what: &str) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::NOT_FOUND {
            Err(BackendError::NotFound(what.to_string()))
        } else {
            Err(BackendError::Http(status.as_u16()))
        }
    }
}

fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::InvalidData(e.to_string())
    } else {
        BackendError::Network(e.to_string())
    }
}

#[async_trait]
impl Backend for RestBackend {
    fn backend_type(&self) -> &str {
        "rest"
    }

    fn user_id(&self) -> u64 {
        self.user_id
    }

    async fn fetch_tasks(&self, limit: u32) -> Result<Vec<BackendTask>, BackendError> {
        debug!("GET {}?_limit={}", self.base_url, limit);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("_limit", limit)])
            .send()
            .await
            .map_err(transport_error)?;
        let response = Self::check_status(response, &self.base_url)?;

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn create_task(&self, payload: TaskPayload) -> Result<CreatedTask, BackendError> {
        debug!("POST {} '{}'", self.base_url, payload.title);
        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        let response = Self::check_status(response, &self.base_url)?;

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn update_task(&self, id: u64, payload: TaskPayload) -> Result<(), BackendError> {
        let url = self.item_url(id);
        debug!("PUT {} '{}' completed={}", url, payload.title, payload.completed);
        let response = self
            .client
            .put(&url)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        Self::check_status(response, &url).map(|_| ())
    }

    async fn delete_task(&self, id: u64) -> Result<(), BackendError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await.map_err(transport_error)?;
        Self::check_status(response, &url).map(|_| ())
    }
}
