//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Duration;

use super::{rest::RestBackend, Backend};
use crate::config::ApiConfig;

/// Create a backend instance from the `[api]` configuration section.
///
/// # Errors
/// Returns error if the HTTP client cannot be built (e.g. TLS setup fails).
pub fn create_backend(api: &ApiConfig) -> Result<Arc<dyn Backend>> {
    let backend = RestBackend::new(&api.base_url, api.user_id, Duration::from_secs(api.timeout_secs))
        .map_err(|e| anyhow!("Failed to create REST backend for {}: {}", api.base_url, e))?;
    Ok(Arc::new(backend))
}
