//! Configuration shared by the orchestrator and the HTTP source.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Global configuration for a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeConfig {
    /// Base address of the backend; endpoint paths are resolved against it.
    pub base_url: String,
    /// Timeout applied to each endpoint retrieval. `None` waits indefinitely.
    pub endpoint_timeout: Option<Duration>,
    /// Optional deadline for the joined fetch of all three endpoints.
    pub request_timeout: Option<Duration>,
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_timeout: Some(Duration::from_secs(30)),
            request_timeout: None,
        }
    }
}
