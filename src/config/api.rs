//! Backend API endpoint configuration

use serde::{Deserialize, Serialize};

/// Backend gateway endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the monitoring backend (e.g., "http://localhost:8000")
    pub base_url: String,
    /// WebSocket URL for the real-time log stream.
    ///
    /// Reserved: the stream endpoint is not implemented yet, but the URL is
    /// part of the configuration surface so operators can set it ahead of time.
    pub ws_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            ws_url: "ws://localhost:8000".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

/// Synthetic-fallback policy.
///
/// When enabled, any fetch failure (network, non-2xx status, malformed body)
/// is replaced by a deterministic sample payload tagged as synthetic. When
/// disabled, fetch errors propagate to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
