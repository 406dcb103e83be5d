//! Error types for backend fetch operations.

use thiserror::Error;

/// Errors that can occur while fetching from the monitoring backend.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Backend returned a non-success HTTP status.
    #[error("Backend error {status}: {message}")]
    Status { status: u16, message: String },

    /// Backend response doesn't match the expected schema.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Map a reqwest error to the matching category, given the request timeout.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout_ms)
        } else if err.is_decode() {
            FetchError::InvalidResponse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
