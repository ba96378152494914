//! Error types for the upstream LLM layer

use thiserror::Error;

/// Errors that can occur when talking to the upstream chat API
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failures (transport errors carry status 0)
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Event stream failures during consumption
    #[error("Stream error: {0}")]
    StreamError(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl UpstreamError {
    /// Whether a retry has a chance of succeeding.
    ///
    /// Transport failures, mid-stream failures, malformed payloads, rate
    /// limits and server errors are transient. Other 4xx responses (bad
    /// request, auth failure) are deterministic and fail immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            UpstreamError::HttpError { status, .. } => {
                matches!(*status, 0 | 408 | 429) || *status >= 500
            }
            UpstreamError::StreamError(_) => true,
            UpstreamError::SerializationError(_) => true,
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
        UpstreamError::HttpError {
            status,
            body: err.to_string(),
        }
    }
}
