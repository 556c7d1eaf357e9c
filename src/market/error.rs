//! Upstream request errors

use thiserror::Error;

/// Unified failure for any unsuccessful upstream request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Connection or protocol failure
    #[error("Transport error: {0}")]
    Transport(String),
    /// Non-2xx response
    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Request did not complete in time
    #[error("Request timed out")]
    Timeout,
    /// Body was not valid JSON or did not match the expected schema
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NetworkError::Timeout
        } else if e.is_decode() {
            NetworkError::Parse(e.to_string())
        } else {
            NetworkError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        NetworkError::Parse(e.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for NetworkError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        NetworkError::Timeout
    }
}
