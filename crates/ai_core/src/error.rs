//! Inference errors

use thiserror::Error;

/// Errors that can occur while requesting a completion
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the completion provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed below the HTTP layer
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a non-200 status
    #[error("Server error: status {status}: {body}")]
    ServerError { status: u16, body: String },

    /// Response body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response parsed but carried no choices
    #[error("Completion response contained no choices")]
    EmptyChoices,

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Client could not be built
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl InferenceError {
    /// Classify a transport-level reqwest error
    pub fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
