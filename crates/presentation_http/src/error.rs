//! API error handling
//!
//! Validation and upstream failures carry user-facing messages and are
//! returned as-is. Internal errors are logged and replaced with a generic
//! message.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Message returned for internal errors
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input was rejected before any provider call
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A provider call failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Server-side failure whose details stay in the logs
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error", msg),
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Upstream(msg) => Self::Upstream(msg),
            ApplicationError::Configuration(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_keeps_message() {
        let (status, body) = body_of(ApiError::BadRequest("No text provided".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No text provided");
        assert_eq!(body.code, "bad_request");
    }

    #[tokio::test]
    async fn upstream_keeps_message() {
        let (status, body) = body_of(ApiError::Upstream("Error transcribing audio".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Error transcribing audio");
        assert_eq!(body.code, "upstream_error");
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let (status, body) = body_of(ApiError::Internal("client build failed".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.code, "internal_error");
    }

    #[test]
    fn application_errors_map_by_kind() {
        let err = ApiError::from(ApplicationError::Domain(
            domain::DomainError::MissingCredentials,
        ));
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "API keys are required"));

        let err = ApiError::from(ApplicationError::Upstream("x".to_string()));
        assert!(matches!(err, ApiError::Upstream(_)));

        let err = ApiError::from(ApplicationError::Configuration("x".to_string()));
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
