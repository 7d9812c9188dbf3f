//! Health check handlers

use axum::Json;
use serde::{Deserialize, Serialize};

/// Root liveness message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness message at `/`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Voice relay backend is running".to_string(),
    })
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
