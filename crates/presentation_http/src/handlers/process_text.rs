//! Text to spoken reply handler

use application::ProcessTextCommand;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Request body; every field is optional so missing input gets our own 400
#[derive(Debug, Default, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default)]
    pub rime_api_key: Option<String>,
}

/// Reply text plus base64-encoded audio
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessTextResponse {
    pub response_text: String,
    pub audio_data: String,
}

impl From<ProcessTextRequest> for ProcessTextCommand {
    fn from(request: ProcessTextRequest) -> Self {
        Self {
            text: request.text,
            groq_api_key: request.groq_api_key,
            rime_api_key: request.rime_api_key,
        }
    }
}

/// Answer the user's text and synthesize the answer
#[instrument(skip(state, payload))]
pub async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<ProcessTextRequest>, JsonRejection>,
) -> Result<Json<ProcessTextResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let reply = state
        .voice_reply_service
        .process_text(request.into())
        .await?;

    Ok(Json(ProcessTextResponse {
        response_text: reply.response_text().to_string(),
        audio_data: reply.audio_base64(),
    }))
}
