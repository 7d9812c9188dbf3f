//! Audio transcription handler

use application::TranscribeCommand;
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Multipart field carrying the audio upload
const FILE_FIELD: &str = "file";

/// Multipart text field carrying the Groq API key
const GROQ_KEY_FIELD: &str = "groq_api_key";

/// Recognized text
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}

/// Transcribe an uploaded audio file
#[instrument(skip(state, multipart))]
pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut file: Option<(Vec<u8>, Option<String>, Option<String>)> = None;
    let mut groq_api_key: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed reading multipart field: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FILE_FIELD => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed reading multipart '{FILE_FIELD}' field: {e}"))
                })?;
                file = Some((bytes.to_vec(), filename, content_type));
            },
            GROQ_KEY_FIELD => {
                let text = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!(
                        "Failed reading multipart '{GROQ_KEY_FIELD}' field: {e}"
                    ))
                })?;
                groq_api_key = Some(text);
            },
            other => debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    let (data, filename, content_type) =
        file.ok_or_else(|| ApiError::BadRequest("No audio file provided".to_string()))?;

    let transcription = state
        .transcription_service
        .transcribe(TranscribeCommand {
            data,
            filename,
            content_type,
            groq_api_key,
        })
        .await?;

    Ok(Json(TranscribeResponse { transcription }))
}
