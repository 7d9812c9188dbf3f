//! Groq Whisper speech-to-text provider
//!
//! Uses Groq's OpenAI-compatible `/audio/transcriptions` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::config::TranscriptionConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription};

/// Groq Whisper transcription client
#[derive(Debug)]
pub struct GroqWhisperProvider {
    client: Client,
    config: TranscriptionConfig,
}

/// Whisper transcription response
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

impl GroqWhisperProvider {
    /// Create a new provider; fails if the configuration is invalid
    pub fn new(config: TranscriptionConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Groq Whisper provider"
        );

        Ok(Self { client, config })
    }

    fn transcription_url(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SpeechToText for GroqWhisperProvider {
    #[instrument(skip(self, audio, api_key), fields(audio_size = audio.size_bytes(), filename = %audio.filename()))]
    async fn transcribe(
        &self,
        audio: AudioData,
        api_key: &SecretString,
    ) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        debug!(mime = %audio.mime_type(), "Transcribing audio with Groq Whisper");

        let filename = audio.filename().to_string();
        let mime_type = audio.mime_type().to_string();
        let data = audio.into_data();

        let file_part = Part::bytes(data.to_vec())
            .file_name(filename)
            .mime_str(&mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("response_format", self.config.response_format.clone())
            .text("language", self.config.language.clone());

        let response = self
            .client
            .post(self.transcription_url())
            .bearer_auth(api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let err = SpeechError::from_transport(&e, self.config.timeout_ms);
                error!(error = %err, "Groq Whisper request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Groq Whisper API error");
            return Err(SpeechError::TranscriptionFailed(format!("HTTP {status}: {body}")));
        }

        let whisper: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        info!(text_len = whisper.text.len(), "Whisper transcription complete");

        let mut transcription = Transcription::new(whisper.text)
            .with_language(whisper.language.unwrap_or_else(|| self.config.language.clone()));

        if let Some(duration) = whisper.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        Ok(transcription)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
