//! Application state shared across handlers

use std::sync::Arc;

use application::{ApplicationError, TranscriptionService, VoiceReplyService};
use infrastructure::{
    AppConfig, GroqCompletionAdapter, RimeSynthesisAdapter, WhisperTranscriptionAdapter,
};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text to spoken reply flow
    pub voice_reply_service: Arc<VoiceReplyService>,
    /// Audio upload transcription
    pub transcription_service: Arc<TranscriptionService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire the provider adapters and services from configuration
    pub fn from_config(config: AppConfig) -> Result<Self, ApplicationError> {
        let completion = GroqCompletionAdapter::new(config.completion.clone())?;
        let synthesis = RimeSynthesisAdapter::new(config.speech.synthesis.clone())?;
        let transcription = WhisperTranscriptionAdapter::new(config.speech.transcription.clone())?;

        Ok(Self {
            voice_reply_service: Arc::new(VoiceReplyService::new(
                Arc::new(completion),
                Arc::new(synthesis),
            )),
            transcription_service: Arc::new(TranscriptionService::new(Arc::new(transcription))),
            config: Arc::new(config),
        })
    }
}
