//! Speech adapters - Implement TranscriptionPort and SynthesisPort using ai_speech

use ai_speech::{
    AudioData, GroqWhisperProvider, RimeSpeechProvider, SpeechError, SpeechToText,
    SynthesisConfig, TextToSpeech, TranscriptionConfig,
};
use application::error::ApplicationError;
use application::ports::{AudioUpload, SynthesisPort, TranscriptionPort};
use async_trait::async_trait;
use domain::ProviderCredential;
use tracing::{debug, instrument};

/// Convert ai_speech error to application error
fn map_speech_error(provider: &str, e: SpeechError) -> ApplicationError {
    match e {
        SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::Upstream(format!("{provider}: {other}")),
    }
}

/// Adapter for Groq Whisper transcription
#[derive(Debug)]
pub struct WhisperTranscriptionAdapter {
    provider: GroqWhisperProvider,
}

impl WhisperTranscriptionAdapter {
    /// Create a new transcription adapter
    pub fn new(config: TranscriptionConfig) -> Result<Self, ApplicationError> {
        let provider = GroqWhisperProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { provider })
    }
}

#[async_trait]
impl TranscriptionPort for WhisperTranscriptionAdapter {
    #[instrument(skip(self, upload, credential), fields(audio_size = upload.data.len(), mime = %upload.mime_type))]
    async fn transcribe(
        &self,
        upload: AudioUpload,
        credential: &ProviderCredential,
    ) -> Result<String, ApplicationError> {
        let audio = AudioData::new(upload.data, upload.filename, upload.mime_type.as_str());

        let transcription = self
            .provider
            .transcribe(audio, credential.secret())
            .await
            .map_err(|e| map_speech_error("Groq Whisper", e))?;

        debug!(model = %self.provider.model_name(), "Transcription adapter finished");

        Ok(transcription.text)
    }
}

/// Adapter for Rime synthesis
#[derive(Debug)]
pub struct RimeSynthesisAdapter {
    provider: RimeSpeechProvider,
}

impl RimeSynthesisAdapter {
    /// Create a new synthesis adapter
    pub fn new(config: SynthesisConfig) -> Result<Self, ApplicationError> {
        let provider = RimeSpeechProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { provider })
    }

    /// Voices the provider will try, in order
    pub fn voice_candidates(&self) -> &[String] {
        self.provider.voice_candidates()
    }
}

#[async_trait]
impl SynthesisPort for RimeSynthesisAdapter {
    #[instrument(skip(self, text, credential), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        credential: &ProviderCredential,
    ) -> Result<Vec<u8>, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, credential.secret())
            .await
            .map_err(|e| map_speech_error("Rime", e))?;

        Ok(audio.to_vec())
    }
}
