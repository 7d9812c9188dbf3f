//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.
//! Both directions take the caller's API key per call.

use async_trait::async_trait;
use bytes::Bytes;
use secrecy::SecretString;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// Returns the recognized text; a non-success status or transport
    /// failure is an error. No retry.
    async fn transcribe(
        &self,
        audio: AudioData,
        api_key: &SecretString,
    ) -> Result<Transcription, SpeechError>;

    /// Get the name of the current STT model
    fn model_name(&self) -> &str;
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech from text, returning the provider's raw audio
    async fn synthesize(&self, text: &str, api_key: &SecretString) -> Result<Bytes, SpeechError>;

    /// Voices tried in order
    fn voice_candidates(&self) -> &[String];
}
