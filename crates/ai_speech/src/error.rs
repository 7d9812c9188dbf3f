//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed below the HTTP layer
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Transcription provider rejected the request
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Synthesis provider rejected a single voice
    #[error("Synthesis failed for voice {voice}: HTTP {status}")]
    SynthesisFailed {
        /// Voice that was attempted
        voice: String,
        /// Status returned by the provider
        status: u16,
    },

    /// Every voice candidate was tried without success
    #[error("Synthesis failed for all voices: {}", tried.join(", "))]
    VoicesExhausted {
        /// Voices attempted, in order
        tried: Vec<String>,
    },

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid audio format or corrupted data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SpeechError {
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
