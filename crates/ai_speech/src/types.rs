//! Types for speech processing
//!
//! Contains data structures for uploaded audio, transcriptions and the
//! outcome of a single synthesis attempt.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::SpeechError;

/// Uploaded audio with the metadata the transcription provider needs
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw audio bytes
    data: Bytes,
    /// File name hint forwarded to the provider
    filename: String,
    /// Declared MIME type (without parameters)
    mime_type: String,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub fn new(
        data: impl Into<Bytes>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// File name hint
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Declared MIME type
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Result of speech-to-text transcription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Detected or requested language (ISO 639-1 code)
    pub language: Option<String>,
    /// Duration of the audio in milliseconds
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a simple transcription with just text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    /// Set the language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Outcome of trying one voice candidate
#[derive(Debug)]
pub enum SynthesisAttempt {
    /// Provider answered 200 with audio
    Success(Bytes),
    /// This voice failed in a way the next voice may not; keep scanning
    Retryable(String),
    /// Stop scanning and fail the whole synthesis
    Fatal(SpeechError),
}
