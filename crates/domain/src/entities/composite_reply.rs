//! Composite reply entity - assistant text plus synthesized speech

use base64::{Engine, engine::general_purpose::STANDARD};

/// The text+audio bundle returned to the calling client
///
/// Exists for the duration of one request; the audio is kept raw until the
/// HTTP boundary asks for the transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeReply {
    response_text: String,
    audio: Vec<u8>,
}

impl CompositeReply {
    /// Pair a completion text with its synthesized audio
    pub fn new(response_text: impl Into<String>, audio: Vec<u8>) -> Self {
        Self {
            response_text: response_text.into(),
            audio,
        }
    }

    /// The assistant's reply text
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// Audio encoded as standard, padded base64
    pub fn audio_base64(&self) -> String {
        STANDARD.encode(&self.audio)
    }
}
