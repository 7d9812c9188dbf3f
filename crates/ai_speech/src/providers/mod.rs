//! Speech processing provider implementations
//!
//! Contains concrete implementations of the `SpeechToText` and `TextToSpeech` traits.

pub mod groq_whisper;
pub mod rime;

pub use groq_whisper::GroqWhisperProvider;
pub use rime::RimeSpeechProvider;
