//! AI Speech - Speech-to-Text and Text-to-Speech clients
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (Groq Whisper)
//! - `TextToSpeech` - Synthesize speech from text (Rime)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! Provider credentials are supplied per call by the caller; nothing here
//! stores an API key.
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{RimeSpeechProvider, SynthesisConfig, TextToSpeech};
//!
//! let provider = RimeSpeechProvider::new(SynthesisConfig::default())?;
//! let audio = provider.synthesize("Hello, world!", &rime_key).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{SpeechConfig, SynthesisConfig, TranscriptionConfig};
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::groq_whisper::GroqWhisperProvider;
pub use providers::rime::{RimeSpeechProvider, scan_voice_candidates};
pub use types::{AudioData, SynthesisAttempt, Transcription};
