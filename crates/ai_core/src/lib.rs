//! AI Core - Chat-completion client
//!
//! Talks to an OpenAI-compatible chat-completions endpoint (Groq by default)
//! with a caller-supplied API key. Each call is a single attempt bounded by
//! the configured timeout; there is no retry.

pub mod config;
pub mod error;
pub mod groq;
pub mod ports;

pub use config::CompletionConfig;
pub use error::InferenceError;
pub use groq::GroqCompletionClient;
pub use ports::{ChatMessage, CompletionEngine, CompletionRequest, CompletionResponse};
