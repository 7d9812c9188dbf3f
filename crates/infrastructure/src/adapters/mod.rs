//! Adapters binding the provider clients to application ports

mod completion_adapter;
mod speech_adapter;

pub use completion_adapter::GroqCompletionAdapter;
pub use speech_adapter::{RimeSynthesisAdapter, WhisperTranscriptionAdapter};
