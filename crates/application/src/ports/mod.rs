//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod completion_port;
mod synthesis_port;
mod transcription_port;

pub use completion_port::CompletionPort;
pub use synthesis_port::SynthesisPort;
#[cfg(test)]
pub use transcription_port::MockTranscriptionPort;
pub use transcription_port::{AudioUpload, TranscriptionPort};
