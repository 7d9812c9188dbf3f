//! Application services

mod transcription_service;
mod voice_reply_service;

pub use transcription_service::{
    TRANSCRIPTION_FAILED_MESSAGE, TranscribeCommand, TranscriptionService,
};
pub use voice_reply_service::{
    COMPLETION_FAILED_MESSAGE, ProcessTextCommand, SYNTHESIS_FAILED_MESSAGE, VoiceReplyService,
};
