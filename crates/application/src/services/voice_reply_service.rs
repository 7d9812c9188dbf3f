//! Voice reply service - Text in, text plus synthesized speech out
//!
//! Orchestrates one `process_text` request:
//! 1. Validate the utterance and both provider credentials
//! 2. Ask the completion provider for a reply
//! 3. Synthesize the reply
//! 4. Return both as a [`CompositeReply`]
//!
//! The two provider calls are strictly sequential and there are no partial
//! results: if synthesis fails the reply text is dropped.

use std::{fmt, sync::Arc, time::Instant};

use domain::{CompositeReply, DomainError, ProviderCredential, UserUtterance};
use tracing::{error, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{CompletionPort, SynthesisPort},
};

/// Returned when the completion step fails
pub const COMPLETION_FAILED_MESSAGE: &str =
    "Failed to get response from Groq. Please check your Groq API key.";

/// Returned when the synthesis step fails
pub const SYNTHESIS_FAILED_MESSAGE: &str =
    "Failed to get TTS from Rime.ai. Please check your Rime API key.";

/// Raw `process_text` input as received from the caller
#[derive(Debug, Clone, Default)]
pub struct ProcessTextCommand {
    /// User text to answer
    pub text: Option<String>,
    /// Groq API key for the completion step
    pub groq_api_key: Option<String>,
    /// Rime API key for the synthesis step
    pub rime_api_key: Option<String>,
}

/// Service that turns user text into a spoken reply
pub struct VoiceReplyService {
    completion: Arc<dyn CompletionPort>,
    synthesis: Arc<dyn SynthesisPort>,
}

impl fmt::Debug for VoiceReplyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceReplyService").finish_non_exhaustive()
    }
}

impl VoiceReplyService {
    /// Create a new voice reply service
    pub fn new(completion: Arc<dyn CompletionPort>, synthesis: Arc<dyn SynthesisPort>) -> Self {
        Self {
            completion,
            synthesis,
        }
    }

    /// Validate, complete, synthesize
    #[instrument(skip(self, command), fields(text_len = command.text.as_ref().map_or(0, String::len)))]
    pub async fn process_text(
        &self,
        command: ProcessTextCommand,
    ) -> Result<CompositeReply, ApplicationError> {
        let start = Instant::now();

        let utterance = UserUtterance::parse(command.text)?;
        let (Some(groq_key), Some(rime_key)) = (
            ProviderCredential::from_optional(command.groq_api_key),
            ProviderCredential::from_optional(command.rime_api_key),
        ) else {
            return Err(DomainError::MissingCredentials.into());
        };

        info!(text_len = utterance.len(), "Received user text");

        let response_text = match self.completion.complete(&utterance, &groq_key).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                error!("Completion provider returned an empty reply");
                return Err(ApplicationError::Upstream(COMPLETION_FAILED_MESSAGE.to_string()));
            },
            Err(e) => {
                error!(error = %e, "Completion failed");
                return Err(ApplicationError::Upstream(COMPLETION_FAILED_MESSAGE.to_string()));
            },
        };

        info!(reply_len = response_text.len(), "Completion received");

        let audio = match self.synthesis.synthesize(&response_text, &rime_key).await {
            Ok(audio) if !audio.is_empty() => audio,
            Ok(_) => {
                error!("Synthesis provider returned no audio");
                return Err(ApplicationError::Upstream(SYNTHESIS_FAILED_MESSAGE.to_string()));
            },
            Err(e) => {
                error!(error = %e, "Synthesis failed");
                return Err(ApplicationError::Upstream(SYNTHESIS_FAILED_MESSAGE.to_string()));
            },
        };

        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            audio_size = audio.len(),
            elapsed_ms, "Returning synthesized reply"
        );

        Ok(CompositeReply::new(response_text, audio))
    }
}
