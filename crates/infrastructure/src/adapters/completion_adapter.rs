//! Completion adapter - Implements CompletionPort using ai_core

use ai_core::{CompletionConfig, CompletionEngine, GroqCompletionClient, InferenceError};
use application::{error::ApplicationError, ports::CompletionPort};
use async_trait::async_trait;
use domain::{ProviderCredential, UserUtterance};
use tracing::{debug, instrument};

/// Adapter for Groq chat completions
#[derive(Debug)]
pub struct GroqCompletionAdapter {
    engine: GroqCompletionClient,
}

impl GroqCompletionAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: CompletionConfig) -> Result<Self, ApplicationError> {
        let engine = GroqCompletionClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::Upstream(format!("Groq connection failed: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::Upstream(format!("Groq request timed out after {ms}ms"))
            },
            InferenceError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Upstream(format!("Groq: {other}")),
        }
    }
}

#[async_trait]
impl CompletionPort for GroqCompletionAdapter {
    #[instrument(skip(self, utterance, credential), fields(text_len = utterance.len()))]
    async fn complete(
        &self,
        utterance: &UserUtterance,
        credential: &ProviderCredential,
    ) -> Result<String, ApplicationError> {
        let reply = self
            .engine
            .reply(utterance.as_str(), credential.secret())
            .await
            .map_err(Self::map_error)?;

        debug!(
            model = %self.engine.default_model(),
            reply_len = reply.len(),
            "Completion adapter finished"
        );

        Ok(reply)
    }
}
