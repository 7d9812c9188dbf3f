//! Port definitions for the completion client
//!
//! Defines the trait (port) that completion adapters must implement and the
//! OpenAI-compatible request/response shapes it works with.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InferenceError;

/// A single chat message (OpenAI-compatible format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// System-role message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// User-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request for a single, non-streaming completion
///
/// Model, token cap and temperature come from the engine's configuration.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Messages in the exchange
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Create a single-turn request with a system prompt
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        }
    }
}

/// Response from a completion
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text of the first choice
    pub content: String,
    /// Model that generated the response
    pub model: String,
}

/// Port for completion engine implementations
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    /// Run one completion request with the caller's API key
    async fn complete(
        &self,
        request: CompletionRequest,
        api_key: &SecretString,
    ) -> Result<CompletionResponse, InferenceError>;

    /// System prompt attached by [`CompletionEngine::reply`]
    fn system_prompt(&self) -> &str;

    /// Model every request is sent to
    fn default_model(&self) -> &str;

    /// Answer a single user utterance under the fixed system prompt
    async fn reply(
        &self,
        user_text: &str,
        api_key: &SecretString,
    ) -> Result<String, InferenceError> {
        let request = CompletionRequest::with_system(self.system_prompt(), user_text);
        let response = self.complete(request, api_key).await?;
        debug!(model = %response.model, reply_len = response.content.len(), "Reply generated");
        Ok(response.content)
    }
}
