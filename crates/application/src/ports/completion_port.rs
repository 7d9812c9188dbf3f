//! Completion port - Interface for the chat-completion provider

use async_trait::async_trait;
use domain::{ProviderCredential, UserUtterance};

use crate::error::ApplicationError;

/// Port for single-turn chat completion
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Answer one utterance under the fixed system prompt
    ///
    /// # Returns
    /// The assistant's reply text
    async fn complete(
        &self,
        utterance: &UserUtterance,
        credential: &ProviderCredential,
    ) -> Result<String, ApplicationError>;
}
