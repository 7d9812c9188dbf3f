//! Synthesis port - Interface for text-to-speech

use async_trait::async_trait;
use domain::ProviderCredential;

use crate::error::ApplicationError;

/// Port for speech synthesis
#[async_trait]
pub trait SynthesisPort: Send + Sync {
    /// Synthesize `text` into audio bytes
    ///
    /// Implementations may try several voices; the call fails only when none
    /// produced audio.
    async fn synthesize(
        &self,
        text: &str,
        credential: &ProviderCredential,
    ) -> Result<Vec<u8>, ApplicationError>;
}
