//! Transcription port - Interface for speech-to-text

use async_trait::async_trait;
use domain::{AudioMimeType, ProviderCredential};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A validated audio upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    /// Raw audio bytes
    pub data: Vec<u8>,
    /// File name forwarded to the provider
    pub filename: String,
    /// Declared format, already checked against the allow-list
    pub mime_type: AudioMimeType,
}

/// Port for speech-to-text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe audio to text
    async fn transcribe(
        &self,
        upload: AudioUpload,
        credential: &ProviderCredential,
    ) -> Result<String, ApplicationError>;
}
