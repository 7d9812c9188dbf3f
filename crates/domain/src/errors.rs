//! Domain-level errors
//!
//! Display strings are user-facing: the HTTP layer returns them verbatim
//! in 400 responses.

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// User text was missing or empty
    #[error("No text provided")]
    EmptyUtterance,

    /// A single required provider credential was missing or empty
    #[error("{provider} API key is required")]
    MissingCredential { provider: String },

    /// One or more of the credentials for a multi-provider request was missing
    #[error("API keys are required")]
    MissingCredentials,

    /// Uploaded audio declared a content type outside the allow-list
    #[error("Invalid audio file format. Supported formats: {}", crate::value_objects::AudioMimeType::allowed_list())]
    UnsupportedAudioFormat { content_type: String },
}

impl DomainError {
    /// Create a missing credential error for the named provider
    pub fn missing_credential(provider: impl Into<String>) -> Self {
        Self::MissingCredential {
            provider: provider.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_utterance_message() {
        assert_eq!(DomainError::EmptyUtterance.to_string(), "No text provided");
    }

    #[test]
    fn missing_credential_names_provider() {
        let err = DomainError::missing_credential("Groq");
        assert_eq!(err.to_string(), "Groq API key is required");
    }

    #[test]
    fn missing_credentials_message() {
        assert_eq!(
            DomainError::MissingCredentials.to_string(),
            "API keys are required"
        );
    }

    #[test]
    fn unsupported_format_lists_allowed_types() {
        let err = DomainError::UnsupportedAudioFormat {
            content_type: "video/mp4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid audio file format. Supported formats: audio/wav, audio/mpeg, audio/m4a, audio/webm"
        );
    }
}
