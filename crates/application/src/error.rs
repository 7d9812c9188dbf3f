//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input failed validation before any provider was called
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An upstream provider call failed; the message is user-facing
    #[error("{0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::EmptyUtterance);
        assert_eq!(err.to_string(), "No text provided");
        assert!(matches!(err, ApplicationError::Domain(DomainError::EmptyUtterance)));
    }

    #[test]
    fn upstream_message_is_verbatim() {
        let err = ApplicationError::Upstream("Error transcribing audio".to_string());
        assert_eq!(err.to_string(), "Error transcribing audio");
    }
}
