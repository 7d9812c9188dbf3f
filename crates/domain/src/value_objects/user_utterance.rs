//! User utterance value object

use crate::errors::DomainError;

/// A single, non-empty piece of user text sent to the completion provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUtterance(String);

impl UserUtterance {
    /// Parse an utterance from optional request input
    ///
    /// Missing and empty text are rejected. Anything else, including
    /// whitespace-only text, is kept exactly as sent.
    pub fn parse(raw: Option<String>) -> Result<Self, DomainError> {
        match raw {
            Some(text) if !text.is_empty() => Ok(Self(text)),
            _ => Err(DomainError::EmptyUtterance),
        }
    }

    /// Get the utterance text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed utterance
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_text() {
        let utterance = UserUtterance::parse(Some("Hello there".to_string())).unwrap();
        assert_eq!(utterance.as_str(), "Hello there");
        assert_eq!(utterance.len(), 11);
        assert!(!utterance.is_empty());
    }

    #[test]
    fn parse_keeps_surrounding_whitespace() {
        let utterance = UserUtterance::parse(Some("  hi  ".to_string())).unwrap();
        assert_eq!(utterance.as_str(), "  hi  ");
    }

    #[test]
    fn parse_rejects_missing() {
        assert_eq!(UserUtterance::parse(None), Err(DomainError::EmptyUtterance));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(
            UserUtterance::parse(Some(String::new())),
            Err(DomainError::EmptyUtterance)
        );
    }

    #[test]
    fn parse_accepts_whitespace_only() {
        let utterance = UserUtterance::parse(Some("   ".to_string())).unwrap();
        assert_eq!(utterance.as_str(), "   ");
    }
}
