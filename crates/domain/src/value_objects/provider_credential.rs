//! Provider credential value object

use secrecy::SecretString;

/// An API key for one upstream provider, supplied by the caller per request
///
/// The key is held in a [`SecretString`], so it is zeroized on drop and
/// redacted from `Debug` output and therefore from tracing fields.
#[derive(Debug)]
pub struct ProviderCredential(SecretString);

impl ProviderCredential {
    /// Build a credential from optional request input
    ///
    /// Returns `None` when the value is missing or empty. The key is kept
    /// exactly as sent.
    pub fn from_optional(raw: Option<String>) -> Option<Self> {
        raw.filter(|key| !key.is_empty())
            .map(|key| Self(SecretString::from(key)))
    }

    /// Borrow the secret for handing to a provider client
    pub const fn secret(&self) -> &SecretString {
        &self.0
    }
}
