//! Value objects - Immutable, validated request inputs

pub mod audio_mime_type;
pub mod provider_credential;
pub mod user_utterance;

pub use audio_mime_type::AudioMimeType;
pub use provider_credential::ProviderCredential;
pub use user_utterance::UserUtterance;
