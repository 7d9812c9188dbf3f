//! Accepted upload formats for transcription

use std::fmt;

use crate::errors::DomainError;

/// Audio content types accepted by the `/transcribe` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    /// `audio/wav`
    Wav,
    /// `audio/mpeg`
    Mpeg,
    /// `audio/m4a`
    M4a,
    /// `audio/webm`
    Webm,
}

impl AudioMimeType {
    /// Every accepted type, in the order reported to clients
    pub const ALL: [Self; 4] = [Self::Wav, Self::Mpeg, Self::M4a, Self::Webm];

    /// Parse a declared content type against the allow-list
    ///
    /// Parameters such as `; codecs=opus` are ignored and the comparison is
    /// case-insensitive; anything else must match one of [`Self::ALL`] exactly.
    pub fn parse(content_type: &str) -> Result<Self, DomainError> {
        let base = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|mime| mime.as_str() == base)
            .ok_or_else(|| DomainError::UnsupportedAudioFormat {
                content_type: content_type.to_string(),
            })
    }

    /// The canonical MIME string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mpeg => "audio/mpeg",
            Self::M4a => "audio/m4a",
            Self::Webm => "audio/webm",
        }
    }

    /// File extension used when the upload has no usable filename
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mpeg => "mp3",
            Self::M4a => "m4a",
            Self::Webm => "webm",
        }
    }

    /// Comma-separated list of accepted types
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_allow_list() {
        assert_eq!(AudioMimeType::parse("audio/wav"), Ok(AudioMimeType::Wav));
        assert_eq!(AudioMimeType::parse("audio/mpeg"), Ok(AudioMimeType::Mpeg));
        assert_eq!(AudioMimeType::parse("audio/m4a"), Ok(AudioMimeType::M4a));
        assert_eq!(AudioMimeType::parse("audio/webm"), Ok(AudioMimeType::Webm));
    }

    #[test]
    fn parse_ignores_parameters_and_case() {
        assert_eq!(
            AudioMimeType::parse("audio/webm;codecs=opus"),
            Ok(AudioMimeType::Webm)
        );
        assert_eq!(AudioMimeType::parse("Audio/WAV"), Ok(AudioMimeType::Wav));
    }

    #[test]
    fn parse_rejects_other_types() {
        for content_type in ["audio/ogg", "audio/mp3", "video/webm", "text/plain", ""] {
            let err = AudioMimeType::parse(content_type).unwrap_err();
            assert_eq!(
                err,
                DomainError::UnsupportedAudioFormat {
                    content_type: content_type.to_string()
                }
            );
        }
    }

    #[test]
    fn allowed_list_is_ordered() {
        assert_eq!(
            AudioMimeType::allowed_list(),
            "audio/wav, audio/mpeg, audio/m4a, audio/webm"
        );
    }

    #[test]
    fn extensions() {
        assert_eq!(AudioMimeType::Wav.extension(), "wav");
        assert_eq!(AudioMimeType::Mpeg.extension(), "mp3");
        assert_eq!(AudioMimeType::M4a.extension(), "m4a");
        assert_eq!(AudioMimeType::Webm.extension(), "webm");
    }

    #[test]
    fn display_is_mime_string() {
        assert_eq!(AudioMimeType::Mpeg.to_string(), "audio/mpeg");
    }
}
