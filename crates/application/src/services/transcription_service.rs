//! Transcription service - Audio upload in, text out

use std::{fmt, sync::Arc};

use domain::{AudioMimeType, DomainError, ProviderCredential};
use tracing::{error, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{AudioUpload, TranscriptionPort},
};

/// Returned when the transcription provider fails
pub const TRANSCRIPTION_FAILED_MESSAGE: &str = "Error transcribing audio";

/// Raw `/transcribe` input as received from the caller
#[derive(Debug, Clone, Default)]
pub struct TranscribeCommand {
    /// Uploaded audio bytes
    pub data: Vec<u8>,
    /// File name of the upload, if the client sent one
    pub filename: Option<String>,
    /// Declared content type of the upload
    pub content_type: Option<String>,
    /// Groq API key for the transcription provider
    pub groq_api_key: Option<String>,
}

/// Service that validates uploads and forwards them for transcription
pub struct TranscriptionService {
    transcription: Arc<dyn TranscriptionPort>,
}

impl fmt::Debug for TranscriptionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionService").finish_non_exhaustive()
    }
}

impl TranscriptionService {
    /// Create a new transcription service
    pub fn new(transcription: Arc<dyn TranscriptionPort>) -> Self {
        Self { transcription }
    }

    /// Validate the upload, then transcribe it
    ///
    /// The content type is checked first, then the credential; neither
    /// failure reaches the provider.
    #[instrument(skip(self, command), fields(
        audio_size = command.data.len(),
        filename = ?command.filename,
        content_type = ?command.content_type,
    ))]
    pub async fn transcribe(&self, command: TranscribeCommand) -> Result<String, ApplicationError> {
        let mime_type = AudioMimeType::parse(command.content_type.as_deref().unwrap_or_default())?;
        let credential = ProviderCredential::from_optional(command.groq_api_key)
            .ok_or_else(|| DomainError::missing_credential("Groq"))?;

        let filename = command
            .filename
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("audio.{}", mime_type.extension()));

        info!(size = command.data.len(), mime = %mime_type, "Received audio file");

        let upload = AudioUpload {
            data: command.data,
            filename,
            mime_type,
        };

        match self.transcription.transcribe(upload, &credential).await {
            Ok(text) => {
                info!(text_len = text.len(), "Transcription complete");
                Ok(text)
            },
            Err(e) => {
                error!(error = %e, "Transcription failed");
                Err(ApplicationError::Upstream(TRANSCRIPTION_FAILED_MESSAGE.to_string()))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::ports::MockTranscriptionPort;

    fn command(content_type: Option<&str>, key: Option<&str>) -> TranscribeCommand {
        TranscribeCommand {
            data: vec![0xFF, 0xFB, 0x90],
            filename: Some("clip.webm".to_string()),
            content_type: content_type.map(str::to_string),
            groq_api_key: key.map(str::to_string),
        }
    }

    fn untouched() -> TranscriptionService {
        let mut port = MockTranscriptionPort::new();
        port.expect_transcribe().never();
        TranscriptionService::new(Arc::new(port))
    }

    #[tokio::test]
    async fn transcribe_success() {
        let mut port = MockTranscriptionPort::new();
        port.expect_transcribe()
            .withf(|upload, credential| {
                upload.filename == "clip.webm"
                    && upload.mime_type == AudioMimeType::Webm
                    && credential.secret().expose_secret() == "gsk"
            })
            .times(1)
            .returning(|_, _| Ok("hello there".to_string()));

        let service = TranscriptionService::new(Arc::new(port));
        let text = service
            .transcribe(command(Some("audio/webm;codecs=opus"), Some("gsk")))
            .await
            .unwrap();

        assert_eq!(text, "hello there");
    }

    #[tokio::test]
    async fn missing_filename_gets_default() {
        let mut port = MockTranscriptionPort::new();
        port.expect_transcribe()
            .withf(|upload, _| upload.filename == "audio.wav")
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let service = TranscriptionService::new(Arc::new(port));
        let mut cmd = command(Some("audio/wav"), Some("gsk"));
        cmd.filename = None;

        assert_eq!(service.transcribe(cmd).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn disallowed_content_type_makes_no_call() {
        let err = untouched()
            .transcribe(command(Some("audio/ogg"), Some("gsk")))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid audio file format. Supported formats: audio/wav, audio/mpeg, audio/m4a, audio/webm"
        );
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let err = untouched()
            .transcribe(command(None, Some("gsk")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnsupportedAudioFormat { .. })
        ));
    }

    #[tokio::test]
    async fn content_type_is_checked_before_credential() {
        let err = untouched()
            .transcribe(command(Some("video/mp4"), None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnsupportedAudioFormat { .. })
        ));
    }

    #[tokio::test]
    async fn missing_credential_makes_no_call() {
        let err = untouched()
            .transcribe(command(Some("audio/mpeg"), Some("")))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Groq API key is required");
    }

    #[tokio::test]
    async fn provider_failure_is_generic_upstream_error() {
        let mut port = MockTranscriptionPort::new();
        port.expect_transcribe()
            .times(1)
            .returning(|_, _| Err(ApplicationError::Upstream("HTTP 401".to_string())));

        let service = TranscriptionService::new(Arc::new(port));
        let err = service
            .transcribe(command(Some("audio/m4a"), Some("gsk")))
            .await
            .unwrap_err();

        assert!(matches!(&err, ApplicationError::Upstream(msg) if msg == TRANSCRIPTION_FAILED_MESSAGE));
    }
}
