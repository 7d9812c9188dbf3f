//! Rime text-to-speech provider
//!
//! Tries each configured voice in order until one returns audio. A non-200
//! status or a timeout moves on to the next voice; any other transport
//! failure ends the scan at once.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::config::SynthesisConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::SynthesisAttempt;

const NON_TEXT_BODY: &str = "<Non-text response content>";

/// Rime synthesis client
#[derive(Debug)]
pub struct RimeSpeechProvider {
    client: Client,
    config: SynthesisConfig,
    candidates: Vec<String>,
}

/// Rime TTS request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RimeRequest<'a> {
    speaker: &'a str,
    text: &'a str,
    model_id: &'a str,
    sampling_rate: u32,
    speed_alpha: f32,
    reduce_latency: bool,
}

impl RimeSpeechProvider {
    /// Create a new provider; the voice list is fixed here
    pub fn new(config: SynthesisConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        let candidates = config.voice_candidates();

        info!(
            base_url = %config.base_url,
            voices = ?candidates,
            "Initialized Rime speech provider"
        );

        Ok(Self {
            client,
            config,
            candidates,
        })
    }

    fn tts_url(&self) -> String {
        format!("{}/rime-tts", self.config.base_url.trim_end_matches('/'))
    }

    /// Try a single voice and classify the outcome
    #[instrument(skip(self, text, api_key), fields(text_len = text.len()))]
    async fn attempt_voice(
        &self,
        voice: String,
        text: &str,
        api_key: &SecretString,
    ) -> SynthesisAttempt {
        let body = RimeRequest {
            speaker: &voice,
            text,
            model_id: &self.config.model_id,
            sampling_rate: self.config.sampling_rate,
            speed_alpha: self.config.speed_alpha,
            reduce_latency: self.config.reduce_latency,
        };

        let sent = self
            .client
            .post(self.tts_url())
            .header(ACCEPT, "audio/mp3")
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => return self.classify_transport(&voice, &e),
        };

        let status = response.status();
        if status == StatusCode::OK {
            return match response.bytes().await {
                Ok(audio) => {
                    info!(voice = %voice, audio_size = audio.len(), "Received TTS audio from Rime");
                    SynthesisAttempt::Success(audio)
                },
                Err(e) => self.classify_transport(&voice, &e),
            };
        }

        let error_body = match read_error_body(response).await {
            Ok(body) => body,
            Err(e) => return self.classify_transport(&voice, &e),
        };

        error!(status = %status, body = %error_body, voice = %voice, "Rime API error");
        if status == StatusCode::BAD_REQUEST {
            warn!(body = %error_body, voice = %voice, "Bad request, trying next voice");
        }

        SynthesisAttempt::Retryable(
            SpeechError::SynthesisFailed {
                voice,
                status: status.as_u16(),
            }
            .to_string(),
        )
    }

    fn classify_transport(&self, voice: &str, err: &reqwest::Error) -> SynthesisAttempt {
        match SpeechError::from_transport(err, self.config.timeout_ms) {
            SpeechError::Timeout(ms) => {
                error!(voice = %voice, timeout_ms = ms, "Request to Rime timed out");
                SynthesisAttempt::Retryable(format!("timeout after {ms}ms"))
            },
            other => {
                error!(voice = %voice, error = %other, "Rime client error");
                SynthesisAttempt::Fatal(other)
            },
        }
    }
}

/// Read the body of a failed response if it is JSON or text
async fn read_error_body(response: Response) -> Result<String, reqwest::Error> {
    let readable = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(is_text_content_type);

    if readable {
        response.text().await
    } else {
        Ok(NON_TEXT_BODY.to_string())
    }
}

fn is_text_content_type(content_type: &str) -> bool {
    content_type.parse::<mime::Mime>().is_ok_and(|m| {
        m.type_() == mime::TEXT || m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON)
    })
}

/// Walk the voice candidates in order until one yields audio.
///
/// `attempt` is called at most once per candidate. The scan stops at the first
/// `Success` or `Fatal`; after the last `Retryable` it fails with
/// [`SpeechError::VoicesExhausted`].
pub async fn scan_voice_candidates<F, Fut>(
    candidates: &[String],
    mut attempt: F,
) -> Result<Bytes, SpeechError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = SynthesisAttempt>,
{
    let mut tried = Vec::with_capacity(candidates.len());

    for voice in candidates {
        tried.push(voice.clone());
        match attempt(voice.clone()).await {
            SynthesisAttempt::Success(audio) => return Ok(audio),
            SynthesisAttempt::Retryable(reason) => {
                debug!(voice = %voice, reason = %reason, "Voice failed, moving on");
            },
            SynthesisAttempt::Fatal(err) => return Err(err),
        }
    }

    error!(tried = ?tried, "Failed to get TTS after trying all voices");
    Err(SpeechError::VoicesExhausted { tried })
}

#[async_trait]
impl TextToSpeech for RimeSpeechProvider {
    #[instrument(skip(self, text, api_key), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str, api_key: &SecretString) -> Result<Bytes, SpeechError> {
        scan_voice_candidates(&self.candidates, |voice| {
            self.attempt_voice(voice, text, api_key)
        })
        .await
    }

    fn voice_candidates(&self) -> &[String] {
        &self.candidates
    }
}
