//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for both speech directions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speech-to-text provider settings
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Text-to-speech provider settings
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

impl SpeechConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.transcription.validate()?;
        self.synthesis.validate()
    }
}

/// Groq Whisper transcription settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// OpenAI-compatible API base URL
    #[serde(default = "default_groq_base_url")]
    pub base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_stt_model")]
    pub model: String,

    /// ISO 639-1 language hint sent with every request
    #[serde(default = "default_language")]
    pub language: String,

    /// Response format requested from the provider
    #[serde(default = "default_response_format")]
    pub response_format: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_stt_model() -> String {
    "whisper-large-v3".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_response_format() -> String {
    "json".to_string()
}

const fn default_timeout_ms() -> u64 {
    15_000
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: default_groq_base_url(),
            model: default_stt_model(),
            language: default_language(),
            response_format: default_response_format(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl TranscriptionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Transcription base URL must not be empty".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("Transcription model must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Transcription timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Rime synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Rime API base URL
    #[serde(default = "default_rime_base_url")]
    pub base_url: String,

    /// Rime model identifier
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// First voice to try
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Voices tried in order after the default one fails
    #[serde(default = "default_fallback_voices")]
    pub fallback_voices: Vec<String>,

    /// Output sampling rate in Hz
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: u32,

    /// Speaking speed multiplier
    #[serde(default = "default_speed_alpha")]
    pub speed_alpha: f32,

    /// Ask the provider for its low-latency path
    #[serde(default = "default_reduce_latency")]
    pub reduce_latency: bool,

    /// Per-attempt timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_rime_base_url() -> String {
    "https://users.rime.ai/v1".to_string()
}

fn default_model_id() -> String {
    "v1".to_string()
}

fn default_voice() -> String {
    "Colby".to_string()
}

fn default_fallback_voices() -> Vec<String> {
    vec!["mist".to_string(), "english-female-colby".to_string()]
}

const fn default_sampling_rate() -> u32 {
    22_050
}

const fn default_speed_alpha() -> f32 {
    1.0
}

const fn default_reduce_latency() -> bool {
    true
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: default_rime_base_url(),
            model_id: default_model_id(),
            default_voice: default_voice(),
            fallback_voices: default_fallback_voices(),
            sampling_rate: default_sampling_rate(),
            speed_alpha: default_speed_alpha(),
            reduce_latency: default_reduce_latency(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SynthesisConfig {
    /// Ordered voice candidates: default voice first, then fallbacks.
    ///
    /// Blank entries and repeats are dropped; the first occurrence wins.
    pub fn voice_candidates(&self) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::with_capacity(1 + self.fallback_voices.len());
        for voice in std::iter::once(&self.default_voice).chain(&self.fallback_voices) {
            let voice = voice.trim();
            if !voice.is_empty() && !candidates.iter().any(|c| c == voice) {
                candidates.push(voice.to_string());
            }
        }
        candidates
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Synthesis base URL must not be empty".to_string());
        }

        if self.voice_candidates().is_empty() {
            return Err("At least one synthesis voice must be configured".to_string());
        }

        if self.sampling_rate == 0 {
            return Err("Sampling rate must be greater than 0".to_string());
        }

        if self.speed_alpha.is_nan() || self.speed_alpha <= 0.0 || self.speed_alpha > 4.0 {
            return Err(format!(
                "Speed alpha must be in (0.0, 4.0], got {}",
                self.speed_alpha
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Synthesis timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpeechConfig::default();

        assert_eq!(config.transcription.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.transcription.model, "whisper-large-v3");
        assert_eq!(config.transcription.language, "en");
        assert_eq!(config.transcription.response_format, "json");
        assert_eq!(config.transcription.timeout_ms, 15_000);

        assert_eq!(config.synthesis.base_url, "https://users.rime.ai/v1");
        assert_eq!(config.synthesis.model_id, "v1");
        assert_eq!(config.synthesis.default_voice, "Colby");
        assert_eq!(config.synthesis.sampling_rate, 22_050);
        assert!((config.synthesis.speed_alpha - 1.0).abs() < f32::EPSILON);
        assert!(config.synthesis.reduce_latency);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SpeechConfig::default().validate().is_ok());
    }

    #[test]
    fn voice_candidates_default_order() {
        let config = SynthesisConfig::default();
        assert_eq!(
            config.voice_candidates(),
            vec!["Colby", "mist", "english-female-colby"]
        );
    }

    #[test]
    fn voice_candidates_drop_duplicates_and_blanks() {
        let config = SynthesisConfig {
            default_voice: "mist".to_string(),
            fallback_voices: vec![
                "Colby".to_string(),
                " ".to_string(),
                "mist".to_string(),
                "Colby".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(config.voice_candidates(), vec!["mist", "Colby"]);
    }

    #[test]
    fn validate_fails_without_voices() {
        let config = SynthesisConfig {
            default_voice: String::new(),
            fallback_voices: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let mut config = SpeechConfig::default();
        config.synthesis.timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = SpeechConfig::default();
        config.transcription.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_invalid_speed() {
        let config = SynthesisConfig {
            speed_alpha: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            [transcription]
            model = "whisper-large-v3-turbo"

            [synthesis]
            default_voice = "abbie"
            fallback_voices = ["mist"]
            reduce_latency = false
            timeout_ms = 5000
        "#;

        let config: SpeechConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.transcription.model, "whisper-large-v3-turbo");
        assert_eq!(config.transcription.language, "en");
        assert_eq!(config.synthesis.voice_candidates(), vec!["abbie", "mist"]);
        assert!(!config.synthesis.reduce_latency);
        assert_eq!(config.synthesis.timeout_ms, 5000);
        assert_eq!(config.synthesis.model_id, "v1");
    }
}
