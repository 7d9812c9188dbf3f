//! Application configuration
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults (serde defaults on every section)
//! 2. Optional `config.toml` in the working directory
//! 3. `VOICE_RELAY_*` environment variables, `__` between nested keys
//!    (e.g. `VOICE_RELAY_SERVER__PORT=9000`)
//! 4. `RIME_VOICE_ID`, which sets the default synthesis voice

mod server;

use ai_core::CompletionConfig;
use ai_speech::SpeechConfig;
use config::{ConfigError, Environment, File, Source};
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Environment variable prefix for config overrides
pub const ENV_PREFIX: &str = "VOICE_RELAY";

/// Environment variable naming the default synthesis voice
pub const RIME_VOICE_ENV: &str = "RIME_VOICE_ID";

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat-completion client settings
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Transcription and synthesis client settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(
            File::with_name("config").required(false),
            std::env::var(RIME_VOICE_ENV).ok(),
        )
    }

    /// Load with an explicit file source and default-voice override
    pub fn load_with<S>(file: S, voice_override: Option<String>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let voice_override = voice_override.filter(|voice| !voice.trim().is_empty());

        config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .with_list_parse_key("speech.synthesis.fallback_voices")
                    .try_parsing(true),
            )
            .set_override_option("speech.synthesis.default_voice", voice_override)?
            .build()?
            .try_deserialize()
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.completion.validate()?;
        self.speech.validate()
    }
}
