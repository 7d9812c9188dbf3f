//! Configuration for the completion client

use serde::{Deserialize, Serialize};

/// Instruction sent as the system message of every chat exchange
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a voice based assistant. Answer in a friendly tone and keep \
     your answers short and to the point. Always answer in full sentences, like a natural conversation.";

/// Configuration for the completion client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// System prompt for every exchange
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.2-11b-text-preview".to_string()
}

const fn default_timeout_ms() -> u64 {
    15_000
}

const fn default_max_tokens() -> u32 {
    100
}

const fn default_temperature() -> f32 {
    0.5
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl CompletionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Completion base URL must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Completion timeout must be greater than 0".to_string());
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = CompletionConfig::default();
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama-3.2-11b-text-preview");
        assert_eq!(config.timeout_ms, 15_000);
        assert_eq!(config.max_tokens, 100);
        assert!((config.temperature - 0.5).abs() < f32::EPSILON);
        assert!(config.system_prompt.contains("friendly"));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(CompletionConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = CompletionConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let config = CompletionConfig {
            temperature: 2.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let config = CompletionConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: CompletionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model, "llama-3.2-11b-text-preview");
        assert_eq!(config.timeout_ms, 15_000);
    }

    #[test]
    fn config_deserialization_overrides() {
        let json = r#"{"base_url":"http://localhost:9999/v1","model":"llama-3.1-8b-instant","max_tokens":64}"#;
        let config: CompletionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://localhost:9999/v1");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.max_tokens, 64);
        assert!((config.temperature - 0.5).abs() < f32::EPSILON);
    }
}
