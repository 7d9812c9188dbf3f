//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow any origin)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Maximum body size for audio uploads in bytes (default: 10MB)
    #[serde(default = "default_max_body_audio")]
    pub max_body_size_audio_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:8080".to_string()]
}

const fn default_shutdown_timeout() -> u64 {
    30
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_max_body_audio() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            log_format: default_log_format(),
            max_body_size_audio_bytes: default_max_body_audio(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Server host must not be empty".to_string());
        }

        if !matches!(self.log_format.to_ascii_lowercase().as_str(), "json" | "text") {
            return Err(format!(
                "Log format must be \"json\" or \"text\", got \"{}\"",
                self.log_format
            ));
        }

        if self.max_body_size_audio_bytes == 0 {
            return Err("Audio body limit must be greater than 0".to_string());
        }

        Ok(())
    }
}
