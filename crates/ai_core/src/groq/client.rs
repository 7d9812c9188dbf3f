//! Groq chat-completions client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::config::CompletionConfig;
use crate::error::InferenceError;
use crate::ports::{ChatMessage, CompletionEngine, CompletionRequest, CompletionResponse};

/// Completion engine backed by Groq's OpenAI-compatible API
#[derive(Debug)]
pub struct GroqCompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl GroqCompletionClient {
    /// Create a new client; fails if the configuration is invalid
    pub fn new(config: CompletionConfig) -> Result<Self, InferenceError> {
        config.validate().map_err(InferenceError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::Configuration(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            timeout_ms = config.timeout_ms,
            "Initialized Groq completion client"
        );

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// OpenAI-format chat request body
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    temperature: f32,
    max_tokens: u32,
}

/// OpenAI-format chat response
#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionEngine for GroqCompletionClient {
    #[instrument(skip(self, request, api_key), fields(model = %self.config.model))]
    async fn complete(
        &self,
        request: CompletionRequest,
        api_key: &SecretString,
    ) -> Result<CompletionResponse, InferenceError> {
        let body = ChatCompletionBody {
            model: &self.config.model,
            messages: &request.messages,
            stream: false,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(messages = request.messages.len(), "Sending completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Completion request failed");
            return Err(InferenceError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let first = reply
            .choices
            .into_iter()
            .next()
            .ok_or(InferenceError::EmptyChoices)?;

        let content = first.message.content.unwrap_or_default();
        debug!(content_len = content.len(), "Completion finished");

        Ok(CompletionResponse {
            content,
            model: reply.model.unwrap_or_else(|| self.config.model.clone()),
        })
    }

    fn system_prompt(&self) -> &str {
        &self.config.system_prompt
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        let client = GroqCompletionClient::new(CompletionConfig {
            base_url: "http://localhost:1234/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.api_url("/chat/completions"),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result = GroqCompletionClient::new(CompletionConfig {
            timeout_ms: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(InferenceError::Configuration(_))));
    }

    #[test]
    fn default_model_comes_from_config() {
        let client = GroqCompletionClient::new(CompletionConfig::default()).unwrap();
        assert_eq!(client.default_model(), "llama-3.2-11b-text-preview");
        assert_eq!(client.system_prompt(), CompletionConfig::default().system_prompt);
    }

    #[test]
    fn body_serializes_openai_shape() {
        let messages = vec![ChatMessage::user("hi")];
        let body = ChatCompletionBody {
            model: "m",
            messages: &messages,
            stream: false,
            temperature: 0.5,
            max_tokens: 100,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
