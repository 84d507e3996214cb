//! OpenAI client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::OpenAiConfig;

/// OpenAI chat completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    /// Fails with `AiError::Configuration` on a blank key or model, or when
    /// the HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        if config.api_key.trim().is_empty() {
            return Err(AiError::Configuration("API key is empty".into()));
        }
        if config.model.trim().is_empty() {
            return Err(AiError::Configuration("model identifier is empty".into()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body. Message order and roles are kept as given.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role().as_str(),
                    "content": msg.text(),
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        if let Some(temperature) = self.config.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        body
    }

    /// Parse a chat completion response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let first = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| AiError::ParseError("no choices in response".to_string()))?;

        let content = first["message"]["content"]
            .as_str()
            .ok_or_else(|| AiError::ParseError("choice has no message content".to_string()))?
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
