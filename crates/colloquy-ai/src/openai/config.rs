//! OpenAI client configuration.

use std::fmt;
use std::time::Duration;

use colloquy_config::{ModelConfig, DEFAULT_BASE_URL};

use crate::AiError;

/// OpenAI client configuration.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Sent only when set; the endpoint default applies otherwise.
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: None,
            temperature: None,
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(120),
        }
    }

    /// Build from the `[model]` config section, resolving the credential.
    pub fn from_model_config(config: &ModelConfig) -> Result<Self, AiError> {
        let api_key = config
            .resolve_api_key()
            .map_err(|e| AiError::Configuration(e.to_string()))?;

        let mut out = Self::new(api_key, config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeouts(
                Duration::from_secs(config.connect_timeout_secs),
                Duration::from_secs(config.timeout_secs),
            );
        out.max_tokens = config.max_tokens;
        out.temperature = config.temperature;
        Ok(out)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, total: Duration) -> Self {
        self.connect_timeout = connect;
        self.timeout = total;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = OpenAiConfig::new("sk-very-secret", "gpt-4o");
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("sk-very-secret"));
        assert!(dbg.contains("gpt-4o"));
    }

    #[test]
    fn from_model_config_copies_every_field() {
        let model = ModelConfig {
            api_key: Some("sk-inline".into()),
            model: "gpt-4o-mini".into(),
            base_url: "http://localhost:8080/v1".into(),
            max_tokens: Some(256),
            temperature: Some(0.1),
            connect_timeout_secs: 3,
            timeout_secs: 30,
            ..Default::default()
        };

        let config = OpenAiConfig::from_model_config(&model).unwrap();
        assert_eq!(config.api_key, "sk-inline");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.temperature, Some(0.1));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn from_model_config_without_credential_is_configuration_error() {
        let model = ModelConfig {
            api_key: None,
            api_key_env: "COLLOQUY_TEST_UNSET_KEY_7f3a".into(),
            ..Default::default()
        };
        let err = OpenAiConfig::from_model_config(&model).unwrap_err();
        assert!(matches!(err, AiError::Configuration(ref msg) if msg.contains("COLLOQUY_TEST_UNSET_KEY_7f3a")));
    }
}
