//! Model endpoint settings.

use colloquy_common::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Which model to talk to and how to reach it.
///
/// The credential is either written inline as `api_key` or read from the
/// environment variable named by `api_key_env`. There is no fallback key.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub model: String,
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix.
    pub base_url: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            max_tokens: None,
            temperature: None,
            connect_timeout_secs: 10,
            timeout_secs: 120,
        }
    }
}

impl ModelConfig {
    /// Resolve the credential from the inline value or the process environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential using `lookup` in place of the environment.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.to_string());
        }
        lookup(&self.api_key_env)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential(self.api_key_env.clone()))
    }
}
