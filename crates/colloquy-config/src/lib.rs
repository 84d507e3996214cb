//! Colloquy configuration.
//!
//! TOML-based configuration for the model endpoint and the conversation
//! memory window. Every section uses serde defaults so a partial file (or
//! no file at all) works.
//!
//! ```rust,no_run
//! use colloquy_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! let key = config.model.resolve_api_key().expect("no credential");
//! println!("{} messages of history for {}", config.memory.max_messages, config.model.model);
//! # let _ = key;
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ColloquyConfig, MemoryConfig, ModelConfig, CONFIG_SCHEMA_VERSION, DEFAULT_API_KEY_ENV,
    DEFAULT_BASE_URL, DEFAULT_MAX_MESSAGES, DEFAULT_MODEL,
};

use colloquy_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// A missing file is created with commented defaults.
pub fn load_config() -> Result<ColloquyConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<ColloquyConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to pretty JSON with the credential masked.
pub fn config_to_json(config: &ColloquyConfig) -> String {
    let mut redacted = config.clone();
    if redacted.model.api_key.is_some() {
        redacted.model.api_key = Some("[REDACTED]".into());
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
