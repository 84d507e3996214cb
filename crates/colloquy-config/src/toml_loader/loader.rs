//! Core TOML config loading: read from a string, a path, or the platform default.

use crate::schema::ColloquyConfig;
use crate::validation;
use colloquy_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config from TOML text. Missing fields take their defaults.
pub fn load_from_str(content: &str) -> Result<ColloquyConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// Validation problems are logged, not returned; callers that need a
/// strict load go through [`crate::load_config_from`].
pub fn load_from_path(path: &Path) -> Result<ColloquyConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/colloquy/config.toml`
/// On Linux: `~/.config/colloquy/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ColloquyConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ColloquyConfig::default())
        }
        Err(e) => Err(e),
    }
}
