//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod memory;
mod model;


use crate::schema::ColloquyConfig;
use colloquy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ColloquyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    memory::validate_memory(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
