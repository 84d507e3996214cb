//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod memory;
mod model;

use serde::{Deserialize, Serialize};

pub use memory::{MemoryConfig, DEFAULT_MAX_MESSAGES};
pub use model::{ModelConfig, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColloquyConfig {
    pub model: ModelConfig,
    pub memory: MemoryConfig,
}
