//! Conversation memory settings.

use serde::{Deserialize, Serialize};

/// Number of messages a conversation keeps when nothing else is configured.
pub const DEFAULT_MAX_MESSAGES: usize = 10;

/// Rolling-history window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Maximum retained messages; the oldest are evicted first.
    pub max_messages: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }
}
