//! Memory section validation.

use super::helpers::validate_range;
use crate::schema::ColloquyConfig;

pub(super) fn validate_memory(errors: &mut Vec<String>, config: &ColloquyConfig) {
    validate_range(
        errors,
        "memory.max_messages",
        config.memory.max_messages as u64,
        1,
        1000,
    );
}
