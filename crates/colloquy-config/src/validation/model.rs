//! Model section validation.

use super::helpers::{validate_range, validate_range_f64};
use crate::schema::ColloquyConfig;

pub(super) fn validate_model(errors: &mut Vec<String>, config: &ColloquyConfig) {
    let model = &config.model;

    if model.model.trim().is_empty() {
        errors.push("model.model must not be empty".into());
    }
    if model.api_key_env.trim().is_empty() {
        errors.push("model.api_key_env must not be empty".into());
    }
    if !(model.base_url.starts_with("http://") || model.base_url.starts_with("https://")) {
        errors.push(format!(
            "model.base_url = {:?} must start with http:// or https://",
            model.base_url
        ));
    }
    if let Some(max_tokens) = model.max_tokens {
        validate_range(errors, "model.max_tokens", max_tokens.into(), 1, u32::MAX.into());
    }
    if let Some(temperature) = model.temperature {
        validate_range_f64(errors, "model.temperature", temperature, 0.0, 2.0);
    }
    validate_range(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs,
        1,
        600,
    );
    validate_range(errors, "model.timeout_secs", model.timeout_secs, 1, 600);
}
