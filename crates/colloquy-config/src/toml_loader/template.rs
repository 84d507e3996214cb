//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    format!(
        "# Colloquy Configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n{TEMPLATE_BODY}"
    )
}

const TEMPLATE_BODY: &str = r##"# Only override what you want to change -- missing fields use defaults.

[model]
# api_key = "sk-..."             # inline credential; prefer api_key_env
# api_key_env = "OPENAI_API_KEY" # environment variable read when api_key is unset
# model = "gpt-3.5-turbo"
# base_url = "https://api.openai.com/v1"
# max_tokens = 512               # >= 1, omitted from requests when unset
# temperature = 0.7              # 0.0-2.0, omitted from requests when unset
# connect_timeout_secs = 10      # 1-600
# timeout_secs = 120             # 1-600

[memory]
# max_messages = 10              # 1-1000, oldest messages are dropped first
"##;
