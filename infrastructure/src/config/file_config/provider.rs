//! Provider configuration from TOML (`[provider]` section)

use crate::openrouter::{API_KEY_ENV, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};

/// Where to reach the chat-completions endpoint and how to authenticate
///
/// The API key itself never appears in configuration files; only the name
/// of the environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Chat-completions endpoint URL
    pub api_url: String,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key_env: API_KEY_ENV.to_string(),
        }
    }
}
