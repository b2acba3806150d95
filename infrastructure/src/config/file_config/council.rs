//! Council roster configuration from TOML (`[council]` section)

use council_domain::core::member::{
    DEFAULT_CHAIRMAN_MAX_TOKENS, DEFAULT_STAGE1_MAX_TOKENS, DEFAULT_STAGE2_MAX_TOKENS,
};
use serde::{Deserialize, Serialize};

/// One `[[council.members]]` entry
///
/// # Example
///
/// ```toml
/// [[council.members]]
/// slug = "anthropic/claude-sonnet-4-6"
/// alias = "Claude"
/// stage1_max_tokens = 600
/// stage2_max_tokens = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMemberConfig {
    pub slug: String,
    pub alias: String,
    pub stage1_max_tokens: u32,
    pub stage2_max_tokens: u32,
}

impl Default for FileMemberConfig {
    fn default() -> Self {
        Self {
            slug: String::new(),
            alias: String::new(),
            stage1_max_tokens: DEFAULT_STAGE1_MAX_TOKENS,
            stage2_max_tokens: DEFAULT_STAGE2_MAX_TOKENS,
        }
    }
}

/// The `[council.chairman]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChairmanConfig {
    pub slug: String,
    pub alias: String,
    pub max_tokens: u32,
}

impl Default for FileChairmanConfig {
    fn default() -> Self {
        Self {
            slug: String::new(),
            alias: String::new(),
            max_tokens: DEFAULT_CHAIRMAN_MAX_TOKENS,
        }
    }
}

/// The whole `[council]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCouncilConfig {
    /// Council members; empty means the built-in default roster
    pub members: Vec<FileMemberConfig>,
    /// The chairman; an empty slug means the built-in default chairman
    pub chairman: FileChairmanConfig,
}
