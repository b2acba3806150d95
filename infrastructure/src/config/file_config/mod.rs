//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types.

mod council;
mod provider;

pub use council::{FileChairmanConfig, FileCouncilConfig, FileMemberConfig};
pub use provider::FileProviderConfig;

use council_domain::{Chairman, CouncilMember, DomainError, Model, Roster};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when turning file configuration into domain values
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("council member slug cannot be empty")]
    EmptyMemberSlug,

    #[error("chairman slug cannot be empty when members are configured")]
    MissingChairman,

    #[error("invalid roster: {0}")]
    Roster(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Council roster
    pub council: FileCouncilConfig,
    /// Chat-completions provider settings
    pub provider: FileProviderConfig,
}

impl FileConfig {
    /// Build the immutable domain roster from this configuration.
    ///
    /// An empty `[council]` section yields the built-in default roster.
    /// A configured member list requires a configured chairman.
    pub fn into_roster(self) -> Result<Roster, ConfigValidationError> {
        if self.council.members.is_empty() {
            return Ok(Roster::default_council());
        }

        let mut members = Vec::with_capacity(self.council.members.len());
        for member in &self.council.members {
            if member.slug.trim().is_empty() {
                return Err(ConfigValidationError::EmptyMemberSlug);
            }
            let slug: Model = member.slug.parse().expect("Model::from_str is infallible");
            members.push(
                CouncilMember::new(slug, member.alias.clone())
                    .with_caps(member.stage1_max_tokens, member.stage2_max_tokens),
            );
        }

        let chairman = &self.council.chairman;
        if chairman.slug.trim().is_empty() {
            return Err(ConfigValidationError::MissingChairman);
        }
        let chairman_slug: Model = chairman.slug.parse().expect("Model::from_str is infallible");
        let chairman = Chairman::new(chairman_slug, chairman.alias.clone())
            .with_max_tokens(chairman.max_tokens);

        Ok(Roster::new(members, chairman)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
api_url = "http://localhost:9999/v1/chat/completions"
api_key_env = "TEST_KEY"

[[council.members]]
slug = "anthropic/claude-sonnet-4-6"
alias = "Claude"
stage1_max_tokens = 700
stage2_max_tokens = 350

[[council.members]]
slug = "openai/gpt-5.2"
alias = "GPT"

[council.chairman]
slug = "google/gemini-3-pro"
alias = "Gemini"
max_tokens = 1200
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.api_key_env, "TEST_KEY");
        assert_eq!(config.council.members.len(), 2);
        assert_eq!(config.council.members[0].stage1_max_tokens, 700);
        // Defaults apply per member
        assert_eq!(config.council.members[1].stage1_max_tokens, 600);
        assert_eq!(config.council.chairman.max_tokens, 1200);

        let roster = config.into_roster().unwrap();
        assert_eq!(roster.members().len(), 2);
        assert_eq!(roster.chairman().alias, "Gemini");
    }

    #[test]
    fn test_default_config_uses_builtin_roster() {
        let config = FileConfig::default();
        assert!(config.council.members.is_empty());

        let roster = config.into_roster().unwrap();
        assert_eq!(roster.members().len(), 4);
        assert_eq!(roster.chairman().slug.as_str(), "google/gemini-3-pro");
    }

    #[test]
    fn test_members_without_chairman_rejected() {
        let toml_str = r#"
[[council.members]]
slug = "openai/gpt-5.2"
alias = "GPT"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.into_roster(),
            Err(ConfigValidationError::MissingChairman)
        ));
    }

    #[test]
    fn test_empty_member_slug_rejected() {
        let toml_str = r#"
[[council.members]]
alias = "Nameless"

[council.chairman]
slug = "google/gemini-3-pro"
alias = "Gemini"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.into_roster(),
            Err(ConfigValidationError::EmptyMemberSlug)
        ));
    }

    #[test]
    fn test_empty_alias_rejected_by_domain_validation() {
        let toml_str = r#"
[[council.members]]
slug = "openai/gpt-5.2"

[council.chairman]
slug = "google/gemini-3-pro"
alias = "Gemini"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.into_roster(),
            Err(ConfigValidationError::Roster(_))
        ));
    }
}
