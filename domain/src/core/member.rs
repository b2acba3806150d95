//! Council roster entities
//!
//! The roster is an immutable configuration value built once at startup and
//! passed by reference into the pipeline. It is never ambient global state.

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default output-token cap for a member's Stage-1 answer
pub const DEFAULT_STAGE1_MAX_TOKENS: u32 = 600;
/// Default output-token cap for a member's Stage-2 ranking
pub const DEFAULT_STAGE2_MAX_TOKENS: u32 = 300;
/// Default output-token cap for the chairman's synthesis
pub const DEFAULT_CHAIRMAN_MAX_TOKENS: u32 = 1000;

/// A model that answers in Stage 1 and judges in Stage 2 (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilMember {
    /// OpenRouter slug used for API calls
    pub slug: Model,
    /// Human-facing alias used in logs and the transcript
    pub alias: String,
    /// Output-token cap for the response stage
    pub stage1_max_tokens: u32,
    /// Output-token cap for the ranking stage
    pub stage2_max_tokens: u32,
}

impl CouncilMember {
    pub fn new(slug: Model, alias: impl Into<String>) -> Self {
        Self {
            slug,
            alias: alias.into(),
            stage1_max_tokens: DEFAULT_STAGE1_MAX_TOKENS,
            stage2_max_tokens: DEFAULT_STAGE2_MAX_TOKENS,
        }
    }

    pub fn with_caps(mut self, stage1: u32, stage2: u32) -> Self {
        self.stage1_max_tokens = stage1;
        self.stage2_max_tokens = stage2;
        self
    }
}

/// The distinguished member that synthesizes the final answer (Entity)
///
/// The chairman speaks last, is never ranked, and is never anonymized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chairman {
    pub slug: Model,
    pub alias: String,
    /// Output-token cap for the synthesis call
    pub max_tokens: u32,
}

impl Chairman {
    pub fn new(slug: Model, alias: impl Into<String>) -> Self {
        Self {
            slug,
            alias: alias.into(),
            max_tokens: DEFAULT_CHAIRMAN_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Fixed council roster: the members plus the chairman (Aggregate)
///
/// Loaded once from configuration, immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<CouncilMember>,
    chairman: Chairman,
}

impl Roster {
    pub fn new(members: Vec<CouncilMember>, chairman: Chairman) -> Result<Self, DomainError> {
        let roster = Self { members, chairman };
        roster.validate()?;
        Ok(roster)
    }

    /// The default roster, mirroring the shipped council configuration
    pub fn default_council() -> Self {
        Self {
            members: vec![
                CouncilMember::new(Model::ClaudeSonnet46, "Claude"),
                CouncilMember::new(Model::Gpt52, "GPT"),
                CouncilMember::new(Model::Grok41, "Grok"),
                CouncilMember::new(Model::KimiK25, "Kimi"),
            ],
            chairman: Chairman::new(Model::Gemini3Pro, "Gemini"),
        }
    }

    pub fn members(&self) -> &[CouncilMember] {
        &self.members
    }

    pub fn chairman(&self) -> &Chairman {
        &self.chairman
    }

    /// Member slugs in roster order
    pub fn slugs(&self) -> Vec<Model> {
        self.members.iter().map(|m| m.slug.clone()).collect()
    }

    /// Human alias for a slug; the slug itself when unknown
    pub fn alias_for(&self, slug: &Model) -> String {
        if let Some(member) = self.members.iter().find(|m| &m.slug == slug) {
            return member.alias.clone();
        }
        if &self.chairman.slug == slug {
            return self.chairman.alias.clone();
        }
        slug.to_string()
    }

    /// Per-slug output caps for the response stage
    pub fn stage1_caps(&self) -> HashMap<Model, u32> {
        self.members
            .iter()
            .map(|m| (m.slug.clone(), m.stage1_max_tokens))
            .collect()
    }

    /// Per-slug output caps for the ranking stage
    pub fn stage2_caps(&self) -> HashMap<Model, u32> {
        self.members
            .iter()
            .map(|m| (m.slug.clone(), m.stage2_max_tokens))
            .collect()
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.members.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        for member in &self.members {
            if member.alias.trim().is_empty() {
                return Err(DomainError::InvalidRoster(format!(
                    "member {} has an empty alias",
                    member.slug
                )));
            }
            if member.stage1_max_tokens == 0 || member.stage2_max_tokens == 0 {
                return Err(DomainError::InvalidRoster(format!(
                    "member {} has a zero token cap",
                    member.slug
                )));
            }
        }
        if self.chairman.alias.trim().is_empty() {
            return Err(DomainError::InvalidRoster(
                "chairman has an empty alias".to_string(),
            ));
        }
        if self.chairman.max_tokens == 0 {
            return Err(DomainError::InvalidRoster(
                "chairman has a zero token cap".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::default_council()
    }
}
