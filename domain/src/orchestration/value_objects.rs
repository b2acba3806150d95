//! Orchestration value objects - immutable result types for a council run.
//!
//! These types carry the outputs of each council stage:
//! - [`StageOneResponse`] - one member's answer to the query
//! - [`StageTwoRanking`] - one judge's free-text ranking plus its parsed labels
//! - [`SynthesisResult`] - the chairman's final answer
//! - [`CouncilVerdict`] - the complete transcript handed back to the caller

use crate::core::member::Chairman;
use crate::core::model::Model;
use crate::council::aggregate::AggregateRank;
use crate::council::label::LabelMap;
use crate::council::ranking::parse_ranking;
use crate::prompt::template::{COUNCIL_FAILURE_MESSAGE, SYNTHESIS_FAILURE_MESSAGE};
use serde::{Deserialize, Serialize};

/// One member's answer from the response stage
///
/// Members whose calls failed are simply absent from the Stage-1 list;
/// there is no failure variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOneResponse {
    /// Member alias
    pub member: String,
    /// OpenRouter slug the answer came from
    pub slug: Model,
    /// Raw answer text
    pub content: String,
}

impl StageOneResponse {
    pub fn new(member: impl Into<String>, slug: Model, content: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            slug,
            content: content.into(),
        }
    }
}

/// One judge's output from the ranking stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTwoRanking {
    /// Judge alias
    pub member: String,
    /// OpenRouter slug of the judge
    pub slug: Model,
    /// Full free-text ranking response
    pub ranking: String,
    /// Ordered labels extracted from the text
    pub parsed_ranking: Vec<String>,
}

impl StageTwoRanking {
    /// Wrap a judge's raw ranking text, parsing the label sequence from it
    pub fn new(member: impl Into<String>, slug: Model, ranking: impl Into<String>) -> Self {
        let ranking = ranking.into();
        let parsed_ranking = parse_ranking(&ranking);
        Self {
            member: member.into(),
            slug,
            ranking,
            parsed_ranking,
        }
    }
}

/// The chairman's final answer from the synthesis stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Chairman alias
    pub member: String,
    /// Chairman slug
    pub slug: Model,
    /// Synthesized answer, or a fixed failure message
    pub content: String,
}

impl SynthesisResult {
    pub fn new(member: impl Into<String>, slug: Model, content: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            slug,
            content: content.into(),
        }
    }

    /// Substitute result when the chairman call failed
    pub fn failed(chairman: &Chairman) -> Self {
        Self::new(
            chairman.alias.clone(),
            chairman.slug.clone(),
            SYNTHESIS_FAILURE_MESSAGE,
        )
    }

    /// Terminal result when no member answered in Stage 1
    pub fn council_failed(chairman: &Chairman) -> Self {
        Self::new(
            chairman.alias.clone(),
            chairman.slug.clone(),
            COUNCIL_FAILURE_MESSAGE,
        )
    }
}

/// De-anonymization map and aggregate standing for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouncilMetadata {
    /// `"Response X"` label to member alias
    pub label_to_member: LabelMap,
    /// Per-member average rank, best first
    pub aggregate_rankings: Vec<AggregateRank>,
}

impl CouncilMetadata {
    pub fn new(label_to_member: LabelMap, aggregate_rankings: Vec<AggregateRank>) -> Self {
        Self {
            label_to_member,
            aggregate_rankings,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Complete result of a council run
///
/// Always well-formed: failures along the way appear as reduced lists and
/// fixed placeholder text, never as an error crossing the pipeline boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilVerdict {
    /// Stage 1: successful answers, in roster order
    pub stage1: Vec<StageOneResponse>,
    /// Stage 2: judge rankings
    pub stage2: Vec<StageTwoRanking>,
    /// Stage 3: the chairman's synthesis
    pub synthesis: SynthesisResult,
    /// Label map and aggregate standing
    pub metadata: CouncilMetadata,
}

impl CouncilVerdict {
    pub fn new(
        stage1: Vec<StageOneResponse>,
        stage2: Vec<StageTwoRanking>,
        synthesis: SynthesisResult,
        metadata: CouncilMetadata,
    ) -> Self {
        Self {
            stage1,
            stage2,
            synthesis,
            metadata,
        }
    }

    /// Short-circuit verdict when every member failed in Stage 1
    pub fn total_failure(chairman: &Chairman) -> Self {
        Self {
            stage1: Vec::new(),
            stage2: Vec::new(),
            synthesis: SynthesisResult::council_failed(chairman),
            metadata: CouncilMetadata::empty(),
        }
    }
}
