//! Orchestration domain entities

use serde::{Deserialize, Serialize};

/// Stage of a council run
///
/// The pipeline walks these strictly in order; the only branch is the
/// short circuit to a failure verdict when Collect produces nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Stage 1 - every member answers the query
    Collect,
    /// Stage 2 - every member ranks the anonymized answers
    Rank,
    /// Rank aggregation over all judges (pure computation)
    Aggregate,
    /// Stage 3 - the chairman synthesizes the final answer
    Synthesize,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Collect => "collect",
            Stage::Rank => "rank",
            Stage::Aggregate => "aggregate",
            Stage::Synthesize => "synthesize",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Collect => "Council Responses",
            Stage::Rank => "Peer Rankings",
            Stage::Aggregate => "Rank Aggregation",
            Stage::Synthesize => "Chairman Synthesis",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
