//! Council deliberation logic
//!
//! Pure domain logic for the three-stage council flow: anonymization
//! labels for the ranking stage, extraction of rankings from free-form
//! judge output, and aggregation of those rankings into a standing.
//! No I/O and no session management lives here.

pub mod aggregate;
pub mod label;
pub mod ranking;

pub use aggregate::{aggregate_rankings, AggregateRank};
pub use label::{assign_labels, LabelMap, ResponseLabel};
pub use ranking::{parse_ranking, RANKING_MARKER};
