//! Rank aggregation across all judges
//!
//! Turns each judge's parsed label sequence plus the label map into
//! per-member average placement, best first.

use crate::council::label::LabelMap;
use crate::orchestration::value_objects::StageTwoRanking;
use serde::{Deserialize, Serialize};

/// One member's aggregate standing across all judges that placed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRank {
    /// Member alias
    pub member: String,
    /// Mean 1-based placement, rounded to two decimals
    pub average_rank: f64,
    /// How many placements contributed to the average
    pub rankings_count: usize,
}

/// Compute per-member average ranks, sorted ascending (lower is better)
///
/// Labels absent from the map (a hallucinated `Response Z`) are silently
/// ignored. A member placed by no judge is excluded entirely rather than
/// scored as worst. Repeated labels in one judge's sequence count as
/// repeated placements. Ties keep first-appearance order (stable sort).
pub fn aggregate_rankings(
    stage2_results: &[StageTwoRanking],
    label_to_member: &LabelMap,
) -> Vec<AggregateRank> {
    // Positions keyed by alias, in order of first appearance
    let mut positions: Vec<(String, Vec<usize>)> = Vec::new();

    for result in stage2_results {
        for (index, label) in result.parsed_ranking.iter().enumerate() {
            let Some(member) = label_to_member.get(label) else {
                continue;
            };
            let position = index + 1;
            match positions.iter_mut().find(|(alias, _)| alias == member) {
                Some((_, list)) => list.push(position),
                None => positions.push((member.to_string(), vec![position])),
            }
        }
    }

    let mut aggregate: Vec<AggregateRank> = positions
        .into_iter()
        .map(|(member, list)| {
            let average = list.iter().sum::<usize>() as f64 / list.len() as f64;
            AggregateRank {
                member,
                average_rank: (average * 100.0).round() / 100.0,
                rankings_count: list.len(),
            }
        })
        .collect();

    aggregate.sort_by(|a, b| a.average_rank.total_cmp(&b.average_rank));
    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;

    fn ranking(member: &str, text: &str) -> StageTwoRanking {
        StageTwoRanking::new(member, Model::Custom(format!("test/{member}")), text)
    }

    fn label_map(aliases: &[&str]) -> LabelMap {
        LabelMap::assign(&aliases.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_two_judges_agree() {
        // Labels: A -> X, B -> Y. Both judges place A first, B second.
        let labels = label_map(&["X", "Y"]);
        let results = vec![
            ranking("X", "FINAL RANKING:\n1. Response A\n2. Response B"),
            ranking("Y", "FINAL RANKING:\n1. Response A\n2. Response B"),
        ];

        let aggregate = aggregate_rankings(&results, &labels);
        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate[0].member, "X");
        assert_eq!(aggregate[0].average_rank, 1.0);
        assert_eq!(aggregate[0].rankings_count, 2);
        assert_eq!(aggregate[1].member, "Y");
        assert_eq!(aggregate[1].average_rank, 2.0);
        assert_eq!(aggregate[1].rankings_count, 2);
    }

    #[test]
    fn test_average_rounded_to_two_decimals() {
        // X placed at 1, 2, 2 -> 5/3 = 1.666... -> 1.67
        let labels = label_map(&["X"]);
        let results = vec![
            ranking("j1", "FINAL RANKING:\n1. Response A"),
            ranking("j2", "Response B then Response A"),
            ranking("j3", "Response B then Response A"),
        ];

        let aggregate = aggregate_rankings(&results, &labels);
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[0].average_rank, 1.67);
        assert_eq!(aggregate[0].rankings_count, 3);
    }

    #[test]
    fn test_unmentioned_member_excluded() {
        let labels = label_map(&["X", "Y"]);
        let results = vec![ranking("j1", "FINAL RANKING:\n1. Response A")];

        let aggregate = aggregate_rankings(&results, &labels);
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[0].member, "X");
    }

    #[test]
    fn test_hallucinated_label_ignored() {
        let labels = label_map(&["X"]);
        let results = vec![ranking("j1", "FINAL RANKING:\n1. Response Z\n2. Response A")];

        let aggregate = aggregate_rankings(&results, &labels);
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[0].member, "X");
        // Position 2 stands even though position 1 was unknown
        assert_eq!(aggregate[0].average_rank, 2.0);
    }

    #[test]
    fn test_repeated_mentions_count_as_repeated_placements() {
        let labels = label_map(&["X"]);
        let results = vec![ranking(
            "j1",
            "FINAL RANKING: Response A is best. Yes, Response A.",
        )];

        let aggregate = aggregate_rankings(&results, &labels);
        assert_eq!(aggregate[0].rankings_count, 2);
        assert_eq!(aggregate[0].average_rank, 1.5);
    }

    #[test]
    fn test_no_results_yields_empty() {
        let labels = label_map(&["X"]);
        assert!(aggregate_rankings(&[], &labels).is_empty());
    }
}
