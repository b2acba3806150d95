//! Anonymization labels for the peer-ranking stage
//!
//! Labels are assigned fresh for every council run and are scoped to that
//! run. Assignment is by position in the Stage-1 result list, so insertion
//! order is label order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single-letter anonymization label, rendered as `"Response A"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseLabel(char);

impl ResponseLabel {
    /// Label for a 0-based position in the Stage-1 result list
    ///
    /// # Panics
    /// Panics past position 25; a council never fields more than 26 members.
    pub fn from_index(index: usize) -> Self {
        assert!(index < 26, "label index out of range: {index}");
        Self((b'A' + index as u8) as char)
    }

    pub fn letter(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for ResponseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Response {}", self.0)
    }
}

/// Labels `A`, `B`, ... for `count` Stage-1 results, in list order
pub fn assign_labels(count: usize) -> Vec<ResponseLabel> {
    (0..count).map(ResponseLabel::from_index).collect()
}

/// Mapping from label text (`"Response A"`) to member alias
///
/// Retained after Stage 2 so the aggregator and the transcript can
/// de-anonymize. BTreeMap keys iterate in label order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap(BTreeMap<String, String>);

impl LabelMap {
    /// Build the label map for a list of Stage-1 respondent aliases
    pub fn assign(aliases: &[String]) -> Self {
        Self(
            aliases
                .iter()
                .enumerate()
                .map(|(i, alias)| (ResponseLabel::from_index(i).to_string(), alias.clone()))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Member alias behind a label, if the label was assigned this run
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_list_order() {
        let labels = assign_labels(3);
        assert_eq!(labels[0].to_string(), "Response A");
        assert_eq!(labels[1].to_string(), "Response B");
        assert_eq!(labels[2].to_string(), "Response C");
    }

    #[test]
    fn test_label_map_one_entry_per_respondent() {
        let aliases = vec!["Claude".to_string(), "GPT".to_string(), "Grok".to_string()];
        let map = LabelMap::assign(&aliases);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("Response A"), Some("Claude"));
        assert_eq!(map.get("Response B"), Some("GPT"));
        assert_eq!(map.get("Response C"), Some("Grok"));
        assert_eq!(map.get("Response Z"), None);
    }

    #[test]
    fn test_label_map_iterates_in_label_order() {
        let aliases = vec!["Claude".to_string(), "GPT".to_string()];
        let map = LabelMap::assign(&aliases);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Response A", "Response B"]);
    }

    #[test]
    #[should_panic]
    fn test_label_index_out_of_range() {
        ResponseLabel::from_index(26);
    }
}
