//! Ranking extraction from free-text judge responses
//!
//! Models are unreliable at following exact output formats, so extraction
//! degrades gracefully instead of failing outright:
//!
//! 1. Find the literal `FINAL RANKING:` marker. Without it, fall back to
//!    scanning the whole text for label mentions.
//! 2. After the marker, prefer numbered-list lines (`1. Response A`) in
//!    textual order.
//! 3. With a marker but no numbered lines, take every bare `Response X`
//!    mention after the marker, in order of appearance.
//!
//! Duplicate mentions are preserved; the aggregator treats repeats as
//! repeated placements.

use regex::Regex;
use std::sync::LazyLock;

/// Literal marker a judge is instructed to emit before its ranking
pub const RANKING_MARKER: &str = "FINAL RANKING:";

static NUMBERED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*(Response [A-Z])").expect("valid regex"));

static BARE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Response [A-Z]").expect("valid regex"));

/// Extract the ordered label sequence from a judge's free-text ranking
pub fn parse_ranking(ranking_text: &str) -> Vec<String> {
    if let Some((_, section)) = ranking_text.split_once(RANKING_MARKER) {
        let numbered: Vec<String> = NUMBERED_LABEL
            .captures_iter(section)
            .map(|caps| caps[1].to_string())
            .collect();
        if !numbered.is_empty() {
            return numbered;
        }
        return bare_labels(section);
    }
    bare_labels(ranking_text)
}

fn bare_labels(text: &str) -> Vec<String> {
    BARE_LABEL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
