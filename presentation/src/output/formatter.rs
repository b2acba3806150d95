//! Output formatter trait

use council_domain::CouncilVerdict;

/// Trait for formatting council verdicts
pub trait OutputFormatter {
    /// Format the complete council transcript
    fn format(&self, question: &str, verdict: &CouncilVerdict) -> String;

    /// Format as JSON
    fn format_json(&self, verdict: &CouncilVerdict) -> String;

    /// Format synthesis only (concise output)
    fn format_synthesis_only(&self, question: &str, verdict: &CouncilVerdict) -> String;
}
