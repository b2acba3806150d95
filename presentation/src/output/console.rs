//! Console output formatter for council verdicts

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_application::MemberStatus;
use council_domain::CouncilVerdict;

/// Formats council verdicts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete council transcript
    pub fn format(question: &str, verdict: &CouncilVerdict) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("LLM Council Verdict"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), question));

        // Stage 1
        output.push_str(&Self::section_header("Stage 1: Council Responses"));
        if verdict.stage1.is_empty() {
            output.push_str("\nNo member responded.\n");
        }
        for response in &verdict.stage1 {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("-- {} --", response.member).yellow().bold(),
                response.content
            ));
        }

        // Stage 2
        if !verdict.stage2.is_empty() {
            output.push_str(&Self::section_header("Stage 2: Peer Rankings"));
            for ranking in &verdict.stage2 {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("-- {} ranks --", ranking.member).yellow().bold(),
                    ranking.ranking
                ));
            }
        }

        // Aggregate standing
        if !verdict.metadata.aggregate_rankings.is_empty() {
            output.push_str(&Self::section_header("Aggregate Ranking"));
            output.push('\n');
            for (place, entry) in verdict.metadata.aggregate_rankings.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} - average rank {:.2} ({} placements)\n",
                    place + 1,
                    entry.member.bold(),
                    entry.average_rank,
                    entry.rankings_count
                ));
            }
        }

        // Stage 3
        output.push_str(&Self::section_header("Stage 3: Chairman Synthesis"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("Chairman: {}", verdict.synthesis.member)
                .yellow()
                .bold(),
            verdict.synthesis.content
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(verdict: &CouncilVerdict) -> String {
        serde_json::to_string_pretty(verdict).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format synthesis only (concise output)
    pub fn format_synthesis_only(question: &str, verdict: &CouncilVerdict) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Council Verdict ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), question));
        output.push_str(&format!(
            "{} {}\n\n",
            "Chairman:".dimmed(),
            verdict.synthesis.member
        ));
        output.push_str(&verdict.synthesis.content);
        output.push('\n');

        output
    }

    /// Format the preflight manifest
    pub fn format_manifest(statuses: &[MemberStatus]) -> String {
        let mut output = String::new();

        for status in statuses {
            if status.online {
                output.push_str(&format!(
                    "  {} {} -> {} (ONLINE)\n",
                    "v".green(),
                    status.alias.bold(),
                    status.slug
                ));
            } else {
                output.push_str(&format!(
                    "  {} {} -> {} (UNREACHABLE - skipped)\n",
                    "x".red(),
                    status.alias.bold(),
                    status.slug
                ));
            }
        }

        output.push_str("  Council is live. Awaiting first query.\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, question: &str, verdict: &CouncilVerdict) -> String {
        Self::format(question, verdict)
    }

    fn format_json(&self, verdict: &CouncilVerdict) -> String {
        Self::format_json(verdict)
    }

    fn format_synthesis_only(&self, question: &str, verdict: &CouncilVerdict) -> String {
        Self::format_synthesis_only(question, verdict)
    }
}
