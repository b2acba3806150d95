//! Prompt templates for the council flow

/// Fixed answer substituted when the chairman call fails
pub const SYNTHESIS_FAILURE_MESSAGE: &str =
    "Error: Chairman was unable to generate a synthesis.";

/// Fixed answer returned when no member responds in Stage 1
pub const COUNCIL_FAILURE_MESSAGE: &str =
    "All council members failed to respond. Please try again.";

/// Fallback conversation title
pub const DEFAULT_TITLE: &str = "New Conversation";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// The single shared ranking prompt every judge receives in Stage 2
    ///
    /// `responses` pairs each anonymization label (`"Response A"`) with the
    /// Stage-1 answer it stands for, in label order.
    pub fn ranking_prompt(question: &str, responses: &[(String, String)]) -> String {
        let responses_text = responses
            .iter()
            .map(|(label, content)| format!("{}:\n{}", label, content))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"You are evaluating different responses to the following question:

Question: {question}

Here are the responses from different models (anonymized):

{responses_text}

Your task:
1. Evaluate each response individually - what it does well and what it misses.
2. At the very end, provide a FINAL RANKING.

IMPORTANT: Your final ranking MUST be formatted EXACTLY as follows:
- Start with the line "FINAL RANKING:" (all caps, with colon)
- List responses from best to worst as a numbered list
- Each line: number, period, space, then ONLY the label (e.g. "1. Response A")

FINAL RANKING:
1. Response A
2. Response B

Now provide your evaluation and ranking:"#
        )
    }

    /// The chairman's synthesis prompt
    ///
    /// Stage-1 answers and Stage-2 rankings are alias-labeled here, not
    /// anonymized; the chairman sees who said what.
    pub fn chairman_prompt(
        chairman_alias: &str,
        question: &str,
        responses: &[(String, String)],
        rankings: &[(String, String)],
    ) -> String {
        let stage1_text = responses
            .iter()
            .map(|(member, content)| format!("{}:\n{}", member, content))
            .collect::<Vec<_>>()
            .join("\n\n");
        let stage2_text = rankings
            .iter()
            .map(|(member, ranking)| format!("{} ranking:\n{}", member, ranking))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"You are {chairman_alias}, Chairman of the LLM Council. Multiple AI models have responded to a user question, then ranked each other.

Original Question: {question}

STAGE 1 - Individual Responses:
{stage1_text}

STAGE 2 - Peer Rankings:
{stage2_text}

Synthesize all of this into a single, comprehensive, accurate final answer. Consider the individual responses, peer rankings, and patterns of agreement. Deliver the council verdict:"#
        )
    }

    /// Prompt for the low-cap conversation title call
    pub fn title_prompt(question: &str) -> String {
        format!(
            "Generate a very short title (3-5 words max) summarizing the question. \
             No quotes or punctuation.\n\nQuestion: {question}\n\nTitle:"
        )
    }
}
