//! Conversation title generation
//!
//! A single low-cap call to the first roster member. Failures fall back
//! to a fixed placeholder; long titles are clipped.

use crate::ports::chat_gateway::{ChatGateway, ChatRequest};
use council_domain::{Message, PromptTemplate, Question, Roster, DEFAULT_TITLE};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Output-token cap for the title call
const TITLE_MAX_TOKENS: u32 = 20;

/// Per-call timeout for the title call
const TITLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Titles longer than this are clipped to 47 characters plus `...`
const TITLE_MAX_LEN: usize = 50;
const TITLE_CLIP_LEN: usize = 47;

/// Use case for generating a short conversation title
pub struct GenerateTitleUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    roster: Arc<Roster>,
}

impl<G: ChatGateway + 'static> GenerateTitleUseCase<G> {
    pub fn new(gateway: Arc<G>, roster: Arc<Roster>) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(&self, question: &Question) -> String {
        let Some(member) = self.roster.members().first() else {
            return DEFAULT_TITLE.to_string();
        };

        let prompt = PromptTemplate::title_prompt(question.content());
        let request = ChatRequest::new(member.slug.clone(), vec![Message::user(prompt)])
            .with_max_tokens(TITLE_MAX_TOKENS)
            .with_timeout(TITLE_TIMEOUT);

        match self.gateway.complete(request).await {
            Ok(reply) => clip_title(
                reply
                    .content
                    .trim()
                    .trim_matches(|c| c == '"' || c == '\''),
            ),
            Err(e) => {
                warn!("Title generation via {} failed: {}", member.slug, e);
                DEFAULT_TITLE.to_string()
            }
        }
    }
}

fn clip_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_LEN {
        let head: String = title.chars().take(TITLE_CLIP_LEN).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}
