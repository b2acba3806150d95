//! Wire types for the OpenRouter chat-completions endpoint

use council_domain::Message;
use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Success response body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// The assistant message inside a choice
///
/// `content` can be absent or null on malformed replies; that case is an
/// error at the gateway, not here. `reasoning_details` is passed through
/// without interpretation.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_details: Option<serde_json::Value>,
}
