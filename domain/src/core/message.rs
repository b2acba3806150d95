//! Chat message value objects shared by every model call

use serde::{Deserialize, Serialize};

/// Role tag carried on every chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One entry in the ordered message list sent to a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Build the Stage-1 message sequence: optional system prompt, then the query
pub fn build_messages(system_prompt: Option<&str>, user_content: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if let Some(prompt) = system_prompt
        && !prompt.is_empty()
    {
        messages.push(Message::system(prompt));
    }
    messages.push(Message::user(user_content));
    messages
}
