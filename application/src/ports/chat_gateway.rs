//! Chat gateway port
//!
//! Defines the interface for sending one chat-style request to one named
//! model. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use council_domain::{Message, Model};
use std::time::Duration;
use thiserror::Error;

/// Default per-call timeout for stage requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for the 1-token liveness probe
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(20);

/// Errors that can occur during a gateway call
///
/// These never cross the pipeline boundary; the dispatcher converts them
/// into an absent result for the offending model.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One chat-completion request to a named model
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: Model,
    /// Ordered message list, each tagged system or user
    pub messages: Vec<Message>,
    /// Provider-enforced output-token cap
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

impl ChatRequest {
    pub fn new(model: Model, messages: Vec<Message>) -> Self {
        Self {
            model,
            messages,
            max_tokens: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Normalized reply from a chat-completion call
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    /// Auxiliary reasoning detail, passed through but never interpreted
    pub reasoning: Option<serde_json::Value>,
}

/// Gateway for one-shot chat completions
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send a request and return the model's reply
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, GatewayError>;

    /// Cheap liveness probe: a 1-token request with a short timeout.
    ///
    /// Used only for startup diagnostics, never on a stage's hot path.
    async fn probe(&self, model: &Model) -> bool {
        let request = ChatRequest::new(model.clone(), vec![Message::user("hi")])
            .with_max_tokens(1)
            .with_timeout(PROBE_TIMEOUT);
        self.complete(request).await.is_ok()
    }
}
