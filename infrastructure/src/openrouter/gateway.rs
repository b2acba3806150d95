//! Chat gateway implementation for the OpenRouter API

use crate::openrouter::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use council_application::ports::chat_gateway::{ChatGateway, ChatReply, ChatRequest, GatewayError};
use tracing::{debug, warn};

/// Default chat-completions endpoint
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// [`ChatGateway`] adapter over the OpenRouter HTTP API
///
/// One shared connection pool; the per-call timeout comes from each
/// [`ChatRequest`] rather than the client builder.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenRouterGateway {
    pub fn new(api_key: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Read the API key from the given environment variable
    pub fn from_env(api_key_env: &str) -> Result<Self, GatewayError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::Other(format!("environment variable {} is not set", api_key_env))
            })?;
        Self::new(api_key)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl ChatGateway for OpenRouterGateway {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, GatewayError> {
        let payload = ChatCompletionRequest {
            model: request.model.as_str(),
            messages: &request.messages,
            max_tokens: request.max_tokens,
        };

        debug!(
            "Requesting {} (cap: {:?})",
            request.model, request.max_tokens
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .timeout(request.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Model {} transport error: {}", request.model, e);
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Model {} returned status {}", request.model, status);
            return Err(GatewayError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            warn!("Model {} returned an unreadable body: {}", request.model, e);
            GatewayError::MalformedResponse(e.to_string())
        })?;

        let choice = body.choices.into_iter().next().ok_or_else(|| {
            warn!("Model {} returned no choices", request.model);
            GatewayError::MalformedResponse("no choices in response".to_string())
        })?;

        let content = choice.message.content.ok_or_else(|| {
            warn!("Model {} returned a choice without content", request.model);
            GatewayError::MalformedResponse("missing content field".to_string())
        })?;

        Ok(ChatReply {
            content,
            reasoning: choice.message.reasoning_details,
        })
    }
}
