//! OpenRouter adapter: HTTP transport to the chat-completions endpoint

pub mod gateway;
pub mod protocol;

pub use gateway::{OpenRouterGateway, API_KEY_ENV, DEFAULT_API_URL};
