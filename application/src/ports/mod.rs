//! Port definitions (interfaces to the outside world)

pub mod chat_gateway;
pub mod progress;

pub use chat_gateway::{ChatGateway, ChatReply, ChatRequest, GatewayError};
pub use progress::{NoProgress, ProgressNotifier};
