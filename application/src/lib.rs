//! Application layer for llm-council
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_gateway::{ChatGateway, ChatReply, ChatRequest, GatewayError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::bootstrap::{BootstrapCouncilUseCase, MemberStatus};
pub use use_cases::generate_title::GenerateTitleUseCase;
pub use use_cases::run_council::{RunCouncilError, RunCouncilInput, RunCouncilUseCase};
