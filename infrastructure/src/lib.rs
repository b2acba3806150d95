//! Infrastructure layer for llm-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod openrouter;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileCouncilConfig, FileMemberConfig,
    FileProviderConfig,
};
pub use openrouter::{OpenRouterGateway, API_KEY_ENV, DEFAULT_API_URL};
