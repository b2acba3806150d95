//! Configuration loading and conversion to domain types

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileChairmanConfig, FileConfig, FileCouncilConfig, FileMemberConfig,
    FileProviderConfig,
};
pub use loader::ConfigLoader;
