//! Presentation layer for llm-council
//!
//! This crate contains the CLI argument definitions, output formatting,
//! and progress display.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use output::{ConsoleFormatter, OutputFormatter};
pub use progress::{ProgressReporter, SimpleProgress};
