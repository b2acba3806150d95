//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with all stages and the aggregate standing
    Full,
    /// Only the chairman's synthesis
    Synthesis,
    /// JSON output
    Json,
}

/// CLI arguments for llm-council
#[derive(Parser, Debug)]
#[command(name = "llm-council")]
#[command(author, version, about = "LLM Council - A council of models answers, ranks, and synthesizes")]
#[command(long_about = r#"
llm-council puts a question before a fixed council of models.

The run has three stages:
1. Council Responses: every member answers the question in parallel
2. Peer Rankings: every member ranks the anonymized answers
3. Chairman Synthesis: the chairman folds everything into a final verdict

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/llm-council/config.toml   Global config

Example:
  llm-council "What's the best way to handle errors in Rust?"
  llm-council --output full "Compare async runtimes"
  llm-council --title "Compare async runtimes"
"#)]
pub struct Cli {
    /// The question to put before the council
    pub question: Option<String>,

    /// System prompt prepended to the response and synthesis stages
    #[arg(short, long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// Generate a short conversation title instead of running the council
    #[arg(long)]
    pub title: bool,

    /// Probe every model and print the council manifest before the run
    #[arg(long)]
    pub preflight: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "synthesis")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
