//! CLI entrypoint for the LLM Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use council_application::{
    BootstrapCouncilUseCase, GenerateTitleUseCase, RunCouncilInput, RunCouncilUseCase,
};
use council_domain::Question;
use council_infrastructure::{ConfigLoader, OpenRouterGateway};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting LLM Council");

    // Load configuration and build the immutable roster
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    let provider = config.provider.clone();
    let roster = Arc::new(config.into_roster()?);

    // === Dependency Injection ===
    // Create infrastructure adapter (OpenRouter gateway)
    let gateway = Arc::new(
        OpenRouterGateway::from_env(&provider.api_key_env)?.with_api_url(provider.api_url),
    );

    // Question is required for both the full run and title mode
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required."),
    };
    let question =
        Question::try_new(question).ok_or_else(|| anyhow!("Question cannot be empty"))?;

    // Title mode: one minimal call, no council run
    if cli.title {
        let use_case = GenerateTitleUseCase::new(gateway, roster);
        println!("{}", use_case.execute(&question).await);
        return Ok(());
    }

    // Optional startup diagnostics
    if cli.preflight {
        let bootstrap = BootstrapCouncilUseCase::new(Arc::clone(&gateway), Arc::clone(&roster));
        let statuses = bootstrap.execute().await;
        print!("{}", ConsoleFormatter::format_manifest(&statuses));
    }

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                       LLM Council                          |");
        println!("+============================================================+");
        println!();
        println!("Question: {}", question);
        println!(
            "Members: {}",
            roster
                .members()
                .iter()
                .map(|m| m.alias.clone())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Chairman: {}", roster.chairman().alias);
        println!();
    }

    // Create use case with injected gateway
    let use_case = RunCouncilUseCase::new(gateway, Arc::clone(&roster));

    let mut input = RunCouncilInput::new(question.clone());
    if let Some(system_prompt) = &cli.system_prompt {
        input = input.with_system_prompt(system_prompt.clone());
    }

    // Execute with or without progress reporting
    let verdict = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(question.content(), &verdict),
        OutputFormat::Synthesis => {
            ConsoleFormatter::format_synthesis_only(question.content(), &verdict)
        }
        OutputFormat::Json => ConsoleFormatter::format_json(&verdict),
    };

    println!("{}", output);

    Ok(())
}
