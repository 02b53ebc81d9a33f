//! Parameter resolution CLI
//!
//! Resolves declared deployment parameters from overrides, defaults and
//! interactive prompts, then prints the resolved values.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Info-level events carry user-facing notices (re-prompts, immutable params)
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Resolve {
            input,
            non_interactive,
        } => commands::run_resolve(&input, non_interactive),
        Commands::Configure {
            input,
            previous,
            non_interactive,
        } => commands::run_configure(&input, &previous, non_interactive),
        Commands::Update {
            input,
            from,
            previous,
            non_interactive,
        } => commands::run_update(&input, &from, &previous, non_interactive),
    }
}
