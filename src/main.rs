//! Relic - version constants from git tags
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use relic::cli::{Cli, Commands, Project};
use relic::error::{RelicError, RelicResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> RelicResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("relic=warn"),
        1 => EnvFilter::new("relic=info"),
        _ => EnvFilter::new("relic=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| RelicError::io("getting current directory", e))?,
    };
    debug!("Project directory: {}", dir.display());

    let project = Project::load(dir, cli.config)?;

    match cli.command {
        Commands::Info(args) => relic::cli::commands::info(args, &project),
        Commands::Write(args) => relic::cli::commands::write(args, &project),
        Commands::Status(args) => relic::cli::commands::status(args, &project),
        Commands::Parse(args) => relic::cli::commands::parse(args, &project),
        Commands::Config(args) => relic::cli::commands::config(args, &project),
    }
}
