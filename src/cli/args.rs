//! CLI argument definitions using clap derive

use crate::module::ModuleFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Relic - version constants from git tags
///
/// Derives the project version from `git describe`, caches it in
/// RELIC-INFO and writes a module of version constants.
#[derive(Parser, Debug)]
#[command(name = "relic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file path (defaults to <project>/relic.toml)
    #[arg(short, long, global = true, env = "RELIC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current version
    Info(InfoArgs),

    /// Write the version module
    Write(WriteArgs),

    /// Print the build status (release or development)
    Status(StatusArgs),

    /// Parse a describe string without touching the repository
    Parse(ParseArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    /// Tag prefix pattern to strip (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for the write command
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// Output directory (defaults to module.dir, then the project directory)
    pub dir: Option<PathBuf>,

    /// Output file name (defaults to the format's own)
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Module language
    #[arg(long, value_enum)]
    pub format: Option<ModuleFormat>,

    /// Tag prefix pattern to strip (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Tag prefix pattern to strip (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Descriptor, e.g. 1.2.3-4-gdeadbeef-dirty
    pub descriptor: String,

    /// Tag prefix pattern to strip (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}
