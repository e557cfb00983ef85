//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Kith CLI - Keep track of the people you know and how they are related.
#[derive(Debug, Parser)]
#[command(name = "kith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KITH_CONFIG")]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (short IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a relationship command and print the result without running it
    Check(CheckArgs),

    /// Show the roles a familial relationship type admits
    Roles(RolesArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Which relationship command to parse
    #[arg(value_enum)]
    pub shape: ShapeArg,

    /// Command arguments (e.g., "/0001 parent/0002 child/bioparents")
    pub args: String,
}

/// Arguments for the roles command.
#[derive(Debug, Parser)]
pub struct RolesArgs {
    /// Familial relationship type (bioparents, siblings or spouses)
    pub relationship_type: String,
}

/// Relationship command shape argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShapeArg {
    /// addrelation
    Add,
    /// editrelation
    Edit,
    /// deleterelation (by pair or by type)
    Delete,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
