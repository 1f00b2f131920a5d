//! Baler CLI — the command-line interface for the Baler build core.
//!
//! Provides `baler init` for project scaffolding, `baler plan` for
//! computing the ordered bundle sequence, and `baler status` for reporting
//! which source files changed since the last recorded build.

#![warn(missing_docs)]

mod init;
mod pipeline;
mod plan;
mod status;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Baler — an incremental web-bundle build core.
#[derive(Parser, Debug)]
#[command(name = "baler", version, about = "Baler build core")]
pub struct Cli {
    /// Suppress all output except errors and results.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `baler.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Baler project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes
        /// in the current directory.
        name: Option<String>,
    },
    /// Print the ordered bundle sequence for the current project.
    Plan(PlanArgs),
    /// Report source files changed since the last recorded build.
    Status(StatusArgs),
}

/// Arguments for the `baler plan` subcommand.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Output format for the bundle sequence.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `baler status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Record a fresh snapshot, treating the current state as built.
    #[arg(long)]
    pub record: bool,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-result output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Init { name } => init::run(name),
        Command::Plan(ref args) => plan::run(args, &global),
        Command::Status(ref args) => status::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
