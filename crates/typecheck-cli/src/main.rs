//! # typecheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod inspect;

/// Inspect the runtime type of JSON and YAML values.
#[derive(Parser, Debug)]
#[command(name = "typecheck", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a document: tag, structural descriptor and format checks.
    Inspect(InspectArgs),

    /// List the supported type tags and rule kinds.
    Types,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// JSON or YAML file to read ('-' or omitted for stdin).
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Inspect every element of a top-level array instead of the array itself.
    #[arg(long)]
    pub each: bool,

    /// Treat RFC 3339 strings as dates.
    #[arg(long)]
    pub dates: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Inspect(args) => inspect::run_inspect(&args),
        Commands::Types => {
            inspect::run_types();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
