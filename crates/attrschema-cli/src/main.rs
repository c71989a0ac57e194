//! # attrschema CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use attrschema_cli::convert::{run_convert, ConvertArgs};
use attrschema_cli::lint::{run_lint, LintArgs};
use attrschema_cli::types::run_types;

/// Translate attribute blueprints into validator schemas.
#[derive(Parser, Debug)]
#[command(name = "attrschema", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a conversion options file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a blueprint and print the schema.
    Convert(ConvertArgs),

    /// Report diagnostics for a blueprint.
    Lint(LintArgs),

    /// List recognised type aliases.
    Types,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("attrschema CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Convert(args) => run_convert(args, config),
        Commands::Lint(args) => run_lint(args, config),
        Commands::Types => run_types(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
