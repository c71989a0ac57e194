//! # Lint Subcommand
//!
//! Converts a blueprint and reports its diagnostics, one per line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use attrschema_rules::{Converter, NullSink};
use clap::Args;

use crate::{load_blueprint, load_options, ConversionFlags};

/// Arguments for the lint subcommand.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Blueprint file (`.json`, `.yaml` or `.yml`).
    pub blueprint: PathBuf,

    /// Exit with status 1 when any diagnostic is reported.
    #[arg(long)]
    pub deny_warnings: bool,

    #[command(flatten)]
    pub flags: ConversionFlags,
}

/// Execute the lint subcommand.
pub fn run_lint(args: &LintArgs, config: Option<&Path>) -> Result<u8> {
    let lines = lint_lines(args, config)?;
    for line in &lines {
        println!("{line}");
    }
    if lines.is_empty() {
        tracing::info!(path = %args.blueprint.display(), "no diagnostics");
    }
    Ok(exit_code(lines.len(), args.deny_warnings))
}

/// Diagnostics for the blueprint, formatted as `<file>: <message>`.
pub fn lint_lines(args: &LintArgs, config: Option<&Path>) -> Result<Vec<String>> {
    let options = load_options(config, &args.flags)?;
    let blueprint = load_blueprint(&args.blueprint, &args.flags)?;
    // Printed below; the tracing sink would report them twice.
    let translation = Converter::new(options)
        .with_sink(&NullSink)
        .convert(&blueprint)
        .with_context(|| format!("converting {}", args.blueprint.display()))?;

    Ok(translation
        .diagnostics
        .iter()
        .map(|d| format!("{}: {d}", args.blueprint.display()))
        .collect())
}

fn exit_code(diagnostics: usize, deny_warnings: bool) -> u8 {
    u8::from(deny_warnings && diagnostics > 0)
}
