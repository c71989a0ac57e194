//! # Convert Subcommand
//!
//! Translates one blueprint file and prints the result as pretty JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use attrschema_rules::{Converter, Translation};
use clap::{Args, ValueEnum};
use serde_json::Value;

use crate::{load_blueprint, load_options, ConversionFlags};

/// Output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON Schema (Draft 2020-12).
    #[default]
    JsonSchema,
    /// Structural dump of the rule tree.
    Describe,
}

/// Arguments for the convert subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Blueprint file (`.json`, `.yaml` or `.yml`).
    pub blueprint: PathBuf,

    /// Emit the bare field mapping instead of an object schema.
    #[arg(long)]
    pub no_wrap: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::JsonSchema)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub flags: ConversionFlags,
}

/// Execute the convert subcommand.
pub fn run_convert(args: &ConvertArgs, config: Option<&Path>) -> Result<u8> {
    let mut options = load_options(config, &args.flags)?;
    if args.no_wrap {
        options.wrap_output = false;
    }
    let blueprint = load_blueprint(&args.blueprint, &args.flags)?;

    let translation = Converter::new(options)
        .convert(&blueprint)
        .with_context(|| format!("converting {}", args.blueprint.display()))?;

    let text = serde_json::to_string_pretty(&render(&translation, args.format)?)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "schema written");
        }
        None => println!("{text}"),
    }
    Ok(0)
}

/// Render a translation in the requested format.
pub fn render(translation: &Translation, format: OutputFormat) -> Result<Value> {
    Ok(match format {
        OutputFormat::JsonSchema => translation.schema.to_json_schema(),
        OutputFormat::Describe => serde_json::to_value(&translation.schema)?,
    })
}
