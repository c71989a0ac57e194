//! # attrschema-cli — Command Line Front End
//!
//! Provides the `attrschema` binary.
//!
//! ## Subcommands
//!
//! - `attrschema convert`: Translate a blueprint file and print the schema.
//! - `attrschema lint`: Report unrecognised types and conflicting
//!   associations without printing the schema.
//! - `attrschema types`: List the recognised type aliases.
//!
//! ```bash
//! attrschema convert models/user.yaml --model
//! attrschema convert user.json --no-wrap --format describe -o user.rules.json
//! attrschema lint models/user.yaml --model --deny-warnings
//! ```
//!
//! Every handler returns `anyhow::Result<u8>`; the value is the process
//! exit code.

pub mod convert;
pub mod lint;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use attrschema_core::Blueprint;
use attrschema_rules::{AssociationConflict, ConvertOptions};
use clap::Args;

/// Flags shared by the subcommands that read a blueprint.
#[derive(Args, Debug, Clone, Default)]
pub struct ConversionFlags {
    /// Read a model document and convert its `attributes` mapping.
    #[arg(long)]
    pub model: bool,

    /// Fail on descriptors that set both `model` and `collection`.
    #[arg(long)]
    pub reject_conflicts: bool,
}

/// Load options from `config` (if given) and apply flag overrides.
pub fn load_options(config: Option<&Path>, flags: &ConversionFlags) -> Result<ConvertOptions> {
    let mut options = match config {
        Some(path) => ConvertOptions::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConvertOptions::default(),
    };
    if flags.reject_conflicts {
        options.association_conflict = AssociationConflict::Reject;
    }
    Ok(options)
}

/// Read a blueprint file.
pub fn load_blueprint(path: &Path, flags: &ConversionFlags) -> Result<Blueprint> {
    let blueprint = Blueprint::from_path(path, flags.model)
        .with_context(|| format!("reading blueprint {}", path.display()))?;
    tracing::info!(path = %path.display(), fields = blueprint.len(), "loaded blueprint");
    Ok(blueprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_without_config() {
        let opts = load_options(None, &ConversionFlags::default()).unwrap();
        assert_eq!(opts, ConvertOptions::default());
    }

    #[test]
    fn reject_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attrschema.yaml");
        std::fs::write(&path, "association_conflict: model_wins\nwrap_output: false\n").unwrap();

        let flags = ConversionFlags {
            reject_conflicts: true,
            ..ConversionFlags::default()
        };
        let opts = load_options(Some(&path), &flags).unwrap();
        assert_eq!(opts.association_conflict, AssociationConflict::Reject);
        assert!(!opts.wrap_output);
    }

    #[test]
    fn bad_config_mentions_the_path() {
        let err = load_options(Some(Path::new("/nonexistent/cfg.yaml")), &ConversionFlags::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/cfg.yaml"));
    }

    #[test]
    fn loads_model_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.json");
        std::fs::write(&path, r#"{"attributes": {"name": "string"}, "tableName": "users"}"#).unwrap();

        let flags = ConversionFlags {
            model: true,
            ..ConversionFlags::default()
        };
        let bp = load_blueprint(&path, &flags).unwrap();
        assert_eq!(bp.len(), 1);
        assert!(bp.get("name").is_some());
    }
}
