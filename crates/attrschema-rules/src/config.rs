//! Conversion options.
//!
//! Options can be built in code or loaded from a YAML/JSON file. Every key
//! is optional and falls back to [`ConvertOptions::default`]:
//!
//! ```yaml
//! wrap_output: true
//! association_conflict: model_wins   # or: reject
//! reserved_keys: [toJSON]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use attrschema_core::DEFAULT_RESERVED_KEYS;

use crate::association::AssociationConflict;

/// Options for a [`crate::Converter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Wrap the field mapping in an object rule.
    pub wrap_output: bool,
    /// Policy for descriptors that set both `model` and `collection`.
    pub association_conflict: AssociationConflict,
    /// Blueprint keys that are never fields.
    pub reserved_keys: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            wrap_output: true,
            association_conflict: AssociationConflict::default(),
            reserved_keys: DEFAULT_RESERVED_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ConvertOptions {
    pub fn with_wrap_output(mut self, wrap: bool) -> Self {
        self.wrap_output = wrap;
        self
    }

    pub fn with_association_conflict(mut self, policy: AssociationConflict) -> Self {
        self.association_conflict = policy;
        self
    }

    /// Whether `key` is reserved and must be skipped.
    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved_keys.iter().any(|k| k == key)
    }

    /// Parse options from YAML text. JSON is accepted too.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load options from a file. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&text)?)
        } else {
            Self::from_yaml_str(&text)
        }
    }
}

/// Errors loading [`ConvertOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// File that could not be read.
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let opts = ConvertOptions::default();
        assert!(opts.wrap_output);
        assert_eq!(opts.association_conflict, AssociationConflict::ModelWins);
        assert!(opts.is_reserved("toJSON"));
        assert!(!opts.is_reserved("name"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let opts = ConvertOptions::from_yaml_str("association_conflict: reject\n").unwrap();
        assert_eq!(opts.association_conflict, AssociationConflict::Reject);
        assert!(opts.wrap_output);
        assert_eq!(opts.reserved_keys, ["toJSON"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ConvertOptions::from_yaml_str("wrap: false\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn loads_json_and_yaml_files() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("opts.json");
        std::fs::File::create(&json_path)
            .unwrap()
            .write_all(br#"{"wrap_output": false, "reserved_keys": ["toJSON", "inspect"]}"#)
            .unwrap();
        let opts = ConvertOptions::from_path(&json_path).unwrap();
        assert!(!opts.wrap_output);
        assert!(opts.is_reserved("inspect"));

        let yaml_path = dir.path().join("opts.yaml");
        std::fs::write(&yaml_path, "wrap_output: false\n").unwrap();
        assert!(!ConvertOptions::from_path(&yaml_path).unwrap().wrap_output);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConvertOptions::from_path(Path::new("/nonexistent/opts.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/opts.yaml"));
    }

    #[test]
    fn builders_override() {
        let opts = ConvertOptions::default()
            .with_wrap_output(false)
            .with_association_conflict(AssociationConflict::Reject);
        assert!(!opts.wrap_output);
        assert_eq!(opts.association_conflict, AssociationConflict::Reject);
    }
}
