//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Conversion errors are field-scoped: every variant of [`ConvertError`]
//!   carries the name of the blueprint field that failed.
//! - Unrecognised types are NOT errors. They degrade to a permissive rule
//!   plus a diagnostic, so they never appear here.
//! - Blueprint loading errors are separate from conversion errors because
//!   they happen before any field is looked at.

use thiserror::Error;

/// A per-field failure while translating a blueprint.
///
/// Translation stops at the first failing field; there is no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The descriptor is not a string or a mapping (e.g. `null`).
    #[error("invalid blueprint: field '{field}' has a malformed descriptor: {reason}")]
    MalformedDescriptor {
        /// Offending field.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A structured, non-association descriptor without a `type`.
    #[error("invalid blueprint: field '{field}' has no 'type' and is not an association")]
    MissingType {
        /// Offending field.
        field: String,
    },

    /// A constraint flag carries a value of the wrong shape.
    #[error("invalid blueprint: field '{field}' has an invalid '{constraint}': {reason}")]
    InvalidConstraint {
        /// Offending field.
        field: String,
        /// The descriptor key.
        constraint: String,
        /// Expected vs actual.
        reason: String,
    },

    /// A bound was given for a type that has no notion of size.
    #[error("invalid blueprint: field '{field}' sets '{constraint}' but {kind} values have no bounds")]
    UnsupportedConstraint {
        /// Offending field.
        field: String,
        /// The descriptor key.
        constraint: String,
        /// Canonical type of the field.
        kind: String,
    },

    /// An `is`/`regex` pattern that does not compile.
    #[error("invalid blueprint: field '{field}' has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Offending field.
        field: String,
        /// The pattern source.
        pattern: String,
        /// Compiler message.
        reason: String,
    },

    /// Both `model` and `collection` were set and the policy rejects that.
    #[error("invalid blueprint: field '{field}' sets both 'model' and 'collection'")]
    ConflictingAssociation {
        /// Offending field.
        field: String,
    },
}

impl ConvertError {
    /// The blueprint field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ConvertError::MalformedDescriptor { field, .. }
            | ConvertError::MissingType { field }
            | ConvertError::InvalidConstraint { field, .. }
            | ConvertError::UnsupportedConstraint { field, .. }
            | ConvertError::InvalidPattern { field, .. }
            | ConvertError::ConflictingAssociation { field } => field,
        }
    }

    /// Shorthand for [`ConvertError::MalformedDescriptor`].
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        ConvertError::MalformedDescriptor {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure to load a blueprint document.
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// The top-level document is not a mapping.
    #[error("blueprint must be a mapping of field names to descriptors, found {found}")]
    NotAMapping {
        /// JSON kind that was found instead.
        found: String,
    },

    /// A YAML mapping key that cannot be a field name.
    #[error("unsupported blueprint key: {key}")]
    UnsupportedKey {
        /// Debug rendering of the key.
        key: String,
    },

    /// JSON parse failure.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse failure.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
