//! # Canonical Types — Type Classifier
//!
//! Resolves a descriptor to the canonical type tag that drives rule
//! composition. Aliases are matched exactly (case-sensitive); any tag not in
//! [`TYPE_ALIASES`] classifies as [`CanonicalType::Unknown`] and is handled
//! by the unknown-type fallback rather than by an error.

use std::fmt;

use crate::descriptor::{json_kind, Descriptor};
use crate::error::ConvertError;

/// Canonical type of a scalar (non-association) descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalType {
    /// Free-form object.
    Object,
    /// Text. `is_email` is set by the `email` tag or the `email` flag.
    String {
        /// Whether email format validation applies.
        is_email: bool,
    },
    /// Any numeric alias.
    Number,
    /// Date, time or datetime.
    Date,
    /// Array of anything.
    Array,
    /// JSON blob; same base as `Object`.
    Json,
    /// Binary buffer.
    Binary,
    /// Boolean.
    Boolean,
    /// Unrecognised raw type, carried verbatim for diagnostics.
    Unknown(String),
}

/// Raw type tag -> canonical name.
pub const TYPE_ALIASES: &[(&str, &str)] = &[
    ("object", "object"),
    ("string", "string"),
    ("text", "string"),
    ("email", "string"),
    ("integer", "number"),
    ("int", "number"),
    ("float", "number"),
    ("bigint", "number"),
    ("serial", "number"),
    ("date", "date"),
    ("time", "date"),
    ("datetime", "date"),
    ("array", "array"),
    ("json", "json"),
    ("binary", "binary"),
    ("boolean", "boolean"),
];

impl CanonicalType {
    /// Resolve a raw tag through the alias table.
    ///
    /// `email_flag` reports whether the descriptor also carries a truthy
    /// `email` flag; it only matters for string types.
    pub fn from_raw(raw: &str, email_flag: bool) -> Self {
        let canonical = TYPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == raw)
            .map(|(_, name)| *name);

        match canonical {
            Some("object") => CanonicalType::Object,
            Some("string") => CanonicalType::String {
                is_email: raw == "email" || email_flag,
            },
            Some("number") => CanonicalType::Number,
            Some("date") => CanonicalType::Date,
            Some("array") => CanonicalType::Array,
            Some("json") => CanonicalType::Json,
            Some("binary") => CanonicalType::Binary,
            Some("boolean") => CanonicalType::Boolean,
            _ => CanonicalType::Unknown(raw.to_string()),
        }
    }

    /// Canonical tag name.
    pub fn name(&self) -> &str {
        match self {
            CanonicalType::Object => "object",
            CanonicalType::String { .. } => "string",
            CanonicalType::Number => "number",
            CanonicalType::Date => "date",
            CanonicalType::Array => "array",
            CanonicalType::Json => "json",
            CanonicalType::Binary => "binary",
            CanonicalType::Boolean => "boolean",
            CanonicalType::Unknown(_) => "unknown",
        }
    }

    /// Whether this is the fallback classification.
    pub fn is_unknown(&self) -> bool {
        matches!(self, CanonicalType::Unknown(_))
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalType::Unknown(raw) => write!(f, "unknown ({raw})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Classify a scalar descriptor.
///
/// Callers route association descriptors elsewhere first; a structured
/// descriptor reaching this point must carry a string `type`.
///
/// # Errors
///
/// - `MissingType` if a structured descriptor has no `type`.
/// - `MalformedDescriptor` if `type` is not a string.
pub fn classify(field: &str, descriptor: &Descriptor<'_>) -> Result<CanonicalType, ConvertError> {
    let raw = match descriptor {
        Descriptor::Shorthand(raw) => *raw,
        Descriptor::Structured(_) => match descriptor.raw_type() {
            Some(serde_json::Value::String(raw)) => raw.as_str(),
            Some(other) => {
                return Err(ConvertError::malformed(
                    field,
                    format!("'type' must be a string, found {}", json_kind(other)),
                ))
            }
            None => {
                return Err(ConvertError::MissingType {
                    field: field.to_string(),
                })
            }
        },
    };

    Ok(CanonicalType::from_raw(raw, descriptor.is_set("email")))
}
