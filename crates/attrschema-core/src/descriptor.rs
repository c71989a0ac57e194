//! # Descriptors — Borrowed Views over Field Definitions
//!
//! A descriptor is either a bare type string (`"integer"`) or a mapping of
//! a `type` / `model` / `collection` discriminator plus constraint flags.
//! Flag semantics follow the blueprint dialect: most flags are read for
//! truthiness, a few (`url`, `urlish`, `min`, `max`, `defaultsTo`, ...) for
//! presence only.

use serde_json::{Map, Value};

use crate::error::ConvertError;

/// A borrowed view of one field's descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Descriptor<'a> {
    /// Bare type string, e.g. `age: "integer"`.
    Shorthand(&'a str),
    /// Mapping with a discriminator and constraint flags.
    Structured(&'a Map<String, Value>),
}

impl<'a> Descriptor<'a> {
    /// Interpret the raw blueprint value for `field`.
    ///
    /// # Errors
    ///
    /// `MalformedDescriptor` for `null` and for anything that is neither a
    /// string nor a mapping.
    pub fn parse(field: &str, value: &'a Value) -> Result<Self, ConvertError> {
        match value {
            Value::String(s) => Ok(Descriptor::Shorthand(s)),
            Value::Object(map) => Ok(Descriptor::Structured(map)),
            Value::Null => Err(ConvertError::malformed(field, "descriptor is null")),
            other => Err(ConvertError::malformed(
                field,
                format!(
                    "expected a type string or a mapping, found {}",
                    json_kind(other)
                ),
            )),
        }
    }

    /// Look up a flag. Always `None` for shorthand descriptors.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self {
            Descriptor::Shorthand(_) => None,
            Descriptor::Structured(map) => map.get(key),
        }
    }

    /// Whether the key is present, whatever its value.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether the key is present and truthy.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// The first of `keys` that is present.
    pub fn first_present(&self, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
        keys.iter().find_map(|k| self.get(k).map(|v| (*k, v)))
    }

    /// The unresolved `type` value of a structured descriptor.
    pub fn raw_type(&self) -> Option<&'a Value> {
        match self {
            Descriptor::Shorthand(_) => None,
            Descriptor::Structured(map) => map.get("type"),
        }
    }

    /// The shorthand string, if this is a shorthand descriptor.
    pub fn shorthand(&self) -> Option<&'a str> {
        match self {
            Descriptor::Shorthand(s) => Some(s),
            Descriptor::Structured(_) => None,
        }
    }
}

/// Blueprint truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Human-readable JSON kind for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
