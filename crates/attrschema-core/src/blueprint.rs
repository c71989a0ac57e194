//! # Blueprints — Ordered Attribute Definitions
//!
//! A blueprint maps field names to descriptors, in the order the author
//! wrote them. It may also contain entries that are not data at all:
//! instance methods (callables) and the reserved `toJSON` hook. Those stay
//! in the blueprint so iteration mirrors the source document, and the
//! converter skips them.
//!
//! ## Loading
//!
//! - JSON documents keep key order (`serde_json` is built with
//!   `preserve_order`).
//! - YAML documents may mark methods with a `!function` (or `!fn`) tag.
//!   Any other tag is dropped and the tagged value used as-is.

use std::path::Path;

use serde_json::{Map, Value};

use crate::descriptor::json_kind;
use crate::error::BlueprintError;

/// Keys skipped by default even when they carry a value.
pub const DEFAULT_RESERVED_KEYS: &[&str] = &["toJSON"];

/// YAML tags that mark a blueprint entry as a method.
const CALLABLE_TAGS: &[&str] = &["function", "fn"];

/// One blueprint entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A data attribute with its raw, not yet validated descriptor.
    Attribute(Value),
    /// A method defined alongside the attributes.
    Callable,
}

/// An ordered field-name -> descriptor mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blueprint {
    entries: Vec<(String, Entry)>,
}

impl Blueprint {
    /// Create an empty blueprint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append (or replace in place) a data attribute.
    pub fn attribute(mut self, name: impl Into<String>, descriptor: Value) -> Self {
        self.insert(name.into(), Entry::Attribute(descriptor));
        self
    }

    /// Append (or replace in place) a method entry.
    pub fn callable(mut self, name: impl Into<String>) -> Self {
        self.insert(name.into(), Entry::Callable);
        self
    }

    fn insert(&mut self, name: String, entry: Entry) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((name, entry)),
        }
    }

    /// Build from a JSON mapping.
    ///
    /// # Errors
    ///
    /// `NotAMapping` if `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, BlueprintError> {
        let map = value.as_object().ok_or_else(|| BlueprintError::NotAMapping {
            found: json_kind(value).to_string(),
        })?;
        Ok(Self::from_map(map))
    }

    /// Build from a full model document: its `attributes` mapping when
    /// present, otherwise the document itself.
    pub fn from_model_value(value: &Value) -> Result<Self, BlueprintError> {
        match value.get("attributes") {
            Some(attributes @ Value::Object(_)) => Self::from_value(attributes),
            _ => Self::from_value(value),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .map(|(k, v)| (k.clone(), Entry::Attribute(v.clone())))
            .collect();
        Self { entries }
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, BlueprintError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Parse a YAML document, honouring `!function` tags on top-level values.
    pub fn from_yaml_str(text: &str) -> Result<Self, BlueprintError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
        Self::from_yaml_value(&yaml)
    }

    fn from_yaml_value(yaml: &serde_yaml::Value) -> Result<Self, BlueprintError> {
        let mapping = match yaml {
            serde_yaml::Value::Mapping(m) => m,
            serde_yaml::Value::Tagged(tagged) => return Self::from_yaml_value(&tagged.value),
            other => {
                return Err(BlueprintError::NotAMapping {
                    found: json_kind(&yaml_to_json_value(other)?).to_string(),
                })
            }
        };

        let mut blueprint = Self::new();
        for (key, value) in mapping {
            let name = yaml_key(key)?;
            let entry = match value {
                serde_yaml::Value::Tagged(tagged) if is_callable_tag(&tagged.tag) => {
                    Entry::Callable
                }
                other => Entry::Attribute(yaml_to_json_value(other)?),
            };
            blueprint.insert(name, entry);
        }
        Ok(blueprint)
    }

    /// Like [`from_yaml_str`](Self::from_yaml_str) but unwraps a model
    /// document's `attributes` mapping.
    pub fn from_model_yaml_str(text: &str) -> Result<Self, BlueprintError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
        match yaml.get("attributes") {
            Some(attributes @ serde_yaml::Value::Mapping(_)) => Self::from_yaml_value(attributes),
            _ => Self::from_yaml_value(&yaml),
        }
    }

    /// Load from a file, choosing YAML for `.yaml`/`.yml` and JSON otherwise.
    pub fn from_path(path: &Path, model: bool) -> Result<Self, BlueprintError> {
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match (ext, model) {
            ("yaml" | "yml", true) => Self::from_model_yaml_str(&content),
            ("yaml" | "yml", false) => Self::from_yaml_str(&content),
            (_, true) => Self::from_model_value(&serde_json::from_str::<Value>(&content)?),
            (_, false) => Self::from_json_str(&content),
        }
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, e)| e)
    }

    /// Number of entries, callables included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the blueprint has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_callable_tag(tag: &serde_yaml::value::Tag) -> bool {
    let tag = tag.to_string();
    let name = tag.trim_start_matches('!');
    CALLABLE_TAGS.contains(&name)
}

fn yaml_key(key: &serde_yaml::Value) -> Result<String, BlueprintError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(BlueprintError::UnsupportedKey {
            key: format!("{other:?}"),
        }),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Blueprints use only the JSON-compatible subset of YAML. Tags below the
/// top level are ignored.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, BlueprintError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else {
                // NaN and infinities have no JSON form; they degrade to null.
                Ok(n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = Map::new();
            for (k, v) in map {
                json_map.insert(yaml_key(k)?, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
