//! # Metadata Annotator
//!
//! Copies descriptive annotations from a descriptor's `metadata` mapping onto
//! the composed rule. Annotations never change what a rule accepts.
//!
//! Recognised keys, matched case-insensitively:
//!
//! - `label` -> [`Rule::label`]
//! - `notes`, else `description` (first non-empty string) -> [`Rule::description`]
//! - `example` -> [`Rule::example`]
//!
//! Anything else in the mapping is ignored.

use attrschema_core::{json_kind, ConvertError, Descriptor};
use serde_json::{Map, Value};

use crate::rule::Rule;

/// Descriptor key holding the annotations.
pub const METADATA_KEY: &str = "metadata";

const DESCRIPTION_KEYS: [&str; 2] = ["notes", "description"];

/// Attach annotations from `descriptor`'s metadata, if any.
///
/// # Errors
///
/// `InvalidConstraint` when `metadata` is set but is not a mapping, or when
/// `label` is not a string.
pub fn annotate(field: &str, descriptor: &Descriptor<'_>, rule: Rule) -> Result<Rule, ConvertError> {
    let meta = match descriptor.get(METADATA_KEY) {
        None | Some(Value::Null) => return Ok(rule),
        Some(Value::Object(meta)) => meta,
        Some(other) => {
            return Err(ConvertError::InvalidConstraint {
                field: field.to_string(),
                constraint: METADATA_KEY.to_string(),
                reason: format!("expected a mapping, found {}", json_kind(other)),
            })
        }
    };

    let mut rule = rule;
    match lookup(meta, "label") {
        None | Some(Value::Null) => {}
        Some(Value::String(label)) => rule = rule.label(label.as_str()),
        Some(other) => {
            return Err(ConvertError::InvalidConstraint {
                field: field.to_string(),
                constraint: "metadata.label".to_string(),
                reason: format!("expected a string, found {}", json_kind(other)),
            })
        }
    }
    let description = DESCRIPTION_KEYS.iter().find_map(|key| match lookup(meta, key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    });
    if let Some(text) = description {
        rule = rule.description(text);
    }
    if let Some(example) = lookup(meta, "example") {
        rule = rule.example(example.clone());
    }
    Ok(rule)
}

/// Exact match first, then the first case-insensitive match.
fn lookup<'m>(meta: &'m Map<String, Value>, key: &str) -> Option<&'m Value> {
    meta.get(key).or_else(|| {
        meta.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn annotated(value: Value) -> Result<Rule, ConvertError> {
        let d = Descriptor::parse("f", &value)?;
        annotate("f", &d, Rule::string())
    }

    #[test]
    fn no_metadata_is_a_no_op() {
        assert_eq!(annotated(json!("string")).unwrap(), Rule::string());
        assert_eq!(
            annotated(json!({"type": "string", "metadata": null})).unwrap(),
            Rule::string()
        );
    }

    #[test]
    fn recognised_keys_are_attached() {
        let rule = annotated(json!({
            "type": "string",
            "metadata": {"label": "Name", "notes": "Full name", "example": "Ada", "color": "red"}
        }))
        .unwrap();
        assert_eq!(rule.label_text(), Some("Name"));
        assert_eq!(rule.description_text(), Some("Full name"));
        assert_eq!(rule.examples(), &[json!("Ada")]);
    }

    #[test]
    fn notes_beat_description_unless_empty() {
        let rule = annotated(json!({
            "type": "string",
            "metadata": {"description": "from description", "notes": "from notes"}
        }))
        .unwrap();
        assert_eq!(rule.description_text(), Some("from notes"));

        let rule = annotated(json!({
            "type": "string",
            "metadata": {"notes": "", "description": "from description"}
        }))
        .unwrap();
        assert_eq!(rule.description_text(), Some("from description"));
    }

    #[test]
    fn keys_match_case_insensitively() {
        let rule = annotated(json!({
            "type": "string",
            "metadata": {"Label": "Name", "NOTES": "n", "Example": 3}
        }))
        .unwrap();
        assert_eq!(rule.label_text(), Some("Name"));
        assert_eq!(rule.description_text(), Some("n"));
        assert_eq!(rule.examples(), &[json!(3)]);
    }

    #[test]
    fn annotations_leave_constraints_alone() {
        let value = json!({"type": "string", "metadata": {"label": "L"}});
        let d = Descriptor::parse("f", &value).unwrap();
        let rule = annotate("f", &d, Rule::string().max(3).required()).unwrap();
        assert_eq!(rule.max_bound(), Some(&json!(3)));
        assert!(rule.is_required());
    }

    #[test]
    fn non_mapping_metadata_is_rejected() {
        let err = annotated(json!({"type": "string", "metadata": "label"})).unwrap_err();
        assert_eq!(err.field(), "f");
        assert!(matches!(err, ConvertError::InvalidConstraint { ref constraint, .. } if constraint == "metadata"));
    }

    #[test]
    fn non_string_label_is_rejected() {
        let err = annotated(json!({"type": "string", "metadata": {"label": 5}})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConstraint { .. }));
    }
}
