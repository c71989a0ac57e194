//! # Rule Composer
//!
//! Builds the rule for one scalar field. The steps run in a fixed order and
//! later steps may overwrite what earlier ones set:
//!
//! 1. Base rule for the canonical type.
//! 2. Type-specific modifiers (string formats and sizes, date bounds and
//!    defaults).
//! 3. Unknown-type escape: an unrecognised type skips steps 2-7 and yields
//!    an any-rule plus a diagnostic.
//! 4. Generic bounds (`min`/`minLength`, `max`/`maxLength`). These replace
//!    any bound from step 2, so `{hexColor: true, max: 10}` ends with a
//!    maximum of 10.
//! 5. Generic enumeration (`in`, `notIn`), additive with step 2's `enum`.
//! 6. Presence: required, or optional with `null` and `""` accepted.
//! 7. `defaultsTo`: sets the default and forces the field optional even if
//!    step 6 made it required.
//! 8. Metadata annotations (see [`crate::metadata`]).

use attrschema_core::{classify, is_truthy, json_kind, CanonicalType, ConvertError, Descriptor};
use fancy_regex::Regex;
use serde_json::Value;

use crate::diagnostics::Diagnostic;
use crate::metadata;
use crate::rule::{DefaultValue, Rule};

/// Literal `default` value that selects the clock producer on date fields.
pub const NOW_SENTINEL: &str = "NOW";

/// Hex colour shorthand length range (`fff` .. `ffffff`).
const HEX_COLOR_BOUNDS: (u64, u64) = (3, 6);

/// Composed rule for one scalar field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    /// The composed rule.
    pub rule: Rule,
    /// Classification the rule was built from.
    pub canonical: CanonicalType,
    /// Set when the unknown-type fallback fired.
    pub diagnostic: Option<Diagnostic>,
}

/// Compose the rule for a scalar (non-association) descriptor.
///
/// # Errors
///
/// Field-scoped [`ConvertError`]s for descriptors whose flags carry values
/// of the wrong shape. Unknown types are not errors.
pub fn compose(field: &str, descriptor: &Descriptor<'_>) -> Result<FieldOutcome, ConvertError> {
    let canonical = classify(field, descriptor)?;

    let fallback = match &canonical {
        CanonicalType::Unknown(raw) => Some(unknown_type_fallback(field, raw)),
        _ => None,
    };
    let (rule, diagnostic) = match fallback {
        // Malformed metadata must not turn the fallback into an error.
        Some((rule, diagnostic)) => match metadata::annotate(field, descriptor, rule) {
            Ok(rule) => (rule, Some(diagnostic)),
            Err(e) => {
                tracing::debug!(field, error = %e, "ignoring metadata on unknown type");
                (Rule::any(), Some(diagnostic))
            }
        },
        None => {
            let rule = base_rule(&canonical);
            let rule = apply_type_modifiers(field, descriptor, &canonical, rule)?;
            let rule = apply_bounds(field, descriptor, &canonical, rule)?;
            let rule = apply_enumeration(field, descriptor, rule)?;
            let rule = apply_presence(descriptor, rule);
            let rule = apply_default_override(descriptor, rule);
            (metadata::annotate(field, descriptor, rule)?, None)
        }
    };

    tracing::debug!(field, canonical = %canonical, "composed field rule");
    Ok(FieldOutcome {
        rule,
        canonical,
        diagnostic,
    })
}

/// Permissive rule for an unrecognised type, with the diagnostic to report.
pub fn unknown_type_fallback(field: &str, raw_type: &str) -> (Rule, Diagnostic) {
    (Rule::any(), Diagnostic::unknown_type(field, raw_type))
}

/// Step 1.
pub fn base_rule(canonical: &CanonicalType) -> Rule {
    match canonical {
        CanonicalType::Object | CanonicalType::Json => Rule::object(),
        CanonicalType::String { .. } => Rule::string(),
        CanonicalType::Number => Rule::number(),
        CanonicalType::Date => Rule::date(),
        CanonicalType::Array => Rule::array(),
        CanonicalType::Binary => Rule::binary(),
        CanonicalType::Boolean => Rule::boolean(),
        CanonicalType::Unknown(_) => Rule::any(),
    }
}

/// Step 2.
fn apply_type_modifiers(
    field: &str,
    descriptor: &Descriptor<'_>,
    canonical: &CanonicalType,
    rule: Rule,
) -> Result<Rule, ConvertError> {
    match canonical {
        CanonicalType::String { is_email } => string_modifiers(field, descriptor, *is_email, rule),
        CanonicalType::Date => date_modifiers(field, descriptor, rule),
        _ => Ok(rule),
    }
}

fn string_modifiers(
    field: &str,
    d: &Descriptor<'_>,
    is_email: bool,
    mut rule: Rule,
) -> Result<Rule, ConvertError> {
    if let Some(values) = d.get("enum") {
        rule = rule.valid(enum_values(values));
    }
    if let Some(size) = d.get("size") {
        rule = rule.max(length_bound(field, "size", size)?);
    }
    if d.is_set("alphanumeric") {
        rule = rule.alphanum();
    }
    if is_email {
        rule = rule.email();
    }
    if d.is_set("creditcard") {
        rule = rule.credit_card();
    }
    if d.is_set("lowercase") {
        rule = rule.lowercase();
    }
    if d.is_set("uppercase") {
        rule = rule.uppercase();
    }
    let pattern = ["is", "regex"]
        .into_iter()
        .find_map(|key| d.get(key).filter(|v| is_truthy(v)).map(|v| (key, v)));
    if let Some((key, source)) = pattern {
        let (body, flags) = compile_pattern(field, key, source)?;
        rule = rule.pattern_with_flags(body, flags);
    }
    // Presence alone selects URI validation, even `url: false`.
    if d.has("url") || d.has("urlish") {
        rule = rule.uri();
    }
    if d.is_set("hexadecimal") {
        rule = rule.hex();
    }
    if d.is_set("hexColor") {
        rule = rule.min(HEX_COLOR_BOUNDS.0).max(HEX_COLOR_BOUNDS.1).hex();
    }
    Ok(rule)
}

fn date_modifiers(field: &str, d: &Descriptor<'_>, mut rule: Rule) -> Result<Rule, ConvertError> {
    if let Some(before) = d.get("before") {
        rule = rule.max(date_bound(field, "before", before)?);
    }
    if let Some(after) = d.get("after") {
        rule = rule.min(date_bound(field, "after", after)?);
    }
    if let Some(default) = d.get("default") {
        let default = match default {
            Value::String(s) if s == NOW_SENTINEL => DefaultValue::Now,
            other => DefaultValue::Literal(other.clone()),
        };
        rule = rule.with_default(default);
    }
    Ok(rule)
}

/// Step 4.
fn apply_bounds(
    field: &str,
    d: &Descriptor<'_>,
    canonical: &CanonicalType,
    mut rule: Rule,
) -> Result<Rule, ConvertError> {
    if let Some((key, value)) = d.first_present(&["min", "minLength"]) {
        let bound = bound_value(field, key, value, canonical, &rule)?;
        rule = rule.min(bound);
    }
    if let Some((key, value)) = d.first_present(&["max", "maxLength"]) {
        let bound = bound_value(field, key, value, canonical, &rule)?;
        rule = rule.max(bound);
    }
    Ok(rule)
}

fn bound_value(
    field: &str,
    key: &str,
    value: &Value,
    canonical: &CanonicalType,
    rule: &Rule,
) -> Result<Value, ConvertError> {
    if !rule.kind().supports_bounds() {
        return Err(ConvertError::UnsupportedConstraint {
            field: field.to_string(),
            constraint: key.to_string(),
            kind: canonical.name().to_string(),
        });
    }
    match canonical {
        CanonicalType::Date => date_bound(field, key, value),
        CanonicalType::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            other => Err(invalid(field, key, format!("expected a number, found {}", json_kind(other)))),
        },
        _ => length_bound(field, key, value).map(Value::from),
    }
}

/// Step 5.
fn apply_enumeration(field: &str, d: &Descriptor<'_>, mut rule: Rule) -> Result<Rule, ConvertError> {
    let allowed = literal_list(field, "in", d.get("in"))?;
    if !allowed.is_empty() {
        rule = rule.valid(allowed);
    }
    let disallowed = literal_list(field, "notIn", d.get("notIn"))?;
    if !disallowed.is_empty() {
        rule = rule.invalid(disallowed);
    }
    Ok(rule)
}

/// Step 6. Shared with associations.
pub(crate) fn apply_presence(d: &Descriptor<'_>, rule: Rule) -> Rule {
    if d.is_set("required") {
        rule.required()
    } else {
        rule.optional().allow([Value::Null, Value::String(String::new())])
    }
}

/// Step 7.
fn apply_default_override(d: &Descriptor<'_>, rule: Rule) -> Rule {
    match d.get("defaultsTo") {
        Some(value) => rule
            .with_default(DefaultValue::Literal(value.clone()))
            .optional(),
        None => rule,
    }
}

fn enum_values(values: &Value) -> Vec<Value> {
    match values {
        Value::Array(items) => items.clone(),
        single => vec![single.clone()],
    }
}

fn literal_list(field: &str, key: &str, value: Option<&Value>) -> Result<Vec<Value>, ConvertError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(invalid(
            field,
            key,
            format!("expected a list of values, found {}", json_kind(other)),
        )),
    }
}

fn length_bound(field: &str, key: &str, value: &Value) -> Result<u64, ConvertError> {
    value.as_u64().ok_or_else(|| {
        invalid(
            field,
            key,
            format!("expected a non-negative integer, found {value}"),
        )
    })
}

fn date_bound(field: &str, key: &str, value: &Value) -> Result<Value, ConvertError> {
    match value {
        Value::String(_) | Value::Number(_) => Ok(value.clone()),
        other => Err(invalid(
            field,
            key,
            format!("expected a date string or timestamp, found {}", json_kind(other)),
        )),
    }
}

/// Split `source` into body and flags and check that the body compiles.
fn compile_pattern(field: &str, key: &str, source: &Value) -> Result<(String, String), ConvertError> {
    let Value::String(source) = source else {
        return Err(invalid(
            field,
            key,
            format!("expected a pattern string, found {}", json_kind(source)),
        ));
    };
    let (body, flags) = split_literal(source);
    let checked = if flags.is_empty() {
        body.to_string()
    } else {
        format!("(?{flags}){body}")
    };
    Regex::new(&checked).map_err(|e| ConvertError::InvalidPattern {
        field: field.to_string(),
        pattern: source.clone(),
        reason: e.to_string(),
    })?;
    Ok((body.to_string(), flags))
}

/// ECMAScript regex flags.
const LITERAL_FLAGS: &str = "dgimsuyv";

/// `/[a-z]+/i` -> (`[a-z]+`, `i`). Only a well-formed literal is split: a
/// non-empty body with no unescaped `/` outside a class, followed by
/// distinct ECMAScript flags. Of those only `i`, `m` and `s` are kept.
/// Anything else is a plain pattern and comes back whole.
fn split_literal(source: &str) -> (&str, String) {
    let plain = (source, String::new());
    let Some(rest) = source.strip_prefix('/') else {
        return plain;
    };
    let Some(end) = rest.rfind('/') else {
        return plain;
    };
    let (body, flags) = (&rest[..end], &rest[end + 1..]);

    let mut seen = String::new();
    for c in flags.chars() {
        if !LITERAL_FLAGS.contains(c) || seen.contains(c) {
            return plain;
        }
        seen.push(c);
    }
    if body.is_empty() || has_bare_slash(body) {
        return plain;
    }
    let kept = seen.chars().filter(|c| matches!(c, 'i' | 'm' | 's')).collect();
    (body, kept)
}

/// Whether `body` has a `/` that would end an ECMAScript regex literal.
fn has_bare_slash(body: &str) -> bool {
    let mut escaped = false;
    let mut in_class = false;
    for c in body.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => return true,
            _ => {}
        }
    }
    false
}

fn invalid(field: &str, key: &str, reason: String) -> ConvertError {
    ConvertError::InvalidConstraint {
        field: field.to_string(),
        constraint: key.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Presence, RuleKind, StringTest};
    use serde_json::json;

    fn compose_value(value: Value) -> Result<FieldOutcome, ConvertError> {
        let d = Descriptor::parse("f", &value)?;
        compose("f", &d)
    }

    fn rule_of(value: Value) -> Rule {
        compose_value(value).unwrap().rule
    }

    #[test]
    fn shorthand_base_kinds() {
        let cases = [
            ("object", "object"),
            ("json", "object"),
            ("string", "string"),
            ("text", "string"),
            ("email", "string"),
            ("integer", "number"),
            ("float", "number"),
            ("date", "date"),
            ("datetime", "date"),
            ("array", "array"),
            ("binary", "binary"),
            ("boolean", "boolean"),
        ];
        for (raw, kind) in cases {
            assert_eq!(rule_of(json!(raw)).kind().name(), kind, "type {raw}");
        }
    }

    #[test]
    fn shorthand_is_optional_and_nullable() {
        let rule = rule_of(json!("string"));
        assert_eq!(rule.presence(), Presence::Optional);
        assert_eq!(rule.allowed_values(), &[Value::Null, json!("")]);
    }

    #[test]
    fn email_tag_and_flag_add_email_test() {
        assert!(rule_of(json!("email")).has_test(&StringTest::Email));
        assert!(rule_of(json!({"type": "string", "email": true})).has_test(&StringTest::Email));
        assert!(!rule_of(json!("string")).has_test(&StringTest::Email));
    }

    #[test]
    fn string_modifiers_apply_in_order() {
        let rule = rule_of(json!({
            "type": "string",
            "enum": ["a", "b"],
            "size": 8,
            "alphanumeric": true,
            "creditcard": true,
            "lowercase": true,
            "uppercase": true,
            "regex": "^[a-z]+$",
            "urlish": true,
            "hexadecimal": true
        }));
        assert_eq!(rule.valid_values(), &[json!("a"), json!("b")]);
        assert_eq!(rule.max_bound(), Some(&json!(8)));
        assert_eq!(
            rule.tests(),
            &[
                StringTest::Alphanum,
                StringTest::CreditCard,
                StringTest::Lowercase,
                StringTest::Uppercase,
                StringTest::Pattern {
                    source: "^[a-z]+$".into(),
                    flags: String::new()
                },
                StringTest::Uri,
                StringTest::Hex,
            ]
        );
    }

    #[test]
    fn is_takes_precedence_over_regex() {
        let rule = rule_of(json!({"type": "string", "is": "^a", "regex": "^b"}));
        assert_eq!(
            rule.tests(),
            &[StringTest::Pattern {
                source: "^a".into(),
                flags: String::new()
            }]
        );
    }

    #[test]
    fn url_presence_alone_triggers_uri() {
        let rule = rule_of(json!({"type": "string", "url": false}));
        assert!(rule.has_test(&StringTest::Uri));
    }

    #[test]
    fn hex_color_sets_bounds_and_hex() {
        let rule = rule_of(json!({"type": "string", "hexColor": true}));
        assert_eq!(rule.min_bound(), Some(&json!(3)));
        assert_eq!(rule.max_bound(), Some(&json!(6)));
        assert!(rule.has_test(&StringTest::Hex));
    }

    #[test]
    fn explicit_max_overrides_hex_color() {
        let rule = rule_of(json!({"type": "string", "hexColor": true, "max": 10}));
        assert_eq!(rule.max_bound(), Some(&json!(10)));
        assert_eq!(rule.min_bound(), Some(&json!(3)));
    }

    #[test]
    fn explicit_min_length_overrides_hex_color() {
        let rule = rule_of(json!({"type": "string", "hexColor": true, "minLength": 1}));
        assert_eq!(rule.min_bound(), Some(&json!(1)));
    }

    #[test]
    fn max_and_max_length_set_the_maximum_not_the_minimum() {
        let rule = rule_of(json!({"type": "string", "max": 1}));
        assert_eq!(rule.max_bound(), Some(&json!(1)));
        assert_eq!(rule.min_bound(), None);

        let rule = rule_of(json!({"type": "string", "maxLength": 2}));
        assert_eq!(rule.max_bound(), Some(&json!(2)));
        assert_eq!(rule.min_bound(), None);
    }

    #[test]
    fn min_wins_over_min_length() {
        let rule = rule_of(json!({"type": "string", "min": 4, "minLength": 2}));
        assert_eq!(rule.min_bound(), Some(&json!(4)));
    }

    #[test]
    fn zero_bounds_count_as_present() {
        let rule = rule_of(json!({"type": "integer", "min": 0}));
        assert_eq!(rule.min_bound(), Some(&json!(0)));
    }

    #[test]
    fn number_bounds_accept_negative_and_fractional() {
        let rule = rule_of(json!({"type": "float", "min": -1.5, "max": 2.25}));
        assert_eq!(rule.min_bound(), Some(&json!(-1.5)));
        assert_eq!(rule.max_bound(), Some(&json!(2.25)));
    }

    #[test]
    fn size_overridden_by_max() {
        let rule = rule_of(json!({"type": "string", "size": 5, "maxLength": 9}));
        assert_eq!(rule.max_bound(), Some(&json!(9)));
    }

    #[test]
    fn date_modifiers() {
        let rule = rule_of(json!({
            "type": "date",
            "before": "2970-01-01T00:00:00Z",
            "after": "1970-01-01T00:00:00Z",
            "default": "NOW"
        }));
        assert_eq!(rule.max_bound(), Some(&json!("2970-01-01T00:00:00Z")));
        assert_eq!(rule.min_bound(), Some(&json!("1970-01-01T00:00:00Z")));
        assert_eq!(rule.default_value(), Some(&DefaultValue::Now));
    }

    #[test]
    fn date_literal_default() {
        let rule = rule_of(json!({"type": "datetime", "default": "2000-01-01T00:00:00Z"}));
        assert_eq!(
            rule.default_value(),
            Some(&DefaultValue::Literal(json!("2000-01-01T00:00:00Z")))
        );
    }

    #[test]
    fn default_key_is_ignored_on_non_dates() {
        let rule = rule_of(json!({"type": "string", "default": "x"}));
        assert_eq!(rule.default_value(), None);
    }

    #[test]
    fn generic_enumeration_is_additive() {
        let rule = rule_of(json!({
            "type": "string",
            "enum": ["a"],
            "in": ["b"],
            "notIn": ["c", "d"]
        }));
        assert_eq!(rule.valid_values(), &[json!("a"), json!("b")]);
        assert_eq!(rule.invalid_values(), &[json!("c"), json!("d")]);
    }

    #[test]
    fn empty_in_lists_are_ignored() {
        let rule = rule_of(json!({"type": "integer", "in": [], "notIn": []}));
        assert!(rule.valid_values().is_empty());
        assert!(rule.invalid_values().is_empty());
    }

    #[test]
    fn non_list_in_is_an_error() {
        let err = compose_value(json!({"type": "string", "in": "abc"})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConstraint { ref constraint, .. } if constraint == "in"));
    }

    #[test]
    fn required_is_required() {
        let rule = rule_of(json!({"type": "integer", "required": true}));
        assert_eq!(rule.presence(), Presence::Required);
        assert!(rule.allowed_values().is_empty());
    }

    #[test]
    fn defaults_to_forces_optional() {
        let rule = rule_of(json!({"type": "string", "required": true, "defaultsTo": "x"}));
        assert_eq!(rule.presence(), Presence::Optional);
        assert_eq!(rule.default_value(), Some(&DefaultValue::Literal(json!("x"))));
    }

    #[test]
    fn defaults_to_overrides_date_default() {
        let rule = rule_of(json!({"type": "date", "default": "NOW", "defaultsTo": "2001-01-01"}));
        assert_eq!(
            rule.default_value(),
            Some(&DefaultValue::Literal(json!("2001-01-01")))
        );
    }

    #[test]
    fn defaults_to_null_is_still_a_default() {
        let rule = rule_of(json!({"type": "string", "defaultsTo": null}));
        assert_eq!(rule.default_value(), Some(&DefaultValue::Literal(Value::Null)));
    }

    #[test]
    fn unknown_type_bypasses_modifiers() {
        let outcome = compose_value(json!({
            "type": "nonsense_type",
            "required": true,
            "max": 4,
            "defaultsTo": 1,
            "in": [1, 2]
        }))
        .unwrap();
        assert_eq!(outcome.rule.kind(), &RuleKind::Any);
        assert_eq!(outcome.rule.presence(), Presence::Default);
        assert_eq!(outcome.rule.max_bound(), None);
        assert_eq!(outcome.rule.default_value(), None);
        assert!(outcome.rule.valid_values().is_empty());
        assert_eq!(
            outcome.diagnostic,
            Some(Diagnostic::unknown_type("f", "nonsense_type"))
        );
    }

    #[test]
    fn known_types_have_no_diagnostic() {
        assert!(compose_value(json!("string")).unwrap().diagnostic.is_none());
    }

    #[test]
    fn bounds_on_booleans_are_unsupported() {
        let err = compose_value(json!({"type": "boolean", "max": 1})).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedConstraint {
                field: "f".into(),
                constraint: "max".into(),
                kind: "boolean".into()
            }
        );
    }

    #[test]
    fn non_numeric_length_is_invalid() {
        let err = compose_value(json!({"type": "string", "size": "ten"})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConstraint { .. }));
        let err = compose_value(json!({"type": "array", "min": -1})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConstraint { .. }));
    }

    #[test]
    fn patterns_must_compile() {
        let err = compose_value(json!({"type": "string", "regex": "([a-z"})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPattern { ref pattern, .. } if pattern == "([a-z"));

        let err = compose_value(json!({"type": "string", "is": {}})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConstraint { .. }));
    }

    #[test]
    fn slash_literals_split_into_body_and_flags() {
        assert_eq!(split_literal("/[a-z]+/i"), ("[a-z]+", "i".to_string()));
        assert_eq!(split_literal("/[a-z]+/g"), ("[a-z]+", String::new()));
        assert_eq!(split_literal("/a\\/b/ms"), ("a\\/b", "ms".to_string()));
        assert_eq!(split_literal("/[/]x/gi"), ("[/]x", "i".to_string()));
        assert_eq!(split_literal("^[0-9]+$"), ("^[0-9]+$", String::new()));
    }

    #[test]
    fn path_like_patterns_stay_whole() {
        for source in ["/api/users", "/api/users/v", "/path/to-x/", "/a/ii", "//g", "/api"] {
            assert_eq!(split_literal(source), (source, String::new()), "{source}");
        }
        let rule = rule_of(json!({"type": "string", "regex": "/api/users"}));
        assert_eq!(
            rule.tests(),
            &[StringTest::Pattern {
                source: "/api/users".into(),
                flags: String::new()
            }]
        );
    }

    #[test]
    fn literal_flags_are_kept_out_of_the_body() {
        let rule = rule_of(json!({"type": "string", "regex": "/^[a-z]+$/gi"}));
        assert_eq!(
            rule.tests(),
            &[StringTest::Pattern {
                source: "^[a-z]+$".into(),
                flags: "i".into()
            }]
        );
    }

    #[test]
    fn lookaround_and_backreferences_are_accepted() {
        let rule = rule_of(json!({"type": "string", "regex": "^(?=.*[A-Z])(?!.*\\s).{8,}$"}));
        assert!(matches!(&rule.tests()[0], StringTest::Pattern { source, .. } if source.starts_with("^(?=")));

        let rule = rule_of(json!({"type": "string", "is": "^(\\w)\\1$"}));
        assert_eq!(rule.tests().len(), 1);
    }

    #[test]
    fn unknown_type_with_malformed_metadata_still_degrades() {
        let outcome = compose_value(json!({
            "type": "nonsense",
            "metadata": "not a mapping"
        }))
        .unwrap();
        assert_eq!(outcome.rule, Rule::any());
        assert!(outcome.diagnostic.is_some());

        let outcome = compose_value(json!({
            "type": "nonsense",
            "metadata": {"label": "Kept"}
        }))
        .unwrap();
        assert_eq!(outcome.rule.label_text(), Some("Kept"));
    }

    #[test]
    fn array_and_object_bounds() {
        let rule = rule_of(json!({"type": "array", "minLength": 1, "max": 3}));
        assert_eq!(rule.min_bound(), Some(&json!(1)));
        assert_eq!(rule.max_bound(), Some(&json!(3)));

        let rule = rule_of(json!({"type": "json", "max": 2}));
        assert_eq!(rule.max_bound(), Some(&json!(2)));
    }
}
