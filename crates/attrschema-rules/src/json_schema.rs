//! # JSON Schema Rendering
//!
//! Renders a [`Rule`] tree as a JSON Schema (Draft 2020-12) document so the
//! translated blueprint can be handed to ordinary schema tooling.
//!
//! ## Mapping
//!
//! | Rule | JSON Schema |
//! |------|-------------|
//! | `min`/`max` | `minLength`/`maxLength`, `minimum`/`maximum`, `minItems`/`maxItems`, `minProperties`/`maxProperties`, or `formatMinimum`/`formatMaximum` by kind |
//! | string kind | `type: string` plus `minLength: 1` unless a `min` or a valid `""` says otherwise |
//! | date kind | `anyOf` of date-time string, date string and numeric timestamp |
//! | string tests | `format` or `pattern`; repeats go into `allOf` |
//! | pattern flags | `x-pattern-flags` next to the ECMA-262 `pattern` |
//! | `valid` / `invalid` | `enum` / `not.enum` |
//! | `allow` | `anyOf: [<rule>, {enum: allowed}]` |
//! | presence | parent object's `required` |
//! | default | `default`, or `x-dynamic-default: "now"` for the clock producer |
//! | label / description / examples | `title` / `description` / `examples` |
//!
//! String date bounds use the `formatMinimum`/`formatMaximum` vocabulary,
//! which validators without that extension treat as annotations. Numeric
//! date bounds become `minimum`/`maximum` on the timestamp branch.
//!
//! `pattern` values are always plain ECMA-262. Flags from a `/source/flags`
//! literal cannot be expressed there, so they are carried in
//! `x-pattern-flags` and standard validators match case-sensitively.

use serde_json::{json, Map, Value};

use crate::rule::{DefaultValue, FieldRules, Presence, Rule, RuleKind, StringTest};

/// `$schema` URI stamped on root documents.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Extension keyword carrying a dynamic default producer.
pub const DYNAMIC_DEFAULT_KEYWORD: &str = "x-dynamic-default";

/// Extension keyword carrying regex literal flags.
pub const PATTERN_FLAGS_KEYWORD: &str = "x-pattern-flags";

const ALPHANUM_PATTERN: &str = "^[a-zA-Z0-9]*$";
const LOWERCASE_PATTERN: &str = "^[^A-Z]*$";
const UPPERCASE_PATTERN: &str = "^[^a-z]*$";
const HEX_PATTERN: &str = "^[a-fA-F0-9]*$";

/// Render a rule as a root document with `$schema`.
pub fn root_schema(rule: &Rule) -> Value {
    let mut schema = Map::new();
    schema.insert("$schema".into(), Value::String(DRAFT_2020_12.into()));
    if let Value::Object(body) = render(rule) {
        schema.extend(body);
    }
    Value::Object(schema)
}

/// Render a field mapping as `{field: schema}` without an object wrapper.
pub fn render_fields(fields: &FieldRules) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(name, rule)| (name.to_string(), render(rule)))
            .collect(),
    )
}

/// Render one rule.
pub fn render(rule: &Rule) -> Value {
    let mut core = Map::new();
    render_kind(rule, &mut core);
    render_bounds(rule, &mut core);
    render_tests(rule.tests(), &mut core);

    if !rule.valid_values().is_empty() {
        core.insert("enum".into(), Value::Array(rule.valid_values().to_vec()));
    }
    if !rule.invalid_values().is_empty() {
        core.insert("not".into(), json!({ "enum": rule.invalid_values() }));
    }

    let mut schema = if rule.allowed_values().is_empty() {
        core
    } else {
        let mut outer = Map::new();
        outer.insert(
            "anyOf".into(),
            json!([Value::Object(core), { "enum": rule.allowed_values() }]),
        );
        outer
    };

    match rule.default_value() {
        Some(DefaultValue::Literal(v)) => {
            schema.insert("default".into(), v.clone());
        }
        Some(DefaultValue::Now) => {
            schema.insert(DYNAMIC_DEFAULT_KEYWORD.into(), Value::String("now".into()));
        }
        None => {}
    }
    if let Some(label) = rule.label_text() {
        schema.insert("title".into(), Value::String(label.into()));
    }
    if let Some(text) = rule.description_text() {
        schema.insert("description".into(), Value::String(text.into()));
    }
    if !rule.examples().is_empty() {
        schema.insert("examples".into(), Value::Array(rule.examples().to_vec()));
    }

    Value::Object(schema)
}

fn render_kind(rule: &Rule, out: &mut Map<String, Value>) {
    match rule.kind() {
        RuleKind::Any => {}
        RuleKind::String => {
            out.insert("type".into(), json!("string"));
        }
        RuleKind::Number => {
            out.insert("type".into(), json!("number"));
        }
        RuleKind::Date => {
            out.insert("anyOf".into(), Value::Array(date_branches(rule)));
        }
        RuleKind::Binary => {
            out.insert("type".into(), json!("string"));
            out.insert("contentEncoding".into(), json!("base64"));
        }
        RuleKind::Boolean => {
            out.insert("type".into(), json!("boolean"));
        }
        RuleKind::Array { items } => {
            out.insert("type".into(), json!("array"));
            if let Some(items) = items {
                out.insert("items".into(), render(items));
            }
        }
        RuleKind::Object {
            keys,
            allow_unknown,
        } => {
            out.insert("type".into(), json!("object"));
            if let Some(keys) = keys {
                out.insert("properties".into(), render_fields(keys));
                let required: Vec<Value> = keys
                    .iter()
                    .filter(|(_, r)| r.presence() == Presence::Required)
                    .map(|(name, _)| Value::String(name.to_string()))
                    .collect();
                if !required.is_empty() {
                    out.insert("required".into(), Value::Array(required));
                }
                if !allow_unknown {
                    out.insert("additionalProperties".into(), Value::Bool(false));
                }
            }
        }
        RuleKind::Alternatives { options } => {
            out.insert(
                "anyOf".into(),
                Value::Array(options.iter().map(render).collect()),
            );
        }
    }
}

/// Date-time string, date string, or epoch timestamp. String bounds apply
/// to the string branches and numeric bounds to the timestamp branch.
fn date_branches(rule: &Rule) -> Vec<Value> {
    let mut branches = Vec::new();
    for format in ["date-time", "date"] {
        let mut branch = Map::new();
        branch.insert("type".into(), json!("string"));
        branch.insert("format".into(), json!(format));
        insert_bounds(rule, ("formatMinimum", "formatMaximum"), Value::is_string, &mut branch);
        branches.push(Value::Object(branch));
    }
    let mut timestamp = Map::new();
    timestamp.insert("type".into(), json!("number"));
    insert_bounds(rule, ("minimum", "maximum"), Value::is_number, &mut timestamp);
    branches.push(Value::Object(timestamp));
    branches
}

fn bound_keywords(kind: &RuleKind) -> Option<(&'static str, &'static str)> {
    match kind {
        RuleKind::String | RuleKind::Binary => Some(("minLength", "maxLength")),
        RuleKind::Number => Some(("minimum", "maximum")),
        RuleKind::Array { .. } => Some(("minItems", "maxItems")),
        RuleKind::Object { .. } => Some(("minProperties", "maxProperties")),
        // Rendered per branch by `date_branches`.
        RuleKind::Date => None,
        RuleKind::Any | RuleKind::Boolean | RuleKind::Alternatives { .. } => None,
    }
}

fn insert_bounds(
    rule: &Rule,
    (min_key, max_key): (&str, &str),
    applies: fn(&Value) -> bool,
    out: &mut Map<String, Value>,
) {
    if let Some(min) = rule.min_bound().filter(|v| applies(v)) {
        out.insert(min_key.into(), min.clone());
    }
    if let Some(max) = rule.max_bound().filter(|v| applies(v)) {
        out.insert(max_key.into(), max.clone());
    }
}

fn render_bounds(rule: &Rule, out: &mut Map<String, Value>) {
    if let Some(keywords) = bound_keywords(rule.kind()) {
        insert_bounds(rule, keywords, |_| true, out);
    }
    let empty = Value::String(String::new());
    if matches!(rule.kind(), RuleKind::String)
        && rule.min_bound().is_none()
        && !rule.valid_values().contains(&empty)
    {
        out.insert("minLength".into(), json!(1));
    }
}

fn test_keyword(test: &StringTest) -> (&'static str, Value) {
    // Flagged patterns are rendered separately by `render_tests`.
    match test {
        StringTest::Alphanum => ("pattern", json!(ALPHANUM_PATTERN)),
        StringTest::Email => ("format", json!("email")),
        StringTest::CreditCard => ("format", json!("credit-card")),
        StringTest::Lowercase => ("pattern", json!(LOWERCASE_PATTERN)),
        StringTest::Uppercase => ("pattern", json!(UPPERCASE_PATTERN)),
        StringTest::Pattern { source, .. } => ("pattern", json!(source)),
        StringTest::Uri => ("format", json!("uri")),
        StringTest::Hex => ("pattern", json!(HEX_PATTERN)),
    }
}

fn render_tests(tests: &[StringTest], out: &mut Map<String, Value>) {
    let mut extra = Vec::new();
    for test in tests {
        if let StringTest::Pattern { source, flags } = test {
            if !flags.is_empty() {
                extra.push(json!({ "pattern": source, PATTERN_FLAGS_KEYWORD: flags }));
                continue;
            }
        }
        let (keyword, value) = test_keyword(test);
        if out.get(keyword) == Some(&value) {
            continue;
        }
        if out.contains_key(keyword) {
            let mut sub = Map::new();
            sub.insert(keyword.into(), value);
            if !extra.contains(&Value::Object(sub.clone())) {
                extra.push(Value::Object(sub));
            }
        } else {
            out.insert(keyword.into(), value);
        }
    }
    if !extra.is_empty() {
        out.insert("allOf".into(), Value::Array(extra));
    }
}
