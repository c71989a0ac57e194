//! # Rules — The Target Validator Dialect
//!
//! A [`Rule`] is an immutable validator description built by chaining
//! constraint operations, each of which consumes the rule and returns the
//! updated one:
//!
//! ```
//! use attrschema_rules::Rule;
//!
//! let code = Rule::string().min(3).max(6).hex().required();
//! assert!(code.is_required());
//! ```
//!
//! ## Slot semantics
//!
//! - `min` / `max` / presence / default each own a single slot. A later call
//!   overwrites an earlier one.
//! - `valid`, `invalid`, `allow`, string tests and examples append.
//!
//! Rules carry no behaviour beyond description; rendering lives in
//! [`crate::json_schema`].

use chrono::{SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// What sort of value a rule accepts before constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Anything, including absence.
    Any,
    /// Non-empty text. `""` passes only through `allow`/`valid` or a
    /// zero `min`.
    String,
    /// Numbers.
    Number,
    /// Dates and timestamps.
    Date,
    /// Binary buffers.
    Binary,
    /// Booleans.
    Boolean,
    /// Arrays, optionally with an element rule.
    Array {
        /// Rule every element must satisfy.
        #[serde(skip_serializing_if = "Option::is_none")]
        items: Option<Box<Rule>>,
    },
    /// Objects, optionally with declared keys.
    Object {
        /// Declared keys. `None` means free-form.
        #[serde(skip_serializing_if = "Option::is_none")]
        keys: Option<FieldRules>,
        /// Whether undeclared keys are accepted when keys are declared.
        allow_unknown: bool,
    },
    /// Any one of several rules.
    Alternatives {
        /// Candidate rules, tried in order.
        options: Vec<Rule>,
    },
}

impl RuleKind {
    /// Whether `min`/`max` mean anything for this kind.
    pub fn supports_bounds(&self) -> bool {
        !matches!(
            self,
            RuleKind::Any | RuleKind::Boolean | RuleKind::Alternatives { .. }
        )
    }

    /// Short kind name.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Any => "any",
            RuleKind::String => "string",
            RuleKind::Number => "number",
            RuleKind::Date => "date",
            RuleKind::Binary => "binary",
            RuleKind::Boolean => "boolean",
            RuleKind::Array { .. } => "array",
            RuleKind::Object { .. } => "object",
            RuleKind::Alternatives { .. } => "alternatives",
        }
    }
}

/// Whether a value must, may, or by default may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Nothing said; absence is accepted.
    #[default]
    Default,
    /// Explicitly optional.
    Optional,
    /// Absence is rejected.
    Required,
}

/// String-level checks, kept in call order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "arg", rename_all = "snake_case")]
pub enum StringTest {
    /// ASCII letters and digits only.
    Alphanum,
    /// Email address.
    Email,
    /// Credit card number.
    CreditCard,
    /// No uppercase letters.
    Lowercase,
    /// No lowercase letters.
    Uppercase,
    /// Must match the ECMA-262 regular expression `source`. `flags` holds
    /// the `i`/`m`/`s` flags of a `/source/flags` literal, in order.
    Pattern {
        /// Pattern body.
        source: String,
        /// Literal flags; empty for plain patterns.
        #[serde(skip_serializing_if = "String::is_empty")]
        flags: String,
    },
    /// URI.
    Uri,
    /// Hexadecimal digits only.
    Hex,
}

/// A default applied when the value is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// A fixed value.
    Literal(Value),
    /// The current timestamp, evaluated each time the default is applied.
    Now,
}

impl DefaultValue {
    /// Produce the concrete default. `Now` reads the clock on every call.
    pub fn resolve(&self) -> Value {
        match self {
            DefaultValue::Literal(v) => v.clone(),
            DefaultValue::Now => {
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

/// A composed validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    #[serde(flatten)]
    kind: RuleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tests: Vec<StringTest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    valid: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    invalid: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allow: Vec<Value>,
    presence: Presence,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    examples: Vec<Value>,
}

impl Rule {
    fn of(kind: RuleKind) -> Self {
        Self {
            kind,
            min: None,
            max: None,
            tests: Vec::new(),
            valid: Vec::new(),
            invalid: Vec::new(),
            allow: Vec::new(),
            presence: Presence::Default,
            default: None,
            label: None,
            description: None,
            examples: Vec::new(),
        }
    }

    pub fn any() -> Self {
        Self::of(RuleKind::Any)
    }

    pub fn string() -> Self {
        Self::of(RuleKind::String)
    }

    pub fn number() -> Self {
        Self::of(RuleKind::Number)
    }

    pub fn date() -> Self {
        Self::of(RuleKind::Date)
    }

    pub fn binary() -> Self {
        Self::of(RuleKind::Binary)
    }

    pub fn boolean() -> Self {
        Self::of(RuleKind::Boolean)
    }

    /// Array with no element rule.
    pub fn array() -> Self {
        Self::of(RuleKind::Array { items: None })
    }

    /// Free-form object.
    pub fn object() -> Self {
        Self::of(RuleKind::Object {
            keys: None,
            allow_unknown: false,
        })
    }

    /// Object with declared keys; undeclared keys are rejected.
    pub fn object_with_keys(keys: FieldRules) -> Self {
        Self::of(RuleKind::Object {
            keys: Some(keys),
            allow_unknown: false,
        })
    }

    /// Accept a value matching any of `options`.
    pub fn alternatives(options: Vec<Rule>) -> Self {
        Self::of(RuleKind::Alternatives { options })
    }

    /// Set the element rule. No effect on non-arrays.
    pub fn items(mut self, rule: Rule) -> Self {
        if let RuleKind::Array { items } = &mut self.kind {
            *items = Some(Box::new(rule));
        }
        self
    }

    /// Accept undeclared keys. No effect on non-objects.
    pub fn unknown(mut self, allow: bool) -> Self {
        if let RuleKind::Object { allow_unknown, .. } = &mut self.kind {
            *allow_unknown = allow;
        }
        self
    }

    /// Lower bound: length, magnitude, item count or earliest date,
    /// depending on the kind.
    pub fn min(mut self, limit: impl Into<Value>) -> Self {
        self.min = Some(limit.into());
        self
    }

    /// Upper bound; see [`min`](Self::min).
    pub fn max(mut self, limit: impl Into<Value>) -> Self {
        self.max = Some(limit.into());
        self
    }

    /// Restrict to the given values (cumulative).
    pub fn valid(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.valid.extend(values);
        self
    }

    /// Reject the given values (cumulative).
    pub fn invalid(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.invalid.extend(values);
        self
    }

    /// Accept the given values regardless of every other constraint.
    pub fn allow(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.allow.extend(values);
        self
    }

    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    fn test(mut self, test: StringTest) -> Self {
        self.tests.push(test);
        self
    }

    pub fn alphanum(self) -> Self {
        self.test(StringTest::Alphanum)
    }

    pub fn email(self) -> Self {
        self.test(StringTest::Email)
    }

    pub fn credit_card(self) -> Self {
        self.test(StringTest::CreditCard)
    }

    pub fn lowercase(self) -> Self {
        self.test(StringTest::Lowercase)
    }

    pub fn uppercase(self) -> Self {
        self.test(StringTest::Uppercase)
    }

    pub fn pattern(self, source: impl Into<String>) -> Self {
        self.pattern_with_flags(source, "")
    }

    pub fn pattern_with_flags(self, source: impl Into<String>, flags: impl Into<String>) -> Self {
        self.test(StringTest::Pattern {
            source: source.into(),
            flags: flags.into(),
        })
    }

    pub fn uri(self) -> Self {
        self.test(StringTest::Uri)
    }

    pub fn hex(self) -> Self {
        self.test(StringTest::Hex)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn example(mut self, example: Value) -> Self {
        self.examples.push(example);
        self
    }

    // -- accessors --

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn min_bound(&self) -> Option<&Value> {
        self.min.as_ref()
    }

    pub fn max_bound(&self) -> Option<&Value> {
        self.max.as_ref()
    }

    pub fn tests(&self) -> &[StringTest] {
        &self.tests
    }

    pub fn has_test(&self, test: &StringTest) -> bool {
        self.tests.contains(test)
    }

    pub fn valid_values(&self) -> &[Value] {
        &self.valid
    }

    pub fn invalid_values(&self) -> &[Value] {
        &self.invalid
    }

    pub fn allowed_values(&self) -> &[Value] {
        &self.allow
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn examples(&self) -> &[Value] {
        &self.examples
    }

    /// Declared keys of an object rule.
    pub fn keys(&self) -> Option<&FieldRules> {
        match &self.kind {
            RuleKind::Object { keys, .. } => keys.as_ref(),
            _ => None,
        }
    }
}

/// Field name -> rule, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRules {
    entries: Vec<(String, Rule)>,
}

impl FieldRules {
    pub(crate) const EMPTY: FieldRules = FieldRules {
        entries: Vec::new(),
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Blueprint keys are unique, so no lookup is done.
    pub fn push(&mut self, name: impl Into<String>, rule: Rule) {
        self.entries.push((name.into(), rule));
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill absent fields of `document` with their resolved defaults.
    ///
    /// `DefaultValue::Now` is evaluated here, once per call. Returns the
    /// number of fields filled.
    pub fn apply_defaults(&self, document: &mut Map<String, Value>) -> usize {
        let mut filled = 0;
        for (name, rule) in self.iter() {
            if document.contains_key(name) {
                continue;
            }
            if let Some(default) = rule.default_value() {
                document.insert(name.to_string(), default.resolve());
                filled += 1;
            }
        }
        filled
    }
}

impl Serialize for FieldRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rule) in &self.entries {
            map.serialize_entry(name, rule)?;
        }
        map.end()
    }
}
