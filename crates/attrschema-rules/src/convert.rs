//! # Schema Assembler
//!
//! Walks a [`Blueprint`] in document order and produces one rule per data
//! field. Relational descriptors go to the association resolver; everything
//! else goes through classification, composition and annotation.
//!
//! A translation either succeeds completely or fails with the first
//! field-scoped [`ConvertError`]. There are no partial results.

use attrschema_core::{Blueprint, ConvertError, Descriptor, Entry};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::association::{association_rule, Association};
use crate::compose::compose;
use crate::config::ConvertOptions;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::json_schema;
use crate::rule::{FieldRules, Rule};

/// Output shape of a translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputSchema {
    /// Object rule with the fields as declared keys. Unknown keys rejected.
    Object(Rule),
    /// Bare field -> rule mapping.
    Fields(FieldRules),
}

impl OutputSchema {
    /// The field rules, whichever shape was produced.
    pub fn fields(&self) -> &FieldRules {
        match self {
            OutputSchema::Fields(fields) => fields,
            OutputSchema::Object(rule) => rule.keys().unwrap_or(&EMPTY_FIELDS),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Rule> {
        self.fields().get(name)
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, OutputSchema::Object(_))
    }

    /// JSON Schema rendering. Wrapped output is a root document; bare output
    /// is a `{field: schema}` mapping.
    pub fn to_json_schema(&self) -> Value {
        match self {
            OutputSchema::Object(rule) => json_schema::root_schema(rule),
            OutputSchema::Fields(fields) => json_schema::render_fields(fields),
        }
    }

    /// See [`FieldRules::apply_defaults`].
    pub fn apply_defaults(&self, document: &mut Map<String, Value>) -> usize {
        self.fields().apply_defaults(document)
    }
}

static EMPTY_FIELDS: FieldRules = FieldRules::EMPTY;

/// A finished translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translation {
    /// The translated schema, wrapped or bare.
    pub schema: OutputSchema,
    /// Non-fatal findings, in field order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Blueprint translator.
pub struct Converter<'s> {
    options: ConvertOptions,
    sink: &'s dyn DiagnosticSink,
}

impl std::fmt::Debug for Converter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Converter<'static> {
    /// Converter that reports diagnostics through `tracing`.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            sink: &TracingSink,
        }
    }
}

impl<'s> Converter<'s> {
    /// Replace the diagnostic sink.
    pub fn with_sink<'t>(self, sink: &'t dyn DiagnosticSink) -> Converter<'t> {
        Converter {
            options: self.options,
            sink,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Translate `blueprint`.
    ///
    /// # Errors
    ///
    /// The first field-scoped [`ConvertError`]. Unknown types are reported
    /// as diagnostics, not errors.
    pub fn convert(&self, blueprint: &Blueprint) -> Result<Translation, ConvertError> {
        let mut fields = FieldRules::new();
        let mut diagnostics = Vec::new();

        for (name, entry) in blueprint.iter() {
            let Entry::Attribute(value) = entry else {
                tracing::trace!(field = name, "skipping callable");
                continue;
            };
            if self.options.is_reserved(name) {
                tracing::trace!(field = name, "skipping reserved key");
                continue;
            }

            let (rule, diagnostic) = self.convert_field(name, value)?;
            if let Some(diagnostic) = diagnostic {
                self.sink.emit(&diagnostic);
                diagnostics.push(diagnostic);
            }
            fields.push(name, rule);
        }

        tracing::debug!(
            fields = fields.len(),
            diagnostics = diagnostics.len(),
            wrapped = self.options.wrap_output,
            "blueprint converted"
        );
        let schema = if self.options.wrap_output {
            OutputSchema::Object(Rule::object_with_keys(fields))
        } else {
            OutputSchema::Fields(fields)
        };
        Ok(Translation {
            schema,
            diagnostics,
        })
    }

    fn convert_field(
        &self,
        name: &str,
        value: &Value,
    ) -> Result<(Rule, Option<Diagnostic>), ConvertError> {
        let descriptor = Descriptor::parse(name, value)?;

        if let Some(detected) =
            Association::detect(name, &descriptor, self.options.association_conflict)?
        {
            tracing::debug!(field = name, target = %detected.association.target(), "association");
            let diagnostic = detected
                .conflicting
                .then(|| Diagnostic::conflicting_association(name));
            return Ok((association_rule(&detected.association, &descriptor), diagnostic));
        }

        let outcome = compose(name, &descriptor)?;
        Ok((outcome.rule, outcome.diagnostic))
    }
}

/// Translate with default options and the `tracing` sink.
///
/// `wrap_output` selects an object rule (`true`) or the bare field mapping.
pub fn convert(blueprint: &Blueprint, wrap_output: bool) -> Result<Translation, ConvertError> {
    Converter::new(ConvertOptions::default().with_wrap_output(wrap_output)).convert(blueprint)
}
