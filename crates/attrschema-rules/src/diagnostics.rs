//! # Diagnostics
//!
//! Non-fatal findings produced during translation. Every diagnostic is both
//! returned to the caller (in [`crate::Translation`]) and forwarded to a
//! [`DiagnosticSink`], so the engine itself never writes to a global
//! channel. The default sink logs through `tracing`.

use std::fmt;

use serde::Serialize;

/// One non-fatal finding about a blueprint field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Field the finding is about.
    pub field: String,
    /// What was found.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

/// Diagnostic categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The raw type is not in the alias table; the field accepts anything.
    UnknownType {
        /// The type as written in the blueprint.
        raw_type: String,
    },
    /// Both `model` and `collection` were set; `model` was used.
    ConflictingAssociation,
}

impl Diagnostic {
    pub fn unknown_type(field: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: DiagnosticKind::UnknownType {
                raw_type: raw_type.into(),
            },
        }
    }

    pub fn conflicting_association(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: DiagnosticKind::ConflictingAssociation,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownType { raw_type } => write!(
                f,
                "'{raw_type}' not a recognised type for field '{}'. Accepting any value, please resolve.",
                self.field
            ),
            DiagnosticKind::ConflictingAssociation => write!(
                f,
                "field '{}' sets both 'model' and 'collection'. Using 'model'.",
                self.field
            ),
        }
    }
}

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Logs each diagnostic at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!(field = %diagnostic.field, "{diagnostic}");
    }
}

/// Discards diagnostics. They are still returned in the translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic),
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}
