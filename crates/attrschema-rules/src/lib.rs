//! # attrschema-rules — Blueprint to Validator Translation
//!
//! Turns an attribute [`Blueprint`](attrschema_core::Blueprint) into a tree
//! of [`Rule`]s, the validator dialect defined in [`rule`], and renders that
//! tree as JSON Schema for downstream tooling.
//!
//! ## Pipeline
//!
//! ```text
//! Blueprint ─▶ convert (Schema Assembler)
//!                ├─ association::detect ─▶ association_rule
//!                └─ classify ─▶ compose (steps 1-7) ─▶ metadata::annotate
//!                                 └─ unknown type ─▶ any + Diagnostic
//! ```
//!
//! ```
//! use attrschema_core::Blueprint;
//! use serde_json::json;
//!
//! let blueprint = Blueprint::new()
//!     .attribute("name", json!({"type": "string", "required": true}))
//!     .attribute("age", json!({"type": "integer", "min": 0}));
//!
//! let out = attrschema_rules::convert(&blueprint, true).unwrap();
//! assert!(out.schema.field("name").unwrap().is_required());
//! assert!(out.diagnostics.is_empty());
//! ```
//!
//! ## Crate Policy
//!
//! - Translation is synchronous and keeps no state between calls.
//! - Non-fatal findings go to a [`DiagnosticSink`] and are also returned in
//!   the [`Translation`].
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod association;
pub mod compose;
pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod json_schema;
pub mod metadata;
pub mod rule;

pub use association::{Association, AssociationConflict};
pub use compose::{compose, FieldOutcome};
pub use config::{ConfigError, ConvertOptions};
pub use convert::{convert, Converter, OutputSchema, Translation};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, TracingSink};
pub use rule::{DefaultValue, FieldRules, Presence, Rule, RuleKind, StringTest};
