//! # attrschema-core — Foundational Types for attrschema
//!
//! This crate is the leaf of the attrschema workspace. It defines the input
//! side of the translation: the attribute blueprint, borrowed descriptor
//! views over it, the canonical type classifier, and the error hierarchy
//! every other crate reports through.
//!
//! ## Key Design Principles
//!
//! 1. **Blueprints keep document order.** A [`Blueprint`] is an ordered list
//!    of entries, so the translated schema lists fields in the order the
//!    author wrote them.
//!
//! 2. **Descriptors are borrowed views.** [`Descriptor`] never copies the
//!    underlying JSON; flag lookups go straight to the source mapping.
//!
//! 3. **One canonical type enum.** [`CanonicalType`] is the single place type
//!    aliases are resolved. The dual-purpose `email` tag is a
//!    `String { is_email: true }` variant, not a special case downstream.
//!
//! 4. **Field-scoped errors.** Every [`ConvertError`] names the field that
//!    caused it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `attrschema-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod blueprint;
pub mod canonical;
pub mod descriptor;
pub mod error;

pub use blueprint::{Blueprint, Entry, DEFAULT_RESERVED_KEYS};
pub use canonical::{classify, CanonicalType, TYPE_ALIASES};
pub use descriptor::{is_truthy, json_kind, Descriptor};
pub use error::{BlueprintError, ConvertError};
