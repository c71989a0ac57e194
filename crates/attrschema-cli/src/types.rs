//! # Types Subcommand
//!
//! Prints the recognised type aliases and their canonical types.

use anyhow::Result;
use attrschema_core::TYPE_ALIASES;

/// Execute the types subcommand.
pub fn run_types() -> Result<u8> {
    for line in alias_lines() {
        println!("{line}");
    }
    Ok(0)
}

/// One `alias -> canonical` line per recognised tag.
pub fn alias_lines() -> Vec<String> {
    let width = TYPE_ALIASES
        .iter()
        .map(|(alias, _)| alias.len())
        .max()
        .unwrap_or(0);
    TYPE_ALIASES
        .iter()
        .map(|(alias, canonical)| format!("{alias:<width$}  -> {canonical}"))
        .collect()
}
