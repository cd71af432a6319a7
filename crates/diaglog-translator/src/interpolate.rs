// crates/diaglog-translator/src/interpolate.rs
// ============================================================================
// Module: Template Interpolation
// Description: Substitution of named placeholders with entry arguments.
// Purpose: Render message templates into display text.
// Dependencies: serde_json, crate::entry
// ============================================================================

//! ## Overview
//! Templates embed placeholders as `{name}`, where `name` is one or more ASCII
//! letters, digits, or underscores. Substitution is a single left-to-right pass:
//! substituted values are never scanned again, so an argument containing
//! `{zone}` stays literal.
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `{name}` with argument | Replaced by the printable argument value |
//! | `{name}` without argument | Left as literal `{name}` |
//! | `{`, `{}`, `{a b}`, unclosed `{a` | Emitted as-is |

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::entry::printable;

// ============================================================================
// SECTION: Interpolation
// ============================================================================

/// Substitutes every `{name}` placeholder found in `args`.
#[must_use]
pub fn interpolate(template: &str, args: &BTreeMap<String, Value>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[.. open]);
        let after = &rest[open + 1 ..];
        let Some(name) = placeholder_name(after) else {
            output.push('{');
            rest = after;
            continue;
        };
        match args.get(name) {
            Some(value) => output.push_str(&printable(value)),
            None => {
                output.push('{');
                output.push_str(name);
                output.push('}');
            }
        }
        rest = &after[name.len() + 1 ..];
    }
    output.push_str(rest);
    output
}

/// Returns placeholder names in order of appearance, duplicates included.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1 ..];
        match placeholder_name(after) {
            Some(name) => {
                names.push(name);
                rest = &after[name.len() + 1 ..];
            }
            None => rest = after,
        }
    }
    names
}

/// Reads a placeholder name terminated by `}` at the start of `text`.
fn placeholder_name(text: &str) -> Option<&str> {
    let end = text.find(|ch: char| !is_name_char(ch))?;
    if end == 0 || !text[end ..].starts_with('}') {
        return None;
    }
    Some(&text[.. end])
}

/// Whether `ch` may appear in a placeholder name.
const fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests;
