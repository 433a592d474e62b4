//! Struct discovery
//!
//! Finds the struct names declared in a rewritten header by matching the
//! literal keyword `struct` followed by an identifier. This is textual
//! matching, not C parsing: the scanner knows nothing about comments,
//! string literals, or nesting. Ghidra's export format is regular enough
//! for that to hold, and a name matched inside a comment only costs one
//! harmless extra declaration later.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static STRUCT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"struct (\w+)").expect("Invalid regex pattern"));

/// Collect every distinct struct name in `source`, in first-occurrence order.
///
/// Repeated mentions of a name collapse into one entry. A header mentions
/// each struct many times (definition, typedef, field types) but may only
/// receive one forced declaration per name.
pub fn discover_structs(source: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for caps in STRUCT_PATTERN.captures_iter(source) {
        let name = &caps[1];
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }
    names
}
