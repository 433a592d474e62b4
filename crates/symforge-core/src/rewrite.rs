//! Header rewriting
//!
//! Ghidra's "Export to C header" output is almost-but-not-quite compilable
//! C. Two fixed repairs close the gap:
//!
//! ```text
//! raw header → prepend pointer typedefs → replace :: with __ → C source
//! ```
//!
//! Everything else in the header passes through byte for byte, comments and
//! whitespace included.

/// Typedefs prepended to every header.
///
/// Ghidra uses `pointer` and `pointer32` as built-in types without ever
/// defining them, so any header that mentions one fails with an
/// unknown-type error until these are in scope.
pub const POINTER_TYPEDEFS: &str = "typedef void* pointer;\ntypedef void* pointer32;\n";

/// Rewrite an exported header into compilable C source.
///
/// Prepends [`POINTER_TYPEDEFS`] and rewrites the `::` scope separator that
/// Ghidra leaves in class-derived names into `__`, which keeps the name a
/// single valid C identifier. The substitution applies everywhere in the
/// text, not just inside type names.
pub fn rewrite_header(source: &str) -> String {
    let mut rewritten = String::with_capacity(POINTER_TYPEDEFS.len() + source.len());
    rewritten.push_str(POINTER_TYPEDEFS);
    rewritten.push_str(source);
    rewritten.replace("::", "__")
}
