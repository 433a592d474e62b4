//! Dummy declaration synthesis
//!
//! A header only declares types, and a C compiler omits debug information
//! for types nothing uses. Appending one throwaway global variable per
//! struct forces the full layout of every type into the object file's
//! DWARF data.

/// Prefix for the synthesized variable names.
///
/// Distinct enough that it will not collide with anything Ghidra exports.
pub const DUMMY_PREFIX: &str = "dummy_";

/// Append one dummy variable declaration per struct name.
///
/// Declarations follow the order of `names`. Each one is independent of
/// the others, so the order only affects how the tail of the generated
/// source reads.
pub fn append_dummy_declarations(definitions: String, names: &[String]) -> String {
    let mut augmented = definitions;
    for name in names {
        augmented.push_str(&format!("struct {} {}{};\n", name, DUMMY_PREFIX, name));
    }
    augmented
}
