//! Identifier casing conversion
//!
//! Deterministic, pure conversion of snake_case (or otherwise delimited)
//! schema names into PascalCase type names and camelCase property keys.
//! Distinct inputs can collide on the same output (`foo_bar` and `fooBar`
//! both map to `FooBar`); the last write wins through ordinary mapping
//! semantics, which is accepted rather than repaired.

/// Converts a delimited identifier to PascalCase: `foo_bar` → `FooBar`.
///
/// Words are split on underscores, hyphens, and whitespace; empty segments
/// produced by doubled delimiters are dropped.
pub fn pascal_case(identifier: &str) -> String {
    identifier
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Converts a delimited identifier to camelCase: `baz_qux` → `bazQux`.
pub fn camel_case(identifier: &str) -> String {
    let pascal = pascal_case(identifier);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => pascal,
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}
