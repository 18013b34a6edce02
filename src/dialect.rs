//! Dialect adapters and global type definitions
//!
//! A dialect adapter is the glue between introspected raw type strings and
//! the scalar type names emitted in declarations. Adapters never fail: an
//! unrecognized type falls back to the dialect's default scalar.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::ast::{AliasDeclaration, TypeExpression};

/// Module specifier the wrapper types are imported from.
pub const TYPE_LIBRARY_MODULE: &str = "kysely";

/// Name of the wrapper marking a column whose value may be omitted on write.
pub const GENERATED_WRAPPER: &str = "Generated";

/// Returns true for symbols supplied directly by the type library rather
/// than by a generated alias or a custom import.
pub fn is_library_symbol(name: &str) -> bool {
    matches!(name, "ColumnType" | "JSONColumnType")
}

/// An alias the transformer may emit once per output, plus the library
/// symbols its body references (imported alongside it).
#[derive(Debug, Clone)]
pub struct GlobalDefinition {
    pub alias: AliasDeclaration,
    pub references: Vec<&'static str>,
}

/// Process-wide immutable table of emittable alias definitions, initialized
/// once at first use.
pub static GLOBAL_DEFINITIONS: Lazy<HashMap<&'static str, GlobalDefinition>> = Lazy::new(|| {
    let mut definitions = HashMap::new();
    definitions.insert(
        GENERATED_WRAPPER,
        GlobalDefinition {
            alias: AliasDeclaration::new(
                GENERATED_WRAPPER,
                vec!["T".to_string()],
                TypeExpression::raw(
                    "T extends ColumnType<infer S, infer I, infer U> \
                     ? ColumnType<S, I | undefined, U> \
                     : ColumnType<T, T | undefined, T>",
                ),
            ),
            references: vec!["ColumnType"],
        },
    );
    definitions
});

/// Maps raw dialect type strings to declared scalar type expressions.
pub trait Adapter {
    /// Resolves a lowercased raw data type to its scalar expression, or
    /// `None` when the dialect does not recognize it.
    fn scalar_type(&self, data_type: &str) -> Option<TypeExpression>;

    /// The conservative fallback used for unrecognized data types.
    fn default_scalar(&self) -> TypeExpression {
        TypeExpression::identifier("unknown")
    }
}

/// SQLite adapter.
///
/// SQLite's column affinity rules mean any value ends up stored as one of a
/// handful of classes; unrecognized declared types default to `string`.
#[derive(Debug, Default)]
pub struct SqliteAdapter;

impl Adapter for SqliteAdapter {
    fn scalar_type(&self, data_type: &str) -> Option<TypeExpression> {
        let name = match data_type {
            "any" => "unknown",
            "blob" => "Buffer",
            "boolean" | "integer" | "numeric" | "real" => "number",
            "text" => "string",
            _ => return None,
        };
        Some(TypeExpression::identifier(name))
    }

    fn default_scalar(&self) -> TypeExpression {
        TypeExpression::identifier("string")
    }
}
