//! db-typegen - schema metadata to typed declaration ASTs
//!
//! Takes a fully introspected database schema and produces an ordered
//! sequence of type-declaration AST nodes suitable for rendering as
//! statically-typed interface source. Provides:
//! - Declaration AST node model (closed tagged unions)
//! - Immutable schema metadata model
//! - CHECK-constraint enum extraction and column enrichment
//! - Naming/casing conversion and import bookkeeping
//! - Dialect adapters for scalar type resolution
//! - The transformer orchestrating all of the above
//!
//! Live database querying, connection handling, CLI parsing, and rendering
//! of the AST to text are external collaborators and live elsewhere.

pub mod ast;
pub mod config;
pub mod dialect;
pub mod imports;
pub mod introspect;
pub mod metadata;
pub mod naming;
pub mod transform;

// Re-export commonly used types
pub use ast::{
    AliasDeclaration, Declaration, ExportStatement, ImportClause, ImportStatement,
    InterfaceDeclaration, ObjectExpression, Property, Statement, TypeExpression,
};
pub use config::ConfigError;
pub use dialect::{Adapter, SqliteAdapter};
pub use imports::{ImportRegistry, ImportSpec};
pub use introspect::{apply_check_constraints, parse_check_constraints};
pub use metadata::{ColumnMetadata, DatabaseMetadata, EnumCollection, TableMetadata};
pub use transform::{ColumnOverride, Overrides, TransformOptions, Transformer, transform};
