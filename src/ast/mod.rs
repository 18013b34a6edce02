//! Declaration AST for generated type interfaces
//!
//! The transformer produces a tree of these nodes; a separate serialization
//! layer renders them as source text. All nodes are immutable value objects
//! with structural equality, so transformer output can be compared directly
//! in tests and snapshotted via serde.

use serde::{Deserialize, Serialize};

/// A type-level expression appearing on the right-hand side of a property,
/// alias, or generic argument position.
///
/// This is a closed set: the serializer matches it exhaustively, and new
/// shapes are added here rather than through trait objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpression {
    /// A plain type name, e.g. `string` or `InstantRange`.
    Identifier(Identifier),
    /// A type name derived from a table, e.g. `FooBar` for table `foo_bar`.
    /// Kept distinct from [`TypeExpression::Identifier`] so the aggregate
    /// interface can reference table types structurally.
    TableIdentifier(TableIdentifier),
    /// A generic instantiation, e.g. `Generated<string>`.
    Generic(GenericExpression),
    /// An inline object type, e.g. `{ id: number }`.
    Object(ObjectExpression),
    /// Opaque type text emitted verbatim, e.g. `{ test: string }`.
    Raw(RawExpression),
    /// A JSON column wrapper, e.g. `JSONColumnType<{ foo: "bar" }>`.
    JsonColumnType(JsonColumnType),
    /// Array notation around an element type, e.g. `string[]`.
    Array(Box<TypeExpression>),
    /// A union of alternatives, e.g. `string | null`.
    Union(Vec<TypeExpression>),
    /// A string literal type, e.g. `'active'`.
    Literal(String),
}

impl TypeExpression {
    pub fn identifier(name: impl Into<String>) -> Self {
        TypeExpression::Identifier(Identifier::new(name))
    }

    pub fn table_identifier(name: impl Into<String>) -> Self {
        TypeExpression::TableIdentifier(TableIdentifier::new(name))
    }

    pub fn raw(expression: impl Into<String>) -> Self {
        TypeExpression::Raw(RawExpression::new(expression))
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeExpression>) -> Self {
        TypeExpression::Generic(GenericExpression::new(name, args))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        TypeExpression::Literal(value.into())
    }

    /// Collapses a list of alternatives into a single expression: one
    /// element stands alone, several become a union.
    pub fn union_of(mut alternatives: Vec<TypeExpression>) -> Self {
        if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            TypeExpression::Union(alternatives)
        }
    }
}

/// A plain type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A table-derived type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIdentifier {
    pub name: String,
}

impl TableIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A generic type instantiation: a name applied to ordered type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericExpression {
    pub name: String,
    pub args: Vec<TypeExpression>,
}

impl GenericExpression {
    pub fn new(name: impl Into<String>, args: Vec<TypeExpression>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// An inline object type holding an ordered property list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
}

impl ObjectExpression {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }
}

/// A single key/value pair inside an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: TypeExpression,
}

impl Property {
    pub fn new(key: impl Into<String>, value: TypeExpression) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Opaque type text passed through to the output verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExpression {
    pub expression: String,
}

impl RawExpression {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

/// Wraps a raw object shape in the JSON column helper, which carries the
/// select/insert/update sides of a JSON column in one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonColumnType {
    pub body: RawExpression,
}

impl JsonColumnType {
    pub fn new(body: RawExpression) -> Self {
        Self { body }
    }
}

/// A top-level statement in the emitted declaration sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    Import(ImportStatement),
    Export(ExportStatement),
}

/// An exported declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStatement {
    pub declaration: Declaration,
}

impl ExportStatement {
    pub fn new(declaration: Declaration) -> Self {
        Self { declaration }
    }
}

/// The declarations that can appear under an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    Alias(AliasDeclaration),
    Interface(InterfaceDeclaration),
}

/// A type alias, optionally generic: `type Name<T> = ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDeclaration {
    pub name: String,
    /// Ordered type-parameter names; empty for a plain alias.
    #[serde(default)]
    pub type_params: Vec<String>,
    pub body: TypeExpression,
}

impl AliasDeclaration {
    pub fn new(name: impl Into<String>, type_params: Vec<String>, body: TypeExpression) -> Self {
        Self {
            name: name.into(),
            type_params,
            body,
        }
    }
}

/// An interface declaration: a named object type.
///
/// The id is an [`Identifier`] for the aggregate database interface and a
/// [`TableIdentifier`] for per-table interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    pub id: TypeExpression,
    pub body: ObjectExpression,
}

impl InterfaceDeclaration {
    pub fn new(id: TypeExpression, body: ObjectExpression) -> Self {
        Self { id, body }
    }
}

/// One imported name within an import statement. The clause is aliased only
/// when the exported name differs from the local name used in generated types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportClause {
    /// The name as exported by the module.
    pub name: String,
    /// The local alias, when it differs from the exported name.
    pub alias: Option<String>,
}

impl ImportClause {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }
}

/// An import of one or more names from a single module specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    pub module: String,
    pub clauses: Vec<ImportClause>,
}

impl ImportStatement {
    pub fn new(module: impl Into<String>, clauses: Vec<ImportClause>) -> Self {
        Self {
            module: module.into(),
            clauses,
        }
    }
}
