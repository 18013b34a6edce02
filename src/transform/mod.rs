//! Metadata-to-declaration transformation
//!
//! Orchestrates the naming converter, type mapper, and import registry over
//! a full [`DatabaseMetadata`] tree to produce the final ordered declaration
//! sequence. The transformation is a single pass and pure: identical
//! metadata and options always produce a structurally identical output, and
//! the inputs are never mutated.

use serde::Deserialize;
use std::collections::HashMap;

use crate::ast::{
    Declaration, ExportStatement, InterfaceDeclaration, ObjectExpression, Property, Statement,
    TypeExpression,
};
use crate::dialect::{
    Adapter, GENERATED_WRAPPER, GLOBAL_DEFINITIONS, TYPE_LIBRARY_MODULE, is_library_symbol,
};
use crate::imports::{ImportRegistry, ImportSpec};
use crate::metadata::{ColumnMetadata, DatabaseMetadata, TableMetadata};
use crate::naming::{camel_case, pascal_case};

/// Name of the trailing aggregate interface mapping table keys to their
/// generated table types.
pub const DATABASE_INTERFACE: &str = "DB";

/// Configuration consumed by one transformation. Deserializable so option
/// documents can be parsed through [`crate::config`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Convert property keys to camelCase; type names are always PascalCase.
    pub camel_case: bool,
    /// Lowercased raw data type → declared type name.
    pub type_mapping: HashMap<String, String>,
    pub overrides: Overrides,
    /// Local identifier name → module specifier, optionally suffixed
    /// `#OriginalExportedName`.
    pub custom_imports: HashMap<String, String>,
}

/// User-supplied resolutions that bypass automatic type mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Keyed by `"table.column"`.
    pub columns: HashMap<String, ColumnOverride>,
}

/// An explicit type for one column: either a declaration node used verbatim
/// or a raw type-expression string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColumnOverride {
    Node(TypeExpression),
    Raw(String),
}

/// Per-invocation accumulating state: the import registry and which global
/// alias definitions have been used.
#[derive(Default)]
struct TransformState {
    imports: ImportRegistry,
    used_definitions: Vec<&'static str>,
}

/// Transforms database metadata into declaration statements for one adapter
/// and option set.
pub struct Transformer<'a> {
    adapter: &'a dyn Adapter,
    options: &'a TransformOptions,
}

impl<'a> Transformer<'a> {
    pub fn new(adapter: &'a dyn Adapter, options: &'a TransformOptions) -> Self {
        Self { adapter, options }
    }

    /// Produces the ordered declaration sequence: merged imports, the
    /// generated-wrapper alias (only if some column used it), one exported
    /// interface per table sorted by generated type name, and the trailing
    /// aggregate interface.
    pub fn transform(&self, metadata: &DatabaseMetadata) -> Vec<Statement> {
        let mut state = TransformState::default();

        let mut tables: Vec<&TableMetadata> = metadata.tables.iter().collect();
        // Output order follows the generated type name, not the raw table
        // name or input order.
        tables.sort_by_key(|table| pascal_case(&table.name));

        let interfaces: Vec<Statement> = tables
            .iter()
            .map(|table| self.transform_table(table, &mut state))
            .collect();

        let aggregate_properties = tables
            .iter()
            .map(|table| {
                Property::new(
                    self.property_key(&table.name),
                    TypeExpression::table_identifier(pascal_case(&table.name)),
                )
            })
            .collect();
        let aggregate = Statement::Export(ExportStatement::new(Declaration::Interface(
            InterfaceDeclaration::new(
                TypeExpression::identifier(DATABASE_INTERFACE),
                ObjectExpression::new(aggregate_properties),
            ),
        )));

        tracing::debug!(
            tables = tables.len(),
            "transformed database metadata into declarations"
        );

        let mut output = state.imports.into_statements();
        for name in &state.used_definitions {
            if let Some(definition) = GLOBAL_DEFINITIONS.get(name) {
                output.push(Statement::Export(ExportStatement::new(Declaration::Alias(
                    definition.alias.clone(),
                ))));
            }
        }
        output.extend(interfaces);
        output.push(aggregate);
        output
    }

    fn transform_table(&self, table: &TableMetadata, state: &mut TransformState) -> Statement {
        let properties = table
            .columns
            .iter()
            .map(|column| {
                Property::new(
                    self.property_key(&column.name),
                    self.column_type(table, column, state),
                )
            })
            .collect();

        Statement::Export(ExportStatement::new(Declaration::Interface(
            InterfaceDeclaration::new(
                TypeExpression::table_identifier(pascal_case(&table.name)),
                ObjectExpression::new(properties),
            ),
        )))
    }

    /// Resolves the type expression for one column. First match wins:
    /// column override, extracted enum values, explicit type mapping,
    /// dialect scalar, dialect default. Overrides are used verbatim; all
    /// other resolutions get the array/nullable/generated wrapping.
    fn column_type(
        &self,
        table: &TableMetadata,
        column: &ColumnMetadata,
        state: &mut TransformState,
    ) -> TypeExpression {
        let override_key = format!("{}.{}", table.name, column.name);
        if let Some(column_override) = self.options.overrides.columns.get(&override_key) {
            return match column_override {
                ColumnOverride::Node(node) => {
                    self.collect_symbols(node, state);
                    node.clone()
                }
                ColumnOverride::Raw(text) => TypeExpression::raw(text.clone()),
            };
        }

        let data_type = column.data_type.to_lowercase();
        let base = if let Some(values) = &column.enum_values {
            TypeExpression::union_of(
                values
                    .iter()
                    .map(|value| TypeExpression::literal(value.clone()))
                    .collect(),
            )
        } else if let Some(mapped) = self.options.type_mapping.get(&data_type) {
            // The root segment of a qualified name is what a custom import
            // would have to supply, e.g. `Temporal` for `Temporal.Instant`.
            let root = mapped.split('.').next().unwrap_or(mapped);
            self.resolve_symbol(root, state);
            TypeExpression::identifier(mapped.clone())
        } else if let Some(scalar) = self.adapter.scalar_type(&data_type) {
            self.collect_symbols(&scalar, state);
            scalar
        } else {
            tracing::debug!(
                data_type = %column.data_type,
                column = %column.name,
                "unrecognized data type, using dialect default scalar"
            );
            self.adapter.default_scalar()
        };

        let mut node = base;
        if column.is_array {
            node = TypeExpression::Array(Box::new(node));
        }
        if column.is_nullable {
            node = match node {
                TypeExpression::Union(mut alternatives) => {
                    alternatives.push(TypeExpression::identifier("null"));
                    TypeExpression::Union(alternatives)
                }
                other => TypeExpression::Union(vec![other, TypeExpression::identifier("null")]),
            };
        }
        if column.has_default_value || column.is_auto_incrementing {
            // A JSON column wrapper already declares its write sides and is
            // never re-wrapped.
            node = match node {
                json @ TypeExpression::JsonColumnType(_) => json,
                other => {
                    self.resolve_symbol(GENERATED_WRAPPER, state);
                    TypeExpression::generic(GENERATED_WRAPPER, vec![other])
                }
            };
        }
        node
    }

    fn property_key(&self, name: &str) -> String {
        if self.options.camel_case {
            camel_case(name)
        } else {
            name.to_string()
        }
    }

    /// Walks an emitted expression and registers every import it requires.
    /// Raw expressions are opaque and never scanned.
    fn collect_symbols(&self, node: &TypeExpression, state: &mut TransformState) {
        match node {
            TypeExpression::Identifier(identifier) => {
                self.resolve_symbol(&identifier.name, state);
            }
            TypeExpression::Generic(generic) => {
                self.resolve_symbol(&generic.name, state);
                for arg in &generic.args {
                    self.collect_symbols(arg, state);
                }
            }
            TypeExpression::Object(object) => {
                for property in &object.properties {
                    self.collect_symbols(&property.value, state);
                }
            }
            TypeExpression::JsonColumnType(_) => {
                self.resolve_symbol("JSONColumnType", state);
            }
            TypeExpression::Array(inner) => self.collect_symbols(inner, state),
            TypeExpression::Union(alternatives) => {
                for alternative in alternatives {
                    self.collect_symbols(alternative, state);
                }
            }
            TypeExpression::TableIdentifier(_)
            | TypeExpression::Raw(_)
            | TypeExpression::Literal(_) => {}
        }
    }

    /// Resolves one identifier name to whatever supplies it: a global alias
    /// definition, a custom import, or the type library. Plain scalar names
    /// (`string`, `number`, `null`, ...) resolve to nothing.
    fn resolve_symbol(&self, name: &str, state: &mut TransformState) {
        if let Some((key, definition)) = GLOBAL_DEFINITIONS.get_key_value(name) {
            if !state.used_definitions.contains(key) {
                state.used_definitions.push(*key);
            }
            for reference in &definition.references {
                if is_library_symbol(reference) {
                    state.imports.add(TYPE_LIBRARY_MODULE, reference, reference);
                }
            }
            return;
        }

        if let Some(raw_spec) = self.options.custom_imports.get(name) {
            state.imports.add_spec(name, &ImportSpec::parse(raw_spec));
            return;
        }

        if is_library_symbol(name) {
            state.imports.add(TYPE_LIBRARY_MODULE, name, name);
        }
    }
}

/// Transforms `metadata` into the ordered declaration sequence using
/// `adapter` for scalar resolution and `options` for everything else.
pub fn transform(
    metadata: &DatabaseMetadata,
    adapter: &dyn Adapter,
    options: &TransformOptions,
) -> Vec<Statement> {
    Transformer::new(adapter, options).transform(metadata)
}
