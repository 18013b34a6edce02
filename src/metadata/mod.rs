//! Schema metadata model
//!
//! Immutable description of an introspected database: tables, columns, and
//! dialect-level enum types. The introspection layer populates these before
//! handing them to the transformer; the transformer never mutates them, and
//! every enrichment step produces new copies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fully introspected database: its tables plus any dialect-level enums.
///
/// Table order as received is not semantically significant; the transformer
/// determines output order independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseMetadata {
    pub tables: Vec<TableMetadata>,
    #[serde(default)]
    pub enums: EnumCollection,
}

impl DatabaseMetadata {
    pub fn new(tables: Vec<TableMetadata>, enums: EnumCollection) -> Self {
        Self { tables, enums }
    }
}

/// One introspected table or view. Column order is preserved verbatim from
/// introspection through to the emitted interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub is_view: bool,
    #[serde(default)]
    pub is_partition: bool,
    pub columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnMetadata>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            is_view: false,
            is_partition: false,
            columns,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// One introspected column.
///
/// `data_type` is the raw dialect type string as reported by the catalog
/// (e.g. `TEXT`, `varchar(50)`); interpretation is left to the type mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type_schema: Option<String>,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_auto_incrementing: bool,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub has_default_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Permitted literal values extracted from a CHECK ... IN (...) constraint.
    /// These are attached per column and never registered in [`EnumCollection`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            data_type_schema: None,
            is_array: false,
            is_auto_incrementing: false,
            is_nullable: false,
            has_default_value: false,
            comment: None,
            enum_values: None,
        }
    }

    pub fn with_default_value(mut self) -> Self {
        self.has_default_value = true;
        self
    }

    pub fn auto_incrementing(mut self) -> Self {
        self.is_auto_incrementing = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_values = Some(values);
        self
    }
}

/// Named, dialect-level enum types keyed by `schema.name`.
///
/// Distinct from per-column CHECK-derived `enum_values`: these are database
/// objects in their own right (e.g. Postgres `CREATE TYPE ... AS ENUM`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumCollection {
    enums: BTreeMap<String, Vec<String>>,
}

impl EnumCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, schema: &str, name: &str, values: Vec<String>) {
        self.enums.insert(Self::key(schema, name), values);
    }

    pub fn get(&self, schema: &str, name: &str) -> Option<&[String]> {
        self.enums.get(&Self::key(schema, name)).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    fn key(schema: &str, name: &str) -> String {
        format!("{}.{}", schema.to_lowercase(), name.to_lowercase())
    }
}
