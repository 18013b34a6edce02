//! Introspection-side enrichment
//!
//! The live catalog queries themselves live outside this crate; what belongs
//! here is the step that takes a table's raw definition text and folds the
//! extracted CHECK-constraint enum values into fresh column metadata before
//! the transformer sees it.

pub mod check_constraints;

pub use check_constraints::parse_check_constraints;

use crate::metadata::TableMetadata;

/// Returns a copy of `table` whose columns carry the enum values extracted
/// from `ddl`, the table's raw CREATE TABLE text as stored by the catalog.
///
/// Columns whose lowercased name has no extracted values are carried over
/// unchanged; the input table is never mutated.
pub fn apply_check_constraints(table: &TableMetadata, ddl: &str) -> TableMetadata {
    let check_enums = parse_check_constraints(ddl);
    if check_enums.is_empty() {
        return table.clone();
    }

    let columns = table
        .columns
        .iter()
        .map(|column| match check_enums.get(&column.name.to_lowercase()) {
            Some(values) => column.clone().with_enum_values(values.clone()),
            None => column.clone(),
        })
        .collect();

    TableMetadata {
        columns,
        ..table.clone()
    }
}
