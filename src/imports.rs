//! Import accumulation
//!
//! While the transformer walks a schema it records every module import the
//! emitted types require. The registry deduplicates and merges them into one
//! import statement per module, preserving the order in which imports were
//! first requested during traversal.

use serde::{Deserialize, Serialize};

use crate::ast::{ImportClause, ImportStatement, Statement};

/// A user-declared import source: `"module"` for a plain named import, or
/// `"module#ExportedName"` when the exported name differs from the local
/// name used in generated types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    pub module: String,
    /// The exported name, when it differs from the local one.
    pub exported: Option<String>,
}

impl ImportSpec {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('#') {
            Some((module, exported)) => Self {
                module: module.to_string(),
                exported: Some(exported.to_string()),
            },
            None => Self {
                module: raw.to_string(),
                exported: None,
            },
        }
    }
}

/// Collects the imports one transformation needs, in first-request order.
#[derive(Debug, Default)]
pub struct ImportRegistry {
    modules: Vec<(String, Vec<ImportClause>)>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `local` as imported from `module`, exported there as
    /// `exported`. The clause is aliased only when the two names differ;
    /// repeated requests for the same clause are dropped.
    pub fn add(&mut self, module: &str, exported: &str, local: &str) {
        let alias = if exported == local {
            None
        } else {
            Some(local.to_string())
        };
        let clause = ImportClause::new(exported, alias);

        match self.modules.iter_mut().find(|(name, _)| name == module) {
            Some((_, clauses)) => {
                if !clauses.contains(&clause) {
                    clauses.push(clause);
                }
            }
            None => self.modules.push((module.to_string(), vec![clause])),
        }
    }

    /// Registers a local name through its parsed import spec.
    pub fn add_spec(&mut self, local: &str, spec: &ImportSpec) {
        let exported = spec.exported.as_deref().unwrap_or(local);
        self.add(&spec.module, exported, local);
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Produces the merged import statements, one per module.
    pub fn into_statements(self) -> Vec<Statement> {
        self.modules
            .into_iter()
            .map(|(module, clauses)| Statement::Import(ImportStatement::new(module, clauses)))
            .collect()
    }
}
