//! Data store adapter boundary
//!
//! The core never touches storage. It emits a finished [`QueryPlan`]; an
//! adapter executes it against whatever backend is configured and returns
//! rows or an error. Adapters also resolve display names to user ids and
//! can describe their tables to callers. The core defines no retry or
//! backoff policy at this layer.

use std::fmt;

use serde::Serialize;

use crate::plan::QueryPlan;

/// A result row, as loosely-typed JSON fields
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Schema description an adapter can surface for a table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub searchable_fields: Vec<String>,
    pub numeric_fields: Vec<String>,
    pub foreign_keys: Vec<String>,
}

/// Errors an adapter can report for a plan execution
///
/// Executor failures are terminal for the request; the core performs no
/// internal retry.
#[derive(Debug)]
pub enum ExecuteError {
    /// The backend rejected or failed the query
    Backend(String),
    /// The plan targets a table the backend does not have
    UnknownTable(String),
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteError::Backend(reason) => write!(f, "Query execution failed: {}", reason),
            ExecuteError::UnknownTable(table) => {
                write!(f, "Unknown table '{}'", table)
            }
        }
    }
}

impl std::error::Error for ExecuteError {}

/// The storage collaborator contract
///
/// Everything is a read-only lookup; abandoned requests may safely run to
/// completion.
pub trait DataStoreAdapter {
    /// Execute a compiled plan
    fn execute(&self, plan: &QueryPlan) -> Result<Vec<Row>, ExecuteError>;

    /// Resolve a display name to a user identifier
    fn find_user_by_name(&self, name: &str) -> Option<String>;

    /// Describe a table's queryable surface
    fn describe_table(&self, name: &str) -> Option<TableInfo>;
}
