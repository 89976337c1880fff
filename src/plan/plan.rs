//! Plan and predicate types

use serde::Serialize;

use crate::entity::{CompareOp, TemporalValue};

/// A typed predicate scoped to the primary table or one of its joins
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterPredicate {
    /// Numeric comparison on a table's default numeric column
    Numeric {
        table: String,
        field: String,
        op: CompareOp,
        value: i64,
    },
    /// Equality against a status column
    Status {
        table: String,
        field: String,
        value: String,
    },
    /// Equality/contains against a location column
    Location {
        table: String,
        field: String,
        value: String,
    },
    /// Single-day equality or half-open range on a creation-timestamp column
    Temporal {
        table: String,
        field: String,
        value: TemporalValue,
    },
    /// Scope to the resolved user's records
    UserScope {
        table: String,
        field: String,
        user_id: String,
    },
}

impl FilterPredicate {
    /// The table this predicate is scoped to
    pub fn table(&self) -> &str {
        match self {
            FilterPredicate::Numeric { table, .. }
            | FilterPredicate::Status { table, .. }
            | FilterPredicate::Location { table, .. }
            | FilterPredicate::Temporal { table, .. }
            | FilterPredicate::UserScope { table, .. } => table,
        }
    }
}

/// The compiled description of a retrieval
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPlan {
    /// The main table the plan targets
    pub primary_table: String,
    /// Foreign tables to join, ordered and deduplicated
    pub joins: Vec<String>,
    /// Typed predicates
    pub predicates: Vec<FilterPredicate>,
    /// Soft-failure notes accumulated during planning and compilation
    pub diagnostics: Vec<String>,
    /// Row cap for the executor
    pub row_limit: u32,
}
