//! Table definitions

use serde::Deserialize;

/// Column names a table exposes for each filter category
///
/// All fields are optional; a missing field means predicates of that
/// category cannot be satisfied on this table and are either routed to a
/// joined table or dropped with a diagnostic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldMap {
    /// Default column for numeric comparisons (amount, quantity, price)
    pub numeric: Option<String>,
    /// Status column
    pub status: Option<String>,
    /// Location column
    pub location: Option<String>,
    /// User-scope column (e.g. assigned_to)
    pub user: Option<String>,
    /// Creation-timestamp column for temporal predicates
    pub created: Option<String>,
}

/// A business table the query language can refer to
#[derive(Debug, Deserialize)]
pub struct TableDef {
    pub name: String,
    /// Lexical synonyms that resolve to this table ("orders" → sales)
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Foreign tables reachable from this table, in join order
    #[serde(default)]
    pub joins: Vec<String>,
    /// Filter-category column map
    #[serde(default)]
    pub fields: FieldMap,
}

impl TableDef {
    /// Check whether a folded word names this table or one of its synonyms
    pub fn matches_word(&self, word: &str) -> bool {
        self.name == word || self.synonyms.iter().any(|s| s == word)
    }

    /// All lexical keys for this table (name first, then synonyms)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(|s| s.as_str()))
    }

    /// Check whether this table's join list includes `other`
    pub fn joins_to(&self, other: &str) -> bool {
        self.joins.iter().any(|j| j == other)
    }
}
