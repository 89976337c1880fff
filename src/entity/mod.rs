//! Tagged entity types (noun module)
//!
//! An [`EntityMatch`] is a non-overlapping span of the input text with a
//! resolved, typed value. The tagger guarantees that accepted spans never
//! intersect and that every span slices the original input exactly.

use chrono::NaiveDate;
use serde::Serialize;

/// Comparison operator for numeric filter entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    /// `<`
    Less,
    /// `>`
    Greater,
}

/// A resolved temporal value
///
/// `Day` restricts to a single calendar day; `Range` is half-open
/// `[from, to)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TemporalValue {
    Day(NaiveDate),
    Range { from: NaiveDate, to: NaiveDate },
}

/// The closed set of entity categories
///
/// The original string-typed tags become a tagged union so the planner and
/// filter compiler match exhaustively; the resolved value lives in the
/// variant payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntityKind {
    /// A business table referenced by name or synonym
    Table { table: String },
    /// A self-reference resolved to the current user's display name
    Pronoun { user: String },
    /// A date or date range anchored to the injected clock
    Temporal { value: TemporalValue },
    /// A numeric comparison ("below 5", "more than 100")
    NumericFilter { op: CompareOp, value: i64 },
    /// A status keyword ("pending", "closed")
    StatusFilter { value: String },
    /// A location keyword ("paris")
    LocationFilter { value: String },
    /// A generic business term, optionally mapped to a home table and
    /// carrying fuzzy suggestions for disambiguation
    Info {
        table: Option<String>,
        suggestions: Vec<String>,
    },
}

/// A tagged span of the input text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityMatch {
    /// The matched slice of the original input (original case)
    pub text: String,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// Resolved category and value
    #[serde(flatten)]
    pub kind: EntityKind,
    /// Heuristic confidence in `[0, 1]`
    pub confidence: f32,
}

impl EntityMatch {
    pub fn new(text: impl Into<String>, start: usize, end: usize, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
            confidence: 1.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// True for the filter-shaped categories (numeric, status, location)
    pub fn is_filter(&self) -> bool {
        matches!(
            self.kind,
            EntityKind::NumericFilter { .. }
                | EntityKind::StatusFilter { .. }
                | EntityKind::LocationFilter { .. }
        )
    }

    /// The home table this entity points at, if any
    pub fn table(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Table { table } => Some(table),
            EntityKind::Info { table, .. } => table.as_deref(),
            _ => None,
        }
    }
}
