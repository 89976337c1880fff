//! termplan - Tag business terms in free text and plan data queries
//!
//! This library provides:
//! - Dictionary definition types (tables, synonyms, business terms, keyword lists)
//! - Dictionary parsing from YAML
//! - Entity tagging (ordered extraction passes, non-overlapping spans)
//! - Fuzzy term resolution (exact and partial-containment suggestions)
//! - Query planning (primary table selection, join inference)
//! - Filter compilation (typed predicates per table field map)
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `dictionary/` - term dictionary configuration (Dictionary, TableDef, TermEntry)
//! - `entity/` - tagged spans (EntityMatch, EntityKind)
//! - `query/` - request/response types (QueryInput, Analysis, QueryResult)
//! - `plan/` - plan types (QueryPlan, FilterPredicate)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → Dictionary
//! - `tagger/` - text → entities
//! - `resolver/` - token → canonical term + suggestions
//! - `planner/` - entities → primary table + joins
//! - `compiler/` - entities → predicates
//! - `pipeline/` - request → Analysis (or clarification outcome)
//! - `executor/` - the DataStoreAdapter boundary
//!
//! # Example
//!
//! ```ignore
//! use termplan::{analyze, parser, QueryInput};
//!
//! let dict = parser::parse_file("dictionary.yaml")?;
//! let input = QueryInput::new("laptop stock in paris below 5").with_user("Ahmed");
//! let analysis = analyze(&input, &dict, &store)?;
//! assert_eq!(analysis.plan.primary_table, "stock");
//! ```

pub mod compiler;
pub mod dictionary;
pub mod entity;
pub mod error;
pub mod executor;
pub mod parser;
pub mod pipeline;
pub mod plan;
pub mod planner;
pub mod query;
pub mod resolver;
pub mod tagger;

// Re-export commonly used types
pub use compiler::compile_filters;
pub use dictionary::{Dictionary, FieldMap, TableDef, TermEntry};
pub use entity::{CompareOp, EntityKind, EntityMatch, TemporalValue};
pub use error::ParseError;
pub use executor::{DataStoreAdapter, ExecuteError, Row, TableInfo};
pub use pipeline::{analyze, run_query, AnalyzeError, QueryError};
pub use plan::{FilterPredicate, QueryPlan};
pub use planner::{infer_joins, select_primary};
pub use query::{Analysis, QueryInput, QueryResult};
pub use resolver::{resolve, Resolution};
pub use tagger::tag_entities;
