//! Filter compiler (verb module)
//!
//! Turns the remaining entities into typed predicates scoped to the
//! primary or joined tables, using each table's field map. Every issue is
//! soft: an unsatisfiable filter is dropped with a diagnostic and planning
//! continues.

mod compile;

pub use compile::compile_filters;
