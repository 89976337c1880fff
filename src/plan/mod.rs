//! Query plan types (noun module)
//!
//! A [`QueryPlan`] is the finished description of a retrieval: one primary
//! table, an ordered join set, and typed predicates. The core hands it to a
//! [`crate::executor::DataStoreAdapter`]; it is never persisted.

mod plan;

pub use plan::{FilterPredicate, QueryPlan};
