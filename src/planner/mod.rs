//! Query planner (verb module)
//!
//! Selects one primary table and an ordered join set from the tagged
//! entities. All planning issues are soft: unsatisfiable requirements are
//! dropped with a diagnostic rather than failing the request.

mod join;
mod table;

pub use join::infer_joins;
pub use table::select_primary;
