//! Fuzzy term resolver (verb module)
//!
//! Resolves a token to its canonical dictionary entry plus ranked,
//! deduplicated suggestion phrases.

mod resolve;

pub use resolve::{home_tables, resolve, Resolution};
