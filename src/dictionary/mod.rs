//! Term dictionary (noun module)
//!
//! The dictionary is explicit, read-only configuration: business tables with
//! their synonyms, join lists and field maps, plus the fuzzy business terms,
//! status/location keyword lists and stop words the tagger consults. It is
//! loaded once at startup and passed by reference into every stage — no
//! module-level singletons, so tests can swap in alternate dictionaries.

mod schema;
mod table;
mod term;

pub use schema::Dictionary;
pub use table::{FieldMap, TableDef};
pub use term::TermEntry;
