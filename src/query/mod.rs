//! Query request and response types (noun module)

mod request;

pub use request::{Analysis, QueryInput, QueryResult};
