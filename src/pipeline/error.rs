use std::fmt;

use crate::executor::ExecuteError;

/// Planning-level outcomes that need the caller to come back with more
///
/// Both variants carry the disambiguating material captured by the fuzzy
/// resolver so the caller never sees a silent empty plan.
#[derive(Debug)]
pub enum AnalyzeError {
    /// No recognizable terms in the query
    NoEntityFound { suggestions: Vec<String> },
    /// The info terms map to two or more plausible tables and no Table
    /// entity disambiguates; `candidates` is ranked best-first
    AmbiguousTable {
        candidates: Vec<String>,
        suggestions: Vec<String>,
    },
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::NoEntityFound { .. } => {
                write!(f, "No recognizable terms found; try a more specific query")
            }
            AnalyzeError::AmbiguousTable { candidates, .. } => {
                write!(
                    f,
                    "Query could refer to several tables: {}",
                    candidates.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}

/// Errors for the full analyze-and-execute path
#[derive(Debug)]
pub enum QueryError {
    Analyze(AnalyzeError),
    Execute(ExecuteError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Analyze(e) => write!(f, "{}", e),
            QueryError::Execute(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Analyze(e) => Some(e),
            QueryError::Execute(e) => Some(e),
        }
    }
}

impl From<AnalyzeError> for QueryError {
    fn from(err: AnalyzeError) -> Self {
        QueryError::Analyze(err)
    }
}

impl From<ExecuteError> for QueryError {
    fn from(err: ExecuteError) -> Self {
        QueryError::Execute(err)
    }
}
