//! Fuzzy term resolution
//!
//! Two lookup strategies combine: exact key (or synonym) match returns that
//! entry's suggestions verbatim; partial containment — the key is a
//! substring of an entry's canonical name or vice versa, identity excluded —
//! contributes those entries' suggestions too. Results are deduplicated
//! with first-seen order preserved.

use crate::dictionary::Dictionary;

/// The outcome of resolving a single token
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The matched entry's canonical key, or the folded input when nothing
    /// matched
    pub canonical: String,
    /// Ranked, deduplicated suggestion phrases
    pub suggestions: Vec<String>,
}

impl Resolution {
    /// True if any dictionary entry matched
    pub fn matched(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

/// Resolve a token against the dictionary's term entries
pub fn resolve(key: &str, dict: &Dictionary) -> Resolution {
    let folded = key.to_lowercase();
    let mut canonical: Option<String> = None;
    let mut suggestions: Vec<String> = Vec::new();

    if let Some(entry) = dict.get_term(&folded) {
        canonical = Some(entry.key.clone());
        extend_deduped(&mut suggestions, &entry.suggestions);
    }

    for entry in dict.terms.iter().filter(|e| e.partially_matches(&folded)) {
        if canonical.is_none() {
            canonical = Some(entry.key.clone());
        }
        extend_deduped(&mut suggestions, &entry.suggestions);
    }

    Resolution {
        canonical: canonical.unwrap_or(folded),
        suggestions,
    }
}

/// Home tables of every entry the key resolves to, first-seen order
pub fn home_tables<'a>(key: &str, dict: &'a Dictionary) -> Vec<&'a str> {
    let folded = key.to_lowercase();
    let mut tables: Vec<&str> = Vec::new();

    let exact = dict.get_term(&folded);
    let partial = dict.terms.iter().filter(|e| e.partially_matches(&folded));
    for entry in exact.into_iter().chain(partial) {
        if let Some(table) = entry.table.as_deref() {
            if !tables.contains(&table) {
                tables.push(table);
            }
        }
    }
    tables
}

fn extend_deduped(out: &mut Vec<String>, additions: &[String]) {
    for s in additions {
        if !out.contains(s) {
            out.push(s.clone());
        }
    }
}
