//! Business term entries

use serde::Deserialize;

/// A fuzzy business term: a lexical key with an optional home table and the
/// suggestion phrases offered when the key (or something containing it)
/// shows up in a query
#[derive(Debug, Deserialize)]
pub struct TermEntry {
    /// Canonical key, lowercase; may span multiple words ("payment method")
    pub key: String,
    /// Home table this term belongs to, if any
    pub table: Option<String>,
    /// Lexical synonyms that resolve to this entry
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Ranked human-readable variants offered for disambiguation
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl TermEntry {
    /// Check whether a folded key names this entry exactly (key or synonym)
    pub fn matches_key(&self, key: &str) -> bool {
        self.key == key || self.synonyms.iter().any(|s| s == key)
    }

    /// Check whether `key` partially contains this entry's canonical key or
    /// vice versa, excluding identity
    pub fn partially_matches(&self, key: &str) -> bool {
        self.key != key && (self.key.contains(key) || key.contains(&self.key))
    }
}
