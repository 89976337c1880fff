//! Root dictionary definition

use std::path::Path;

use serde::Deserialize;

use super::table::TableDef;
use super::term::TermEntry;
use crate::error::ParseError;

fn default_row_limit() -> u32 {
    50
}

fn default_table() -> String {
    "products".to_string()
}

/// The root term dictionary
///
/// Built once at process start and immutable thereafter; it holds no
/// resources, so unsynchronized concurrent reads are safe.
#[derive(Debug, Deserialize)]
pub struct Dictionary {
    /// Business tables with synonyms, join lists and field maps
    pub tables: Vec<TableDef>,
    /// Fuzzy business terms
    #[serde(default)]
    pub terms: Vec<TermEntry>,
    /// Status keywords ("pending", "closed")
    #[serde(default)]
    pub statuses: Vec<String>,
    /// Location keywords ("paris", "london")
    #[serde(default)]
    pub locations: Vec<String>,
    /// Words the fallback pass never tags
    #[serde(rename = "stopWords", default)]
    pub stop_words: Vec<String>,
    /// Primary-table precedence when several Table entities compete
    #[serde(default)]
    pub precedence: Vec<String>,
    /// Table selected when no rule produces one
    #[serde(rename = "defaultTable", default = "default_table")]
    pub default_table: String,
    /// Row cap stamped onto every plan
    #[serde(rename = "rowLimit", default = "default_row_limit")]
    pub row_limit: u32,
}

impl Dictionary {
    /// Load a dictionary from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
            path: path_str,
            source: e,
        })?;
        let dict: Dictionary = serde_yaml::from_str(&contents)?;
        dict.validate()?;
        Ok(dict)
    }

    /// Check referential integrity: join lists, term home tables, precedence
    /// and the default table must all name defined tables
    pub fn validate(&self) -> Result<(), ParseError> {
        for table in &self.tables {
            for join in &table.joins {
                if self.get_table(join).is_none() {
                    return Err(ParseError::Invalid(format!(
                        "table '{}' joins to undefined table '{}'",
                        table.name, join
                    )));
                }
            }
        }
        for term in &self.terms {
            if let Some(home) = &term.table {
                if self.get_table(home).is_none() {
                    return Err(ParseError::Invalid(format!(
                        "term '{}' names undefined table '{}'",
                        term.key, home
                    )));
                }
            }
        }
        for name in &self.precedence {
            if self.get_table(name).is_none() {
                return Err(ParseError::Invalid(format!(
                    "precedence names undefined table '{}'",
                    name
                )));
            }
        }
        if self.get_table(&self.default_table).is_none() {
            return Err(ParseError::Invalid(format!(
                "default table '{}' is not defined",
                self.default_table
            )));
        }
        Ok(())
    }

    /// Get a table by name
    pub fn get_table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Get the table a folded word names, via table name or synonym
    pub fn table_for_word(&self, word: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.matches_word(word))
    }

    /// Get a term entry by exact key or synonym
    pub fn get_term(&self, key: &str) -> Option<&TermEntry> {
        self.terms.iter().find(|t| t.matches_key(key))
    }

    /// Tables whose join lists include `name`, in definition order
    pub fn reverse_joins(&self, name: &str) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|t| t.joins_to(name))
            .map(|t| t.name.as_str())
            .collect()
    }

    pub fn is_status(&self, word: &str) -> bool {
        self.statuses.iter().any(|s| s == word)
    }

    pub fn is_location(&self, word: &str) -> bool {
        self.locations.iter().any(|l| l == word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }
}
