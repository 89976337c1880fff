//! Dictionary parser (verb module)
//!
//! Transforms YAML files into dictionary types.

use std::path::Path;

use crate::dictionary::Dictionary;
use crate::error::ParseError;

/// Parse and validate a dictionary from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse and validate a dictionary from a YAML string
pub fn parse_str(yaml: &str) -> Result<Dictionary, ParseError> {
    let dict: Dictionary = serde_yaml::from_str(yaml)?;
    dict.validate()?;
    Ok(dict)
}
