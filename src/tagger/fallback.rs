//! Fallback single-word pass
//!
//! Any remaining alphabetic token of length ≥ 3 that is not a stop word
//! becomes a generic Info entity. Dictionary hits (exact or partial
//! containment in either direction) attach the entry's home table and a
//! bounded number of fuzzy suggestions.

use super::claims::ClaimSet;
use super::lexer::Token;
use crate::dictionary::Dictionary;
use crate::entity::{EntityKind, EntityMatch};
use crate::resolver;

/// Upper bound on suggestions attached to a single entity
pub(super) const MAX_SUGGESTIONS: usize = 5;

const MIN_WORD_LEN: usize = 3;

pub(super) fn pass(
    text: &str,
    tokens: &[Token],
    claims: &mut ClaimSet,
    dict: &Dictionary,
    entities: &mut Vec<EntityMatch>,
) {
    for token in tokens {
        if !claims.is_free(token.start, token.end) {
            continue;
        }
        if !token.is_alphabetic() || token.lower.chars().count() < MIN_WORD_LEN {
            continue;
        }
        if dict.is_stop_word(&token.lower) {
            continue;
        }

        let resolution = resolver::resolve(&token.lower, dict);
        let table = resolver::home_tables(&token.lower, dict).first().map(|t| t.to_string());
        let confidence = if resolution.matched() { 0.8 } else { 0.6 };

        claims.claim(token.start, token.end);
        entities.push(
            EntityMatch::new(
                token.original(text),
                token.start,
                token.end,
                EntityKind::Info {
                    table,
                    suggestions: resolution
                        .suggestions
                        .into_iter()
                        .take(MAX_SUGGESTIONS)
                        .collect(),
                },
            )
            .with_confidence(confidence),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::lexer::tokenize;

    fn run(text: &str) -> Vec<EntityMatch> {
        let dict = Dictionary::from_file("test_data/business.yaml").unwrap();
        let tokens = tokenize(text);
        let mut claims = ClaimSet::new(text.len());
        let mut entities = Vec::new();
        pass(text, &tokens, &mut claims, &dict, &mut entities);
        entities
    }

    #[test]
    fn test_dictionary_term_gets_home_table_and_suggestions() {
        let entities = run("mouse");
        assert_eq!(entities.len(), 1);
        match &entities[0].kind {
            EntityKind::Info { table, suggestions } => {
                assert_eq!(table.as_deref(), Some("products"));
                assert!(!suggestions.is_empty());
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
            }
            other => panic!("Expected Info entity, got: {:?}", other),
        }
        assert_eq!(entities[0].confidence, 0.8);
    }

    #[test]
    fn test_unknown_word_still_becomes_info() {
        let entities = run("gizmo");
        assert_eq!(entities.len(), 1);
        match &entities[0].kind {
            EntityKind::Info { table, suggestions } => {
                assert!(table.is_none());
                assert!(suggestions.is_empty());
            }
            other => panic!("Expected Info entity, got: {:?}", other),
        }
        assert_eq!(entities[0].confidence, 0.6);
    }

    #[test]
    fn test_short_and_stop_words_skipped() {
        assert!(run("of the ab").is_empty());
    }

    #[test]
    fn test_numbers_skipped() {
        assert!(run("42").is_empty());
    }
}
