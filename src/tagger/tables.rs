//! Table extraction pass
//!
//! Word-boundary match against table names and synonym lists. Matching is
//! token-aligned and tries longer synonyms first, so a two-word synonym
//! beats a one-word prefix of it starting at the same token.

use super::claims::ClaimSet;
use super::lexer::Token;
use crate::dictionary::Dictionary;
use crate::entity::{EntityKind, EntityMatch};

pub(super) fn pass(
    text: &str,
    tokens: &[Token],
    claims: &mut ClaimSet,
    dict: &Dictionary,
    entities: &mut Vec<EntityMatch>,
) {
    // (key words, table name), longest key first for the lookahead tie-break
    let mut keys: Vec<(Vec<&str>, &str)> = dict
        .tables
        .iter()
        .flat_map(|t| {
            t.keys()
                .map(move |k| (k.split_whitespace().collect(), t.name.as_str()))
        })
        .collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut i = 0;
    while i < tokens.len() {
        match match_at(tokens, i, claims, &keys) {
            Some((span_end, table)) => {
                let (start, end) = (tokens[i].start, tokens[span_end - 1].end);
                claims.claim(start, end);
                entities.push(EntityMatch::new(
                    &text[start..end],
                    start,
                    end,
                    EntityKind::Table {
                        table: table.to_string(),
                    },
                ));
                i = span_end;
            }
            None => i += 1,
        }
    }
}

/// Try each key at token position `i`; returns (one past the last matched
/// token, table name) for the longest hit whose span is entirely unclaimed
fn match_at<'a>(
    tokens: &[Token],
    i: usize,
    claims: &ClaimSet,
    keys: &[(Vec<&str>, &'a str)],
) -> Option<(usize, &'a str)> {
    for (words, table) in keys {
        let n = words.len();
        if i + n > tokens.len() {
            continue;
        }
        let window = &tokens[i..i + n];
        if window
            .iter()
            .zip(words)
            .all(|(t, w)| t.lower == *w && claims.is_free(t.start, t.end))
        {
            return Some((i + n, *table));
        }
    }
    None
}
