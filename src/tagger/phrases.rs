//! Multi-word info phrase pass
//!
//! Longest literal phrase match over dictionary term keys and synonyms that
//! span at least two tokens. Single-word terms are left to the fallback
//! pass so filter-shaped phrases keep their priority over them.

use super::claims::ClaimSet;
use super::fallback::MAX_SUGGESTIONS;
use super::lexer::Token;
use crate::dictionary::{Dictionary, TermEntry};
use crate::entity::{EntityKind, EntityMatch};

pub(super) fn pass(
    text: &str,
    tokens: &[Token],
    claims: &mut ClaimSet,
    dict: &Dictionary,
    entities: &mut Vec<EntityMatch>,
) {
    // Multi-word keys only, longest first
    let mut keys: Vec<(Vec<&str>, &TermEntry)> = dict
        .terms
        .iter()
        .flat_map(|entry| {
            std::iter::once(entry.key.as_str())
                .chain(entry.synonyms.iter().map(|s| s.as_str()))
                .map(move |k| (k.split_whitespace().collect::<Vec<_>>(), entry))
        })
        .filter(|(words, _)| words.len() >= 2)
        .collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut i = 0;
    while i < tokens.len() {
        let hit = keys.iter().find(|(words, _)| {
            let n = words.len();
            i + n <= tokens.len()
                && tokens[i..i + n]
                    .iter()
                    .zip(words)
                    .all(|(t, w)| t.lower == *w && claims.is_free(t.start, t.end))
        });
        match hit {
            Some((words, entry)) => {
                let n = words.len();
                let (start, end) = (tokens[i].start, tokens[i + n - 1].end);
                claims.claim(start, end);
                entities.push(
                    EntityMatch::new(
                        &text[start..end],
                        start,
                        end,
                        EntityKind::Info {
                            table: entry.table.clone(),
                            suggestions: entry
                                .suggestions
                                .iter()
                                .take(MAX_SUGGESTIONS)
                                .cloned()
                                .collect(),
                        },
                    )
                    .with_confidence(0.9),
                );
                i += n;
            }
            None => i += 1,
        }
    }
}
