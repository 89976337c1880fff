//! Pronoun extraction pass
//!
//! Self-references resolve to the current user's display name. The pass is
//! skipped when no user is in context: there is nothing to resolve against,
//! and the compiler's soft-drop policy covers downstream lookup failures.

use super::claims::ClaimSet;
use super::lexer::Token;
use crate::entity::{EntityKind, EntityMatch};

const PRONOUNS: &[&str] = &["my", "me", "mine", "myself", "i"];

/// How far back to look for "show" before an occurrence of "me"
const SHOW_LOOKBACK: usize = 2;

pub(super) fn pass(
    text: &str,
    tokens: &[Token],
    claims: &mut ClaimSet,
    user: Option<&str>,
    entities: &mut Vec<EntityMatch>,
) {
    let Some(user) = user else {
        return;
    };

    for (i, token) in tokens.iter().enumerate() {
        if !claims.is_free(token.start, token.end) {
            continue;
        }
        if !PRONOUNS.contains(&token.lower.as_str()) {
            continue;
        }
        // "show me X" is a request phrasing, not a reference to the user
        if token.lower == "me" && preceded_by_show(tokens, i) {
            continue;
        }
        claims.claim(token.start, token.end);
        entities.push(EntityMatch::new(
            token.original(text),
            token.start,
            token.end,
            EntityKind::Pronoun {
                user: user.to_string(),
            },
        ));
    }
}

fn preceded_by_show(tokens: &[Token], i: usize) -> bool {
    tokens[i.saturating_sub(SHOW_LOOKBACK)..i]
        .iter()
        .any(|t| t.lower == "show")
}
