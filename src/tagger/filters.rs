//! Filter-shaped phrase pass
//!
//! Numeric comparator expressions, status keywords and location keywords.
//! Comparators are parsed from the token stream with a two-to-three token
//! grammar instead of index arithmetic on a folded string. Prepositions
//! never become entities even though they often precede a location.

use super::claims::ClaimSet;
use super::lexer::Token;
use crate::dictionary::Dictionary;
use crate::entity::{CompareOp, EntityKind, EntityMatch};

/// Prepositions that must not be tagged as locations
const LOCATION_EXCLUDE: &[&str] = &["in", "at", "near", "from", "to"];

/// How many tokens past the operator the integer operand may sit
const OPERAND_WINDOW: usize = 2;

pub(super) fn pass(
    text: &str,
    tokens: &[Token],
    claims: &mut ClaimSet,
    dict: &Dictionary,
    entities: &mut Vec<EntityMatch>,
) {
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if !claims.is_free(token.start, token.end) {
            i += 1;
            continue;
        }

        if let Some((span_end, op, value)) = match_comparator(tokens, i, claims) {
            let (start, end) = (token.start, tokens[span_end - 1].end);
            claims.claim(start, end);
            entities.push(
                EntityMatch::new(
                    &text[start..end],
                    start,
                    end,
                    EntityKind::NumericFilter { op, value },
                )
                .with_confidence(0.9),
            );
            i = span_end;
            continue;
        }

        if dict.is_status(&token.lower) {
            claims.claim(token.start, token.end);
            entities.push(
                EntityMatch::new(
                    token.original(text),
                    token.start,
                    token.end,
                    EntityKind::StatusFilter {
                        value: token.lower.clone(),
                    },
                )
                .with_confidence(0.9),
            );
        } else if dict.is_location(&token.lower) && !LOCATION_EXCLUDE.contains(&token.lower.as_str())
        {
            claims.claim(token.start, token.end);
            entities.push(
                EntityMatch::new(
                    token.original(text),
                    token.start,
                    token.end,
                    EntityKind::LocationFilter {
                        value: token.lower.clone(),
                    },
                )
                .with_confidence(0.9),
            );
        }
        i += 1;
    }
}

/// Match a comparator at token `i`: a one- or two-token operator followed by
/// an integer, with at most one intervening token. Returns (one past the
/// integer token, operator, operand).
fn match_comparator(
    tokens: &[Token],
    i: usize,
    claims: &ClaimSet,
) -> Option<(usize, CompareOp, i64)> {
    let (op_len, op) = match_operator(tokens, i)?;
    let operand_from = i + op_len;
    for j in operand_from..(operand_from + OPERAND_WINDOW).min(tokens.len()) {
        let token = &tokens[j];
        // The claim will cover operator through integer; every byte of it
        // must still be free
        if !claims.is_free(tokens[i].start, token.end) {
            return None;
        }
        if let Some(value) = token.as_integer() {
            return Some((j + 1, op, value));
        }
    }
    None
}

fn match_operator(tokens: &[Token], i: usize) -> Option<(usize, CompareOp)> {
    let first = tokens.get(i)?;
    match first.lower.as_str() {
        "below" | "under" => return Some((1, CompareOp::Less)),
        "above" | "over" => return Some((1, CompareOp::Greater)),
        _ => {}
    }
    let second = tokens.get(i + 1)?;
    if second.lower != "than" {
        return None;
    }
    match first.lower.as_str() {
        "less" | "lower" => Some((2, CompareOp::Less)),
        "greater" | "more" => Some((2, CompareOp::Greater)),
        _ => None,
    }
}
