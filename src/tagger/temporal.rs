//! Temporal extraction pass
//!
//! Runs first: temporal phrases share words with other categories ("week"),
//! so they must claim their spans before anything else looks at them.
//! Explicit keywords resolve to absolute dates; ("this"|"last") +
//! ("week"|"month"|"year") resolve to half-open ranges anchored to the
//! injected clock.

use chrono::{Datelike, Duration, NaiveDate};

use super::claims::ClaimSet;
use super::lexer::Token;
use crate::entity::{EntityKind, EntityMatch, TemporalValue};

pub(super) fn pass(
    text: &str,
    tokens: &[Token],
    claims: &mut ClaimSet,
    today: NaiveDate,
    entities: &mut Vec<EntityMatch>,
) {
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if !claims.is_free(token.start, token.end) {
            i += 1;
            continue;
        }

        // Two-token relative range: "this week", "last month", ...
        if let (Some(next), true) = (
            tokens.get(i + 1),
            matches!(token.lower.as_str(), "this" | "last"),
        ) {
            if claims.is_free(next.start, next.end) {
                if let Some(range) = relative_range(&token.lower, &next.lower, today) {
                    claims.claim(token.start, next.end);
                    entities.push(EntityMatch::new(
                        &text[token.start..next.end],
                        token.start,
                        next.end,
                        EntityKind::Temporal { value: range },
                    ));
                    i += 2;
                    continue;
                }
            }
        }

        // Single-token absolute day
        let day = match token.lower.as_str() {
            "today" => Some(today),
            "yesterday" => Some(today - Duration::days(1)),
            _ => None,
        };
        if let Some(date) = day {
            claims.claim(token.start, token.end);
            entities.push(EntityMatch::new(
                token.original(text),
                token.start,
                token.end,
                EntityKind::Temporal {
                    value: TemporalValue::Day(date),
                },
            ));
        }
        i += 1;
    }
}

/// Resolve ("this"|"last") + unit to a half-open `[from, to)` range
fn relative_range(qualifier: &str, unit: &str, today: NaiveDate) -> Option<TemporalValue> {
    let (from, to) = match unit {
        "week" => {
            let start = week_start(today);
            match qualifier {
                "this" => (start, start + Duration::days(7)),
                _ => (start - Duration::days(7), start),
            }
        }
        "month" => {
            let start = month_start(today);
            match qualifier {
                "this" => (start, next_month(start)),
                _ => (month_start(start - Duration::days(1)), start),
            }
        }
        "year" => {
            let start = year_start(today.year());
            match qualifier {
                "this" => (start, year_start(today.year() + 1)),
                _ => (year_start(today.year() - 1), start),
            }
        }
        _ => return None,
    };
    Some(TemporalValue::Range { from, to })
}

/// Monday of the ISO week containing `d`
fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

fn month_start(d: NaiveDate) -> NaiveDate {
    // Day 1 always exists
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

fn next_month(start: NaiveDate) -> NaiveDate {
    let (y, m) = if start.month() == 12 {
        (start.year() + 1, 1)
    } else {
        (start.year(), start.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
}
