//! Entity tagger (verb module)
//!
//! Runs ordered extraction passes over the input text and produces a
//! non-overlapping list of typed spans. Pass priority is fixed: temporal
//! phrases go first because they share words with other categories, and the
//! generic fallback goes last. Each pass skips bytes an earlier pass
//! claimed, which is what guarantees the non-overlap invariant.

mod claims;
mod fallback;
mod filters;
mod lexer;
mod phrases;
mod pronoun;
mod tables;
mod temporal;

use chrono::NaiveDate;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::entity::EntityMatch;
use claims::ClaimSet;

pub use lexer::{tokenize, Token};

/// Tag all entities in `text`
///
/// `user` is the requesting user's display name for pronoun resolution;
/// `today` anchors temporal phrases. Zero entities is not an error — the
/// pipeline turns it into a clarification response.
pub fn tag_entities(
    text: &str,
    dict: &Dictionary,
    user: Option<&str>,
    today: NaiveDate,
) -> Vec<EntityMatch> {
    let tokens = tokenize(text);
    let mut claims = ClaimSet::new(text.len());
    let mut entities = Vec::new();

    temporal::pass(text, &tokens, &mut claims, today, &mut entities);
    pronoun::pass(text, &tokens, &mut claims, user, &mut entities);
    tables::pass(text, &tokens, &mut claims, dict, &mut entities);
    phrases::pass(text, &tokens, &mut claims, dict, &mut entities);
    filters::pass(text, &tokens, &mut claims, dict, &mut entities);
    fallback::pass(text, &tokens, &mut claims, dict, &mut entities);

    entities.sort_by_key(|e| e.start);
    debug!(count = entities.len(), "tagged entities");
    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{CompareOp, EntityKind};

    fn load_dict() -> Dictionary {
        Dictionary::from_file("test_data/business.yaml").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn tag(text: &str) -> Vec<EntityMatch> {
        tag_entities(text, &load_dict(), Some("Ahmed"), today())
    }

    fn assert_spans_valid(text: &str, entities: &[EntityMatch]) {
        for e in entities {
            assert!(e.start < e.end && e.end <= text.len());
            assert_eq!(&text[e.start..e.end], e.text);
        }
        for pair in entities.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "overlapping spans: {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_full_query_all_passes() {
        let text = "laptop stock in paris below 5";
        let entities = tag(text);
        assert_spans_valid(text, &entities);

        assert!(entities
            .iter()
            .any(|e| matches!(&e.kind, EntityKind::Table { table } if table == "stock")));
        assert!(entities.iter().any(|e| matches!(
            e.kind,
            EntityKind::NumericFilter { op: CompareOp::Less, value: 5 }
        )));
        assert!(entities
            .iter()
            .any(|e| matches!(&e.kind, EntityKind::LocationFilter { value } if value == "paris")));
        assert!(entities
            .iter()
            .any(|e| matches!(&e.kind, EntityKind::Info { table: Some(t), .. } if t == "products")));
        // "in" never produces an entity
        assert!(!entities.iter().any(|e| e.text == "in"));
    }

    #[test]
    fn test_temporal_claims_week_before_fallback() {
        let text = "tasks this week";
        let entities = tag(text);
        assert_spans_valid(text, &entities);
        assert_eq!(entities.len(), 2);
        assert!(matches!(entities[0].kind, EntityKind::Table { .. }));
        assert!(matches!(entities[1].kind, EntityKind::Temporal { .. }));
    }

    #[test]
    fn test_show_me_exclusion_end_to_end() {
        let text = "show me pending tasks";
        let entities = tag(text);
        assert_spans_valid(text, &entities);
        assert!(!entities
            .iter()
            .any(|e| matches!(e.kind, EntityKind::Pronoun { .. })));
    }

    #[test]
    fn test_determinism() {
        let text = "my sales in london this month below 100";
        let a = tag(text);
        let b = tag(text);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_yields_no_entities() {
        assert!(tag("").is_empty());
        assert!(tag("   ").is_empty());
    }

    #[test]
    fn test_output_sorted_by_start() {
        let entities = tag("pending tasks for me today");
        let starts: Vec<usize> = entities.iter().map(|e| e.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }
}
