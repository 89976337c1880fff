//! Integration tests for entity tagging
//!
//! Covers the span invariants, pass priority, and the exclusion rules.

mod common;

use common::{analyze_text, assert_spans_valid, fixed_today, load_fixture};
use chrono::Duration;
use termplan::{tag_entities, CompareOp, EntityKind, TemporalValue};

#[test]
fn test_spans_never_overlap_and_slice_exactly() {
    for text in [
        "laptop stock in paris below 5",
        "my tasks pending this week",
        "show me sales for vip customers today",
        "delivery status for orders more than 200",
    ] {
        let analysis = analyze_text(text).expect("analysis should succeed");
        assert_spans_valid(text, &analysis);
    }
}

#[test]
fn test_show_me_never_tags_me() {
    let analysis = analyze_text("show me pending tasks").unwrap();
    assert!(!analysis
        .entities
        .iter()
        .any(|e| matches!(e.kind, EntityKind::Pronoun { .. })));
}

#[test]
fn test_preposition_in_never_becomes_entity() {
    let analysis = analyze_text("customers in london").unwrap();
    assert!(!analysis.entities.iter().any(|e| e.text == "in"));
    assert!(analysis
        .entities
        .iter()
        .any(|e| matches!(&e.kind, EntityKind::LocationFilter { value } if value == "london")));
}

#[test]
fn test_temporal_beats_other_categories_for_shared_words() {
    let dict = load_fixture("business.yaml");
    let entities = tag_entities("sales this week", &dict, Some("Ahmed"), fixed_today());
    // Friday 2025-03-14: the ISO week is [Mon 03-10, Mon 03-17)
    let monday = fixed_today() - Duration::days(4);
    assert!(entities.iter().any(|e| e.kind
        == EntityKind::Temporal {
            value: TemporalValue::Range {
                from: monday,
                to: monday + Duration::days(7),
            }
        }));
}

#[test]
fn test_numeric_comparator_variants() {
    for (text, op, value) in [
        ("stock below 10", CompareOp::Less, 10),
        ("stock under 10", CompareOp::Less, 10),
        ("sales less than 200", CompareOp::Less, 200),
        ("sales lower than 200", CompareOp::Less, 200),
        ("stock above 3", CompareOp::Greater, 3),
        ("stock over 3", CompareOp::Greater, 3),
        ("sales greater than 50", CompareOp::Greater, 50),
        ("sales more than 50", CompareOp::Greater, 50),
    ] {
        let analysis = analyze_text(text).unwrap();
        assert!(
            analysis
                .entities
                .iter()
                .any(|e| e.kind == EntityKind::NumericFilter { op, value }),
            "no NumericFilter for '{}'",
            text
        );
    }
}

#[test]
fn test_case_folding_does_not_disturb_spans() {
    let text = "LAPTOP Stock In PARIS Below 5";
    let analysis = analyze_text(text).unwrap();
    assert_spans_valid(text, &analysis);
    // Matching is case-insensitive; the entity text keeps the original case
    assert!(analysis
        .entities
        .iter()
        .any(|e| e.text == "PARIS"
            && matches!(&e.kind, EntityKind::LocationFilter { value } if value == "paris")));
}

#[test]
fn test_identical_input_yields_identical_entities() {
    let a = analyze_text("my sales in london this month below 100").unwrap();
    let b = analyze_text("my sales in london this month below 100").unwrap();
    assert_eq!(a.entities, b.entities);
}

#[test]
fn test_multi_word_phrase_beats_single_word_at_same_token() {
    let analysis = analyze_text("payment method for orders").unwrap();
    let phrase = analysis
        .entities
        .iter()
        .find(|e| e.text == "payment method")
        .expect("phrase should be tagged as one entity");
    assert!(matches!(&phrase.kind, EntityKind::Info { table: Some(t), .. } if t == "sales"));
}
