//! Join inference
//!
//! Builds the join set from a static per-primary-table foreign-table map:
//! every entity that resolves to a different table, and every filter the
//! primary's field map cannot satisfy directly, pulls the relevant foreign
//! table in. Unsatisfiable references are not fatal — they are dropped with
//! a diagnostic.

use crate::dictionary::{Dictionary, TableDef};
use crate::entity::{EntityKind, EntityMatch};

/// Infer the ordered join set for `primary`
///
/// Returns the joins (deduplicated, ordered by the primary's configured
/// join list) and any diagnostics for dropped references.
pub fn infer_joins(
    entities: &[EntityMatch],
    primary: &str,
    dict: &Dictionary,
) -> (Vec<String>, Vec<String>) {
    let mut diagnostics = Vec::new();
    let Some(primary_def) = dict.get_table(primary) else {
        diagnostics.push(format!("unknown primary table '{}'", primary));
        return (Vec::new(), diagnostics);
    };

    let mut needed: Vec<&str> = Vec::new();

    for entity in entities {
        match &entity.kind {
            EntityKind::Table { table } | EntityKind::Info { table: Some(table), .. } => {
                if table.as_str() != primary {
                    if primary_def.joins_to(table) {
                        push_unique(&mut needed, table);
                    } else {
                        diagnostics.push(format!(
                            "no join path from '{}' to '{}'; dropping implied reference '{}'",
                            primary, table, entity.text
                        ));
                    }
                }
            }
            EntityKind::LocationFilter { .. } => {
                if primary_def.fields.location.is_none() {
                    if let Some(join) = joined_with(primary_def, dict, |t| t.fields.location.is_some())
                    {
                        push_unique(&mut needed, join);
                    }
                }
            }
            EntityKind::Pronoun { .. } => {
                if primary_def.fields.user.is_none() {
                    if let Some(join) = joined_with(primary_def, dict, |t| t.fields.user.is_some()) {
                        push_unique(&mut needed, join);
                    }
                }
            }
            EntityKind::Temporal { .. } => {
                if primary_def.fields.created.is_none() {
                    if let Some(join) =
                        joined_with(primary_def, dict, |t| t.fields.created.is_some())
                    {
                        push_unique(&mut needed, join);
                    }
                }
            }
            _ => {}
        }
    }

    // Fixed order: the primary's join-list order, not first-seen
    let joins = primary_def
        .joins
        .iter()
        .filter(|j| needed.contains(&j.as_str()))
        .cloned()
        .collect();
    (joins, diagnostics)
}

/// First table in the primary's join list satisfying `pred`
fn joined_with<'a>(
    primary: &'a TableDef,
    dict: &'a Dictionary,
    pred: impl Fn(&TableDef) -> bool,
) -> Option<&'a str> {
    primary
        .joins
        .iter()
        .filter_map(|j| dict.get_table(j))
        .find(|t| pred(t))
        .map(|t| t.name.as_str())
}

fn push_unique<'a>(list: &mut Vec<&'a str>, item: &'a str) {
    if !list.contains(&item) {
        list.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_entities;
    use chrono::NaiveDate;

    fn load_dict() -> Dictionary {
        Dictionary::from_file("test_data/business.yaml").unwrap()
    }

    fn infer(text: &str, primary: &str) -> (Vec<String>, Vec<String>) {
        let dict = load_dict();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entities = tag_entities(text, &dict, Some("Ahmed"), today);
        infer_joins(&entities, primary, &dict)
    }

    #[test]
    fn test_info_entity_pulls_in_foreign_table() {
        let (joins, diagnostics) = infer("laptop stock in paris below 5", "stock");
        assert_eq!(joins, vec!["products"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_join_order_follows_configured_map() {
        // Entities mention products before customers; sales' map orders
        // customers first
        let (joins, _) = infer("laptop sales for vip", "sales");
        assert_eq!(joins, vec!["customers", "products"]);
    }

    #[test]
    fn test_unrelated_table_dropped_with_diagnostic() {
        let (joins, diagnostics) = infer("shifts for customers", "customers");
        assert!(joins.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("no join path"));
    }

    #[test]
    fn test_satisfiable_location_needs_no_join() {
        let (joins, _) = infer("customers in london", "customers");
        assert!(joins.is_empty());
    }

    #[test]
    fn test_pronoun_on_primary_with_user_column_needs_no_join() {
        let (joins, _) = infer("my tasks", "tasks");
        assert!(joins.is_empty());
    }
}
