//! Primary-table selection
//!
//! A deterministic, ordered rule list; the first matching rule wins:
//! explicit Table entities beat composition heuristics, and the
//! configurable precedence list settles ties between several Table
//! entities — "ahmed tasks" means the tasks table, not customers.

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::entity::{EntityKind, EntityMatch};

/// Select the primary table for a set of tagged entities
pub fn select_primary(entities: &[EntityMatch], dict: &Dictionary) -> String {
    let primary = explicit_table(entities, dict)
        .or_else(|| composed_table(entities))
        .unwrap_or_else(|| dict.default_table.clone());
    debug!(table = %primary, "selected primary table");
    primary
}

/// Rule 1: explicit Table entities, precedence-ordered when several compete
fn explicit_table(entities: &[EntityMatch], dict: &Dictionary) -> Option<String> {
    let tables: Vec<&str> = entities
        .iter()
        .filter_map(|e| match &e.kind {
            EntityKind::Table { table } => Some(table.as_str()),
            _ => None,
        })
        .collect();

    match tables.as_slice() {
        [] => None,
        [only] => Some(only.to_string()),
        several => dict
            .precedence
            .iter()
            .find(|p| several.contains(&p.as_str()))
            .cloned()
            .or_else(|| Some(several[0].to_string())),
    }
}

/// Rule 2: infer from entity composition
///
/// The heuristics encode business knowledge about the well-known tables;
/// with a dictionary that lacks one of them the corresponding rule simply
/// never fires.
fn composed_table(entities: &[EntityMatch]) -> Option<String> {
    let has_pronoun = entities
        .iter()
        .any(|e| matches!(e.kind, EntityKind::Pronoun { .. }));
    let has_numeric = entities
        .iter()
        .any(|e| matches!(e.kind, EntityKind::NumericFilter { .. }));
    let customer_like = entities
        .iter()
        .any(|e| info_home(e) == Some("customers"));
    let product_like = entities
        .iter()
        .any(|e| info_home(e) == Some("products"));

    if customer_like && product_like {
        Some("sales".to_string())
    } else if has_pronoun {
        Some("tasks".to_string())
    } else if product_like && has_numeric {
        Some("stock".to_string())
    } else if customer_like {
        Some("customers".to_string())
    } else if product_like {
        Some("products".to_string())
    } else {
        None
    }
}

fn info_home(entity: &EntityMatch) -> Option<&str> {
    match &entity.kind {
        EntityKind::Info { table, .. } => table.as_deref(),
        _ => None,
    }
}
