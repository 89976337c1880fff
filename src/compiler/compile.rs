//! Predicate compilation

use crate::dictionary::{Dictionary, TableDef};
use crate::entity::{EntityKind, EntityMatch};
use crate::executor::DataStoreAdapter;
use crate::plan::FilterPredicate;

/// Compile filter entities into predicates for `primary` and its joins
///
/// Only the first temporal entity is compiled even if several were
/// extracted; later ones are noted in a diagnostic rather than conjoined.
pub fn compile_filters(
    entities: &[EntityMatch],
    primary: &str,
    joins: &[String],
    dict: &Dictionary,
    store: &dyn DataStoreAdapter,
) -> (Vec<FilterPredicate>, Vec<String>) {
    let mut predicates = Vec::new();
    let mut diagnostics = Vec::new();
    let Some(primary_def) = dict.get_table(primary) else {
        diagnostics.push(format!(
            "unknown table '{}'; dropping all filters",
            primary
        ));
        return (predicates, diagnostics);
    };

    let mut temporal_done = false;

    for entity in entities {
        match &entity.kind {
            EntityKind::NumericFilter { op, value } => {
                match &primary_def.fields.numeric {
                    Some(field) => predicates.push(FilterPredicate::Numeric {
                        table: primary.to_string(),
                        field: field.clone(),
                        op: *op,
                        value: *value,
                    }),
                    None => diagnostics.push(format!(
                        "table '{}' has no numeric column; dropping filter '{}'",
                        primary, entity.text
                    )),
                }
            }
            EntityKind::StatusFilter { value } => match &primary_def.fields.status {
                Some(field) => predicates.push(FilterPredicate::Status {
                    table: primary.to_string(),
                    field: field.clone(),
                    value: value.clone(),
                }),
                None => diagnostics.push(format!(
                    "table '{}' has no status column; dropping filter '{}'",
                    primary, entity.text
                )),
            },
            EntityKind::LocationFilter { value } => {
                match locate_field(primary_def, joins, dict, |t| t.fields.location.as_deref()) {
                    Some((table, field)) => predicates.push(FilterPredicate::Location {
                        table: table.to_string(),
                        field: field.to_string(),
                        value: value.clone(),
                    }),
                    None => diagnostics.push(format!(
                        "no location column on '{}' or its joins; dropping filter '{}'",
                        primary, entity.text
                    )),
                }
            }
            EntityKind::Temporal { value } => {
                if temporal_done {
                    diagnostics.push(format!(
                        "ignoring additional temporal phrase '{}'",
                        entity.text
                    ));
                    continue;
                }
                temporal_done = true;
                match locate_field(primary_def, joins, dict, |t| t.fields.created.as_deref()) {
                    Some((table, field)) => predicates.push(FilterPredicate::Temporal {
                        table: table.to_string(),
                        field: field.to_string(),
                        value: value.clone(),
                    }),
                    None => diagnostics.push(format!(
                        "no creation-date column on '{}' or its joins; dropping filter '{}'",
                        primary, entity.text
                    )),
                }
            }
            EntityKind::Pronoun { user } => {
                let scoped = locate_field(primary_def, joins, dict, |t| t.fields.user.as_deref());
                let Some((table, field)) = scoped else {
                    diagnostics.push(format!(
                        "table '{}' has no user column; dropping scope filter '{}'",
                        primary, entity.text
                    ));
                    continue;
                };
                match store.find_user_by_name(user) {
                    Some(user_id) => predicates.push(FilterPredicate::UserScope {
                        table: table.to_string(),
                        field: field.to_string(),
                        user_id,
                    }),
                    None => diagnostics.push(format!(
                        "user '{}' not found; dropping scope filter",
                        user
                    )),
                }
            }
            EntityKind::Table { .. } | EntityKind::Info { .. } => {}
        }
    }

    (predicates, diagnostics)
}

/// Find the table and column a filter category compiles against: the
/// primary's own column when present, otherwise the first joined table
/// that has one
fn locate_field<'a>(
    primary: &'a TableDef,
    joins: &[String],
    dict: &'a Dictionary,
    field: impl Fn(&'a TableDef) -> Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    if let Some(own) = field(primary) {
        return Some((primary.name.as_str(), own));
    }
    joins
        .iter()
        .filter_map(|j| dict.get_table(j))
        .find_map(|t| field(t).map(|f| (t.name.as_str(), f)))
}
