//! End-to-end analysis pipeline (verb module)
//!
//! `analyze` is the main entry point: it classifies the tagged entities and
//! routes to planning or to a clarification outcome. Data flows strictly
//! forward — text → entities → table + joins → predicates — and every
//! planning-level issue is soft (best-effort plan plus diagnostics); only
//! executor failures are hard.

mod error;

pub use error::{AnalyzeError, QueryError};

use tracing::debug;

use crate::compiler::compile_filters;
use crate::dictionary::Dictionary;
use crate::entity::{EntityKind, EntityMatch};
use crate::executor::DataStoreAdapter;
use crate::plan::QueryPlan;
use crate::planner::{infer_joins, select_primary};
use crate::query::{Analysis, QueryInput, QueryResult};
use crate::resolver;
use crate::tagger::{tag_entities, tokenize};

/// Analyze a request: tag entities and synthesize a query plan
///
/// Zero entities and all-ambiguous queries return an [`AnalyzeError`]
/// carrying fuzzy suggestions instead of a silent empty plan.
pub fn analyze(
    input: &QueryInput,
    dict: &Dictionary,
    store: &dyn DataStoreAdapter,
) -> Result<Analysis, AnalyzeError> {
    let entities = tag_entities(&input.text, dict, input.user.as_deref(), input.today());

    if entities.is_empty() {
        return Err(AnalyzeError::NoEntityFound {
            suggestions: token_suggestions(&input.text, dict),
        });
    }

    if let Some(candidates) = ambiguous_tables(&entities, dict) {
        return Err(AnalyzeError::AmbiguousTable {
            suggestions: info_suggestions(&entities),
            candidates,
        });
    }

    let primary = select_primary(&entities, dict);
    let (joins, mut diagnostics) = infer_joins(&entities, &primary, dict);
    let (predicates, filter_diagnostics) =
        compile_filters(&entities, &primary, &joins, dict, store);
    diagnostics.extend(filter_diagnostics);

    debug!(
        primary = %primary,
        joins = joins.len(),
        predicates = predicates.len(),
        "synthesized plan"
    );

    Ok(Analysis {
        entities,
        plan: QueryPlan {
            primary_table: primary,
            joins,
            predicates,
            diagnostics,
            row_limit: dict.row_limit,
        },
    })
}

/// Analyze and execute in one call
///
/// The adapter call is the only suspension point of a request; its failure
/// is terminal — the core performs no retry.
pub fn run_query(
    input: &QueryInput,
    dict: &Dictionary,
    store: &dyn DataStoreAdapter,
) -> Result<QueryResult, QueryError> {
    let analysis = analyze(input, dict, store)?;
    let rows = store.execute(&analysis.plan)?;
    Ok(QueryResult { analysis, rows })
}

/// Detect queries made only of generic info terms whose plausible tables
/// don't settle on a single target
///
/// Any stronger signal — a Table entity, a pronoun, any filter or temporal
/// phrase — disambiguates, and planning proceeds normally. Candidates are
/// ranked home tables first, then tables that join onto them, in
/// dictionary order.
fn ambiguous_tables(entities: &[EntityMatch], dict: &Dictionary) -> Option<Vec<String>> {
    let only_info = entities
        .iter()
        .all(|e| matches!(e.kind, EntityKind::Info { .. }));
    if !only_info {
        return None;
    }

    let mut candidates: Vec<String> = Vec::new();
    let homes: Vec<&str> = entities.iter().filter_map(|e| e.table()).collect();
    for home in &homes {
        if !candidates.iter().any(|c| c == home) {
            candidates.push(home.to_string());
        }
    }
    for home in &homes {
        for reachable in dict.reverse_joins(home) {
            if !candidates.iter().any(|c| c == reachable) {
                candidates.push(reachable.to_string());
            }
        }
    }

    (candidates.len() >= 2).then_some(candidates)
}

/// Fuzzy suggestions for a query that produced no entities at all
fn token_suggestions(text: &str, dict: &Dictionary) -> Vec<String> {
    let mut suggestions = Vec::new();
    for token in tokenize(text) {
        for s in resolver::resolve(&token.lower, dict).suggestions {
            if !suggestions.contains(&s) {
                suggestions.push(s);
            }
        }
    }
    suggestions
}

/// Suggestions already attached to the tagged info entities
fn info_suggestions(entities: &[EntityMatch]) -> Vec<String> {
    let mut out = Vec::new();
    for entity in entities {
        if let EntityKind::Info { suggestions, .. } = &entity.kind {
            for s in suggestions {
                if !out.contains(s) {
                    out.push(s.clone());
                }
            }
        }
    }
    out
}
