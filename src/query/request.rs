use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::EntityMatch;
use crate::executor::Row;
use crate::plan::QueryPlan;

/// A free-text query request
///
/// `now` is an injectable clock so temporal phrases resolve
/// deterministically; when absent, the wall clock is used.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QueryInput {
    pub text: String,
    /// Display name of the requesting user, for pronoun resolution
    #[serde(default)]
    pub user: Option<String>,
    /// Reference instant for temporal phrases
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

impl QueryInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: None,
            now: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// The calendar day temporal phrases anchor to
    pub fn today(&self) -> NaiveDate {
        self.now.unwrap_or_else(Utc::now).date_naive()
    }
}

/// The analysis produced for a request: tagged entities plus the compiled
/// plan. The presentation layer consumes `entities` for span highlighting;
/// the executor adapter consumes `plan`.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub entities: Vec<EntityMatch>,
    pub plan: QueryPlan,
}

/// Analysis plus the rows the adapter returned for it
#[derive(Debug, Serialize)]
pub struct QueryResult {
    pub analysis: Analysis,
    pub rows: Vec<Row>,
}
