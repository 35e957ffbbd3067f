//! Search: filter presentation and search-target resolution

pub mod filters;
pub mod resolver;

use serde::{Deserialize, Serialize};

pub use filters::{Filter, FilterList, FilterPresenter, SelectFilter};
pub use resolver::{Resolution, ResolutionOutcome, SearchTargetResolver};

/// What the caller asked for: text, filter keys, or neither
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilterSelection {
    #[serde(default)]
    pub query: String,
    /// Selected keys in probe priority order
    #[serde(default)]
    pub selected_keys: Vec<String>,
}

impl SearchFilterSelection {
    #[must_use]
    pub fn new(query: impl Into<String>, selected_keys: Vec<String>) -> Self {
        Self {
            query: query.into(),
            selected_keys,
        }
    }

    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    #[must_use]
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(String::new(), keys.into_iter().map(Into::into).collect())
    }

    /// Query plus the non-empty selections of `filters`
    #[must_use]
    pub fn from_filters(query: impl Into<String>, filters: &FilterList) -> Self {
        Self::new(query, filters.selected_keys())
    }
}
