//! Filter presenter: cache contents to caller-facing select filters

use serde::{Deserialize, Serialize};

use crate::categories::CategoryEntry;
use crate::config::{FilterStyle, SiteConfig};
use crate::utils::{CATEGORIES_UNAVAILABLE, TAG_BUCKET};

pub const CATEGORY_FILTER_NAME: &str = "Category";
pub const TAG_FILTER_NAME: &str = "Tag";
pub const QUERY_EXCLUSIVE_HEADER: &str = "Search text and filters are mutually exclusive";
pub const SINGLE_FILTER_HEADER: &str = "Combining a category with a tag is not supported";

/// Single-choice filter over category entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectFilter {
    pub name: String,
    pub options: Vec<CategoryEntry>,
    /// Index of the selected option
    pub state: usize,
}

impl SelectFilter {
    #[must_use]
    pub fn new(name: impl Into<String>, options: Vec<CategoryEntry>) -> Self {
        Self {
            name: name.into(),
            options,
            state: 0,
        }
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CategoryEntry> {
        self.options.get(self.state)
    }

    /// Key of the selected option; empty when nothing or "All" is selected
    #[must_use]
    pub fn to_uri_part(&self) -> &str {
        self.selected().map_or("", |o| o.key.as_str())
    }

    /// Select the option carrying `key`. Returns false if there is none.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.options.iter().position(|o| o.key == key) {
            Some(index) => {
                self.state = index;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// Non-interactive explanatory line
    Header { text: String },
    Select(SelectFilter),
}

/// Ordered filters offered to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterList {
    pub filters: Vec<Filter>,
}

impl FilterList {
    /// The single placeholder shown when no categories are known
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            filters: vec![Filter::Header {
                text: CATEGORIES_UNAVAILABLE.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.select_filters().next().is_none()
    }

    pub fn select_filters(&self) -> impl Iterator<Item = &SelectFilter> {
        self.filters.iter().filter_map(|f| match f {
            Filter::Select(select) => Some(select),
            Filter::Header { .. } => None,
        })
    }

    pub fn select_filters_mut(&mut self) -> impl Iterator<Item = &mut SelectFilter> {
        self.filters.iter_mut().filter_map(|f| match f {
            Filter::Select(select) => Some(select),
            Filter::Header { .. } => None,
        })
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SelectFilter> {
        self.select_filters().find(|s| s.name == name)
    }

    /// Select `key` in whichever filter offers it
    pub fn select_key(&mut self, key: &str) -> bool {
        self.select_filters_mut().any(|select| select.select_key(key))
    }

    /// Non-empty keys of every select filter, in filter order
    #[must_use]
    pub fn selected_keys(&self) -> Vec<String> {
        self.select_filters()
            .map(SelectFilter::to_uri_part)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPresenter {
    use_tags: bool,
    style: FilterStyle,
}

impl FilterPresenter {
    #[must_use]
    pub fn new(use_tags: bool, style: FilterStyle) -> Self {
        Self { use_tags, style }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.use_tags(), config.filter_style())
    }

    /// Partition entries into category and tag groups, first key wins.
    ///
    /// Entries with an empty key stay with the categories. When no entry has
    /// a key, the list degrades to the "unavailable" placeholder.
    #[must_use]
    pub fn present(&self, entries: &[CategoryEntry]) -> FilterList {
        let mut categories: Vec<CategoryEntry> = Vec::new();
        let mut tags: Vec<CategoryEntry> = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for entry in entries {
            if !seen.insert(entry.key.as_str()) {
                continue;
            }
            if entry.is_in_bucket(TAG_BUCKET) {
                if self.use_tags {
                    tags.push(entry.clone());
                }
            } else {
                categories.push(entry.clone());
            }
        }

        let has_keys = categories.iter().chain(&tags).any(|e| !e.key.is_empty());
        if !has_keys {
            return FilterList::unavailable();
        }

        let mut filters = Vec::new();
        if self.style == FilterStyle::Annotated {
            filters.push(Filter::Header {
                text: QUERY_EXCLUSIVE_HEADER.to_string(),
            });
            filters.push(Filter::Header {
                text: SINGLE_FILTER_HEADER.to_string(),
            });
            if !tags.is_empty() {
                tags.insert(0, CategoryEntry::all());
            }
        }
        if !categories.is_empty() {
            filters.push(Filter::Select(SelectFilter::new(CATEGORY_FILTER_NAME, categories)));
        }
        if !tags.is_empty() {
            filters.push(Filter::Select(SelectFilter::new(TAG_FILTER_NAME, tags)));
        }

        FilterList { filters }
    }
}
