//! Category discovery
//!
//! Leaf-first: `classifier` turns hrefs into keys, `parser` turns a page into
//! entries, `cache` owns the discovered list for the adapter's lifetime.

pub mod best_effort;
pub mod cache;
pub mod classifier;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::utils::ALL_LABEL;

pub use best_effort::best_effort;
pub use cache::{CacheState, CategoryCache};
pub use classifier::PathClassifier;
pub use parser::{CategoryParser, parse_selector};

/// A browsable category or tag.
///
/// `key` is empty for "no filter" or a path such as `category/romance`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub label: String,
    pub key: String,
}

impl CategoryEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }

    /// The leading "no filter" sentinel
    #[must_use]
    pub fn all() -> Self {
        Self::new(ALL_LABEL, "")
    }

    /// First segment of the key, if the key has one
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.key.split_once('/').map(|(bucket, _)| bucket)
    }

    /// Whether the key's bucket is `bucket`, ignoring ASCII case
    #[must_use]
    pub fn is_in_bucket(&self, bucket: &str) -> bool {
        self.bucket().is_some_and(|b| b.eq_ignore_ascii_case(bucket))
    }
}
