//! Category parser: CSS-selected anchors to ordered `CategoryEntry` list

use scraper::Selector;

use super::classifier::PathClassifier;
use super::CategoryEntry;
use crate::config::SiteConfig;
use crate::document::{Document, element_text};
use crate::error::{SourceError, SourceResult};

/// Parse a CSS selector, mapping the borrowed scraper error into ours
pub fn parse_selector(selector: &str) -> SourceResult<Selector> {
    Selector::parse(selector).map_err(|e| SourceError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

pub struct CategoryParser {
    selector: Selector,
    classifier: PathClassifier,
}

impl CategoryParser {
    pub fn new(selector: &str, classifier: PathClassifier) -> SourceResult<Self> {
        Ok(Self {
            selector: parse_selector(selector)?,
            classifier,
        })
    }

    pub fn from_config(config: &SiteConfig) -> SourceResult<Self> {
        Self::new(config.category_selector(), PathClassifier::from_config(config))
    }

    #[must_use]
    pub fn classifier(&self) -> &PathClassifier {
        &self.classifier
    }

    /// One entry per matched anchor, in document order, after the leading
    /// "All" sentinel. Duplicate keys are kept; an anchor whose href cannot be
    /// resolved still contributes an entry, keyed from its raw href.
    #[must_use]
    pub fn parse(&self, document: &Document) -> Vec<CategoryEntry> {
        let matched = document.select(&self.selector);
        let mut entries = Vec::with_capacity(matched.size_hint().0 + 1);
        entries.push(CategoryEntry::all());

        for element in matched {
            let label = element_text(&element);
            let resolved = document.abs_attr(&element, "href");
            let raw = element.value().attr("href").unwrap_or_default();
            let key = self.classifier.classify(&resolved, raw);
            entries.push(CategoryEntry::new(label, key));
        }

        entries
    }
}
