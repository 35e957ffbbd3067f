//! Parsed HTML page bound to the URL it was loaded from.
//!
//! `scraper::Html` has no notion of a base URL, so relative hrefs and image
//! sources are resolved here.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{SourceError, SourceResult};

pub struct Document {
    html: Html,
    base_url: Url,
}

impl Document {
    /// Parse `html` as a full document loaded from `base_url`
    pub fn parse(html: &str, base_url: &str) -> SourceResult<Self> {
        let base_url = Url::parse(base_url).map_err(|source| SourceError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self::from_parts(Html::parse_document(html), base_url))
    }

    #[must_use]
    pub fn from_parts(html: Html, base_url: Url) -> Self {
        Self { html, base_url }
    }

    #[must_use]
    pub fn html(&self) -> &Html {
        &self.html
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Absolute form of `attr` on `element`, or an empty string when the
    /// attribute is missing, blank or does not resolve against the base URL.
    #[must_use]
    pub fn abs_attr(&self, element: &ElementRef<'_>, attr: &str) -> String {
        let Some(raw) = element.value().attr(attr) else {
            return String::new();
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }
        self.base_url
            .join(raw)
            .map(|url| url.to_string())
            .unwrap_or_default()
    }
}

/// Visible text of an element with runs of whitespace collapsed
#[must_use]
pub fn element_text(element: &ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
