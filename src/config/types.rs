//! Core configuration types for a site instance
//!
//! One `SiteConfig` describes one OceanWP-templated site. Everything that
//! varies between site variants (selectors, classifier policy, tag support,
//! interceptor, filter presentation) is a field here rather than a subtype.

use serde::{Deserialize, Serialize};

use crate::http::Method;

use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_CATEGORY_SELECTOR, DEFAULT_DATE_FORMAT,
    DEFAULT_MAX_CATEGORY_ATTEMPTS, DEFAULT_MAX_INSPECT_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SEARCH_PARAM, DEFAULT_URL_DELIMITER, KNOWN_BUCKETS,
};

/// How a link path is turned into a `"<bucket>/<slug>"` key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierPolicy {
    /// Any two-segment tail is a key (megamenu and tag-cloud layouts)
    #[default]
    Permissive,
    /// Only tails whose first segment is one of `buckets`
    Restrictive { buckets: Vec<String> },
}

impl ClassifierPolicy {
    /// Restrictive policy over `category`, `tag` and `genre`
    #[must_use]
    pub fn restrictive() -> Self {
        Self::Restrictive {
            buckets: KNOWN_BUCKETS.iter().map(|b| (*b).to_string()).collect(),
        }
    }
}

/// Shape of the filter list handed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterStyle {
    /// Category and tag groups only
    #[default]
    Plain,
    /// Adds explanatory headers and a leading "All" tag
    Annotated,
}

/// CSS selectors for the listing and detail pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSelectors {
    pub listing_item: String,
    pub listing_title_link: String,
    pub listing_thumbnail: String,
    pub next_page: String,
    pub details_title: String,
    pub details_content: String,
    pub details_genre: String,
    pub details_thumbnail: String,
    pub published_time: String,
    pub page_images: String,
}

impl Default for ExtractionSelectors {
    fn default() -> Self {
        Self {
            listing_item: "article.blog-entry, article.entry".to_string(),
            listing_title_link: ".blog-entry-title a, .entry-title a".to_string(),
            listing_thumbnail: ".thumbnail img, img".to_string(),
            next_page: "ul.page-numbers a.next".to_string(),
            details_title:
                "h1.single-post-title, h1.entry-title, h2.single-post-title, h2.entry-title"
                    .to_string(),
            details_content: ".entry-content, .entry".to_string(),
            details_genre: ".meta-cat a[rel=\"category tag\"], .meta-category a".to_string(),
            details_thumbnail: ".entry-header img, .thumbnail img".to_string(),
            published_time: "time.published".to_string(),
            page_images: ".entry-content img, .entry img, .gallery-icon img".to_string(),
        }
    }
}

/// Main configuration struct for one site instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root without trailing slash.
    ///
    /// **INVARIANT:** always carries a scheme (normalized in builder and
    /// `from_json`).
    pub(crate) base_url: String,
    pub(crate) name: String,
    pub(crate) lang: String,
    pub(crate) category_selector: String,
    pub(crate) classifier: ClassifierPolicy,
    pub(crate) use_tags: bool,

    /// Split delimiter for hrefs that do not parse as URLs
    pub(crate) url_delimiter: String,

    /// chrono format string for chapter timestamps
    pub(crate) date_format: String,

    /// Piggy-back category discovery on ordinary page loads
    pub(crate) interceptor_enabled: bool,
    pub(crate) filter_style: FilterStyle,
    pub(crate) search_param: String,
    /// Method used for search-target probes
    pub(crate) probe_method: Method,

    /// Explicit discovery fetches allowed before giving up for good
    pub(crate) max_category_attempts: u32,

    /// Bodies larger than this are passed through the interceptor untouched
    pub(crate) max_inspect_bytes: usize,
    pub(crate) selectors: ExtractionSelectors,
    pub(crate) user_agent: String,
    pub(crate) request_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            name: String::new(),
            lang: "en".to_string(),
            category_selector: DEFAULT_CATEGORY_SELECTOR.to_string(),
            classifier: ClassifierPolicy::Permissive,
            use_tags: true,
            url_delimiter: DEFAULT_URL_DELIMITER.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            interceptor_enabled: true,
            filter_style: FilterStyle::Plain,
            search_param: DEFAULT_SEARCH_PARAM.to_string(),
            probe_method: Method::Get,
            max_category_attempts: DEFAULT_MAX_CATEGORY_ATTEMPTS,
            max_inspect_bytes: DEFAULT_MAX_INSPECT_BYTES,
            selectors: ExtractionSelectors::default(),
            user_agent: CHROME_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
