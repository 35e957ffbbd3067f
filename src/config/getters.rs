//! Read accessors for `SiteConfig`

use super::types::{ClassifierPolicy, ExtractionSelectors, FilterStyle, SiteConfig};
use crate::http::Method;

impl SiteConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn category_selector(&self) -> &str {
        &self.category_selector
    }

    #[must_use]
    pub fn classifier(&self) -> &ClassifierPolicy {
        &self.classifier
    }

    #[must_use]
    pub fn use_tags(&self) -> bool {
        self.use_tags
    }

    #[must_use]
    pub fn url_delimiter(&self) -> &str {
        &self.url_delimiter
    }

    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    #[must_use]
    pub fn interceptor_enabled(&self) -> bool {
        self.interceptor_enabled
    }

    #[must_use]
    pub fn filter_style(&self) -> FilterStyle {
        self.filter_style
    }

    #[must_use]
    pub fn search_param(&self) -> &str {
        &self.search_param
    }

    #[must_use]
    pub fn probe_method(&self) -> Method {
        self.probe_method
    }

    #[must_use]
    pub fn max_category_attempts(&self) -> u32 {
        self.max_category_attempts
    }

    #[must_use]
    pub fn max_inspect_bytes(&self) -> usize {
        self.max_inspect_bytes
    }

    #[must_use]
    pub fn selectors(&self) -> &ExtractionSelectors {
        &self.selectors
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    /// `Referer` value sent with every request
    #[must_use]
    pub fn referer(&self) -> String {
        format!("{}/", self.base_url)
    }
}
