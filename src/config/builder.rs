//! Type-safe builder for `SiteConfig` using the typestate pattern
//!
//! The base URL is the only required field; `build()` only exists once it
//! has been set.

use std::marker::PhantomData;

use url::Url;

use super::types::{ClassifierPolicy, ExtractionSelectors, FilterStyle, SiteConfig};
use crate::http::Method;
use crate::error::{SourceError, SourceResult};
use crate::utils::normalize_base_url;

// Type states for the builder
pub struct WithBaseUrl;

pub struct SiteConfigBuilder<State = ()> {
    draft: SiteConfig,
    _phantom: PhantomData<State>,
}

impl Default for SiteConfigBuilder<()> {
    fn default() -> Self {
        Self {
            draft: SiteConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl SiteConfig {
    /// Create a builder for configuring a `SiteConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SiteConfigBuilder<()> {
        SiteConfigBuilder::default()
    }

    /// Load a config from JSON. Missing fields take their defaults; the base
    /// URL is required.
    pub fn from_json(json: &str) -> SourceResult<Self> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        config.base_url = normalize_base_url(&config.base_url);
        config.validate()?;
        Ok(config)
    }

    /// Check a normalized config. A `max_category_attempts` of 0 is allowed
    /// and turns explicit discovery off; the interceptor still works.
    pub(crate) fn validate(&self) -> SourceResult<()> {
        let has_host = Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(|host| !host.is_empty()))
            .unwrap_or(false);
        if !has_host {
            return Err(SourceError::Config(format!(
                "base_url '{}' is not an absolute URL with a host",
                self.base_url
            )));
        }
        if self.url_delimiter.is_empty() {
            return Err(SourceError::Config("url_delimiter must not be empty".to_string()));
        }
        if self.search_param.is_empty() {
            return Err(SourceError::Config("search_param must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(SourceError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.max_inspect_bytes == 0 {
            return Err(SourceError::Config(
                "max_inspect_bytes must be at least 1; disable the interceptor instead".to_string(),
            ));
        }
        if let ClassifierPolicy::Restrictive { buckets } = &self.classifier {
            if buckets.is_empty() {
                return Err(SourceError::Config(
                    "restrictive classifier needs at least one bucket".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl SiteConfigBuilder<()> {
    pub fn base_url(mut self, url: impl Into<String>) -> SiteConfigBuilder<WithBaseUrl> {
        self.draft.base_url = normalize_base_url(&url.into());
        SiteConfigBuilder {
            draft: self.draft,
            _phantom: PhantomData,
        }
    }
}

impl<State> SiteConfigBuilder<State> {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.draft.lang = lang.into();
        self
    }

    #[must_use]
    pub fn category_selector(mut self, selector: impl Into<String>) -> Self {
        self.draft.category_selector = selector.into();
        self
    }

    #[must_use]
    pub fn classifier(mut self, policy: ClassifierPolicy) -> Self {
        self.draft.classifier = policy;
        self
    }

    #[must_use]
    pub fn use_tags(mut self, enabled: bool) -> Self {
        self.draft.use_tags = enabled;
        self
    }

    #[must_use]
    pub fn url_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.draft.url_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.draft.date_format = format.into();
        self
    }

    #[must_use]
    pub fn interceptor_enabled(mut self, enabled: bool) -> Self {
        self.draft.interceptor_enabled = enabled;
        self
    }

    #[must_use]
    pub fn filter_style(mut self, style: FilterStyle) -> Self {
        self.draft.filter_style = style;
        self
    }

    #[must_use]
    pub fn search_param(mut self, param: impl Into<String>) -> Self {
        self.draft.search_param = param.into();
        self
    }

    #[must_use]
    pub fn probe_method(mut self, method: Method) -> Self {
        self.draft.probe_method = method;
        self
    }

    #[must_use]
    pub fn max_category_attempts(mut self, attempts: u32) -> Self {
        self.draft.max_category_attempts = attempts;
        self
    }

    #[must_use]
    pub fn max_inspect_bytes(mut self, bytes: usize) -> Self {
        self.draft.max_inspect_bytes = bytes;
        self
    }

    #[must_use]
    pub fn selectors(mut self, selectors: ExtractionSelectors) -> Self {
        self.draft.selectors = selectors;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.draft.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.draft.request_timeout_secs = secs;
        self
    }
}

impl SiteConfigBuilder<WithBaseUrl> {
    /// Validate and produce the config
    pub fn build(self) -> SourceResult<SiteConfig> {
        self.draft.validate()?;
        Ok(self.draft)
    }
}
