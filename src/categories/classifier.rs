//! Path classification: link href to `"<bucket>/<slug>"` key
//!
//! Pure and infallible. Anything that cannot be classified yields an empty
//! key, which callers treat as "no filter".

use url::Url;

use crate::config::{ClassifierPolicy, SiteConfig};
use crate::utils::DEFAULT_URL_DELIMITER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathClassifier {
    policy: ClassifierPolicy,
    delimiter: String,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(ClassifierPolicy::Permissive, DEFAULT_URL_DELIMITER)
    }
}

impl PathClassifier {
    #[must_use]
    pub fn new(policy: ClassifierPolicy, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Self {
            policy,
            delimiter: if delimiter.is_empty() {
                DEFAULT_URL_DELIMITER.to_string()
            } else {
                delimiter
            },
        }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.classifier().clone(), config.url_delimiter())
    }

    #[must_use]
    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    /// Classify a link.
    ///
    /// `resolved` is the absolute href (possibly empty when resolution
    /// failed); `raw` is the attribute value as written. The raw form is only
    /// consulted when `resolved` does not parse as a URL.
    #[must_use]
    pub fn classify(&self, resolved: &str, raw: &str) -> String {
        match Url::parse(resolved) {
            Ok(url) => {
                let segments: Vec<&str> = url
                    .path_segments()
                    .map(|segments| segments.filter(|s| !s.is_empty()).collect())
                    .unwrap_or_default();
                self.key_from_segments(&segments)
            }
            Err(_) => {
                let raw = raw.trim();
                let cleaned = raw.strip_suffix(self.delimiter.as_str()).unwrap_or(raw);
                let parts: Vec<&str> = cleaned
                    .split(self.delimiter.as_str())
                    .filter(|s| !s.is_empty())
                    .collect();
                self.key_from_segments(&parts)
            }
        }
    }

    /// Classify a single href, absolute or relative
    #[must_use]
    pub fn classify_href(&self, href: &str) -> String {
        self.classify(href, href)
    }

    /// Two-segment tail under the bucket policy. A lone segment is kept as
    /// a bare key under either policy; the resolver probes it later.
    fn key_from_segments(&self, segments: &[&str]) -> String {
        match segments {
            [] => String::new(),
            [single] => (*single).to_string(),
            [.., bucket, slug] => {
                if self.accepts_bucket(bucket) {
                    format!("{bucket}/{slug}")
                } else {
                    String::new()
                }
            }
        }
    }

    fn accepts_bucket(&self, bucket: &str) -> bool {
        match &self.policy {
            ClassifierPolicy::Permissive => true,
            ClassifierPolicy::Restrictive { buckets } => {
                buckets.iter().any(|b| b.eq_ignore_ascii_case(bucket))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_takes_last_two_segments() {
        let classifier = PathClassifier::default();
        assert_eq!(
            classifier.classify_href("https://a.io/blog/category/romance/"),
            "category/romance"
        );
        assert_eq!(classifier.classify_href("https://a.io/series/x"), "series/x");
        assert_eq!(classifier.classify_href("https://a.io/romance"), "romance");
        assert_eq!(classifier.classify_href("https://a.io/"), "");
    }

    #[test]
    fn restrictive_requires_known_bucket() {
        let classifier = PathClassifier::new(ClassifierPolicy::restrictive(), "/");
        assert_eq!(classifier.classify_href("https://a.io/genre/drama/"), "genre/drama");
        assert_eq!(classifier.classify_href("https://a.io/series/x"), "");
        assert_eq!(classifier.classify_href("https://a.io/romance"), "romance");
    }

    #[test]
    fn unparseable_href_falls_back_to_raw_split() {
        let classifier = PathClassifier::default();
        assert_eq!(classifier.classify("", "/tag/action/"), "tag/action");
        assert_eq!(classifier.classify("", "action"), "action");
        assert_eq!(classifier.classify("", ""), "");

        let piped = PathClassifier::new(ClassifierPolicy::Permissive, "|");
        assert_eq!(piped.classify("", "x|tag|action|"), "tag/action");
    }

    #[test]
    fn non_hierarchical_urls_yield_no_key() {
        let classifier = PathClassifier::default();
        assert_eq!(classifier.classify_href("javascript:void(0)"), "");
        assert_eq!(classifier.classify_href("mailto:someone@a.io"), "");
    }
}
