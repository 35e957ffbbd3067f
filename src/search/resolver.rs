//! Search target resolution
//!
//! Turns a page number, a free-text query and the selected filter keys into
//! a single request. Bare keys such as `romance` are ambiguous across site
//! layouts (`/genre/romance/`, `/category/romance/`, `/tag/romance/`), so the
//! resolver probes candidate URLs in priority order and keeps the first one
//! the site answers successfully.

use std::collections::HashSet;

use serde::Serialize;
use url::Url;

use super::SearchFilterSelection;
use crate::categories::best_effort;
use crate::config::SiteConfig;
use crate::error::{SourceError, SourceResult};
use crate::http::{HttpExecutor, Method, SiteRequest};
use crate::utils::{FALLBACK_BUCKET, PROBE_PREFIXES, paged_url};

/// How a request was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Free-text search; filters ignored
    Query,
    /// Catalog root, no query and no filter
    Browse,
    /// Key already named its bucket; no probing needed
    Direct,
    /// A probe succeeded
    Probed { probes: usize },
    /// Every probe failed; best guess, not verified
    Fallback { probes: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub request: SiteRequest,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    /// False only for an unverified fallback guess
    #[must_use]
    pub fn is_verified(&self) -> bool {
        !matches!(self.outcome, ResolutionOutcome::Fallback { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SearchTargetResolver {
    base: Url,
    base_str: String,
    search_param: String,
    probe_method: Method,
}

impl SearchTargetResolver {
    pub fn new(config: &SiteConfig) -> SourceResult<Self> {
        let base_str = config.base_url().trim_end_matches('/').to_string();
        let base = Url::parse(&base_str).map_err(|source| SourceError::InvalidUrl {
            url: base_str.clone(),
            source,
        })?;
        Ok(Self {
            base,
            base_str,
            search_param: config.search_param().to_string(),
            probe_method: config.probe_method(),
        })
    }

    /// Candidate paths for one selected key, in probe order
    #[must_use]
    pub fn candidates(key: &str) -> Vec<String> {
        let cleaned = clean_key(key);
        if cleaned.is_empty() {
            return Vec::new();
        }
        if cleaned.contains('/') {
            return vec![cleaned.to_string()];
        }
        PROBE_PREFIXES
            .iter()
            .map(|prefix| format!("{prefix}{cleaned}"))
            .collect()
    }

    /// `<base>[/page/N]?<param>=<query>`
    #[must_use]
    pub fn query_request(&self, page: u32, query: &str) -> SiteRequest {
        let mut url = self.base.clone();
        if page > 1 {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push("page").push(&page.to_string());
            }
        }
        url.query_pairs_mut().append_pair(&self.search_param, query);
        SiteRequest::get(url.to_string())
    }

    /// `<base>/` or `<base>/page/N/`
    #[must_use]
    pub fn browse_request(&self, page: u32) -> SiteRequest {
        SiteRequest::get(paged_url(&self.base_str, "", page))
    }

    /// `<base>/<path>/[page/N/]`
    #[must_use]
    pub fn path_request(&self, path: &str, page: u32) -> SiteRequest {
        SiteRequest::get(paged_url(&self.base_str, path, page))
    }

    /// Resolve to a request. Never fails; see `resolve_detailed` for whether
    /// the result was verified.
    pub async fn resolve<E>(
        &self,
        executor: &E,
        page: u32,
        selection: &SearchFilterSelection,
    ) -> SiteRequest
    where
        E: HttpExecutor + ?Sized,
    {
        self.resolve_detailed(executor, page, selection).await.request
    }

    pub async fn resolve_detailed<E>(
        &self,
        executor: &E,
        page: u32,
        selection: &SearchFilterSelection,
    ) -> Resolution
    where
        E: HttpExecutor + ?Sized,
    {
        let query = selection.query.trim();
        if !query.is_empty() {
            return Resolution {
                request: self.query_request(page, query),
                outcome: ResolutionOutcome::Query,
            };
        }

        let keys: Vec<&str> = selection
            .selected_keys
            .iter()
            .map(|k| clean_key(k))
            .filter(|k| !k.is_empty())
            .collect();

        let Some(first_key) = keys.first().copied() else {
            return Resolution {
                request: self.browse_request(page),
                outcome: ResolutionOutcome::Browse,
            };
        };

        let mut tried: HashSet<String> = HashSet::new();
        let mut probes = 0usize;

        for key in &keys {
            if key.contains('/') {
                tracing::debug!(key = %key, page, "Using bucketed key directly");
                return Resolution {
                    request: self.path_request(key, page),
                    outcome: ResolutionOutcome::Direct,
                };
            }

            for candidate in Self::candidates(key) {
                if !tried.insert(candidate.clone()) {
                    continue;
                }
                let request = self.path_request(&candidate, page);
                probes += 1;
                if self.probe(executor, &request).await {
                    tracing::debug!(candidate = %candidate, page, probes, "Probe succeeded");
                    return Resolution {
                        request,
                        outcome: ResolutionOutcome::Probed { probes },
                    };
                }
            }
        }

        let fallback_path = if first_key.contains('/') {
            first_key.to_string()
        } else {
            format!("{FALLBACK_BUCKET}/{first_key}")
        };
        tracing::info!(
            path = %fallback_path,
            page,
            probes,
            "All search probes failed, using unverified fallback"
        );
        Resolution {
            request: self.path_request(&fallback_path, page),
            outcome: ResolutionOutcome::Fallback { probes },
        }
    }

    /// One probe; any transport error or non-success status is a miss
    async fn probe<E>(&self, executor: &E, request: &SiteRequest) -> bool
    where
        E: HttpExecutor + ?Sized,
    {
        let probe = SiteRequest {
            method: self.probe_method,
            ..request.clone()
        };
        match best_effort("search probe", executor.execute(probe).await) {
            Some(response) => {
                tracing::trace!(url = %request.url, status = response.status, "Probe response");
                response.is_success()
            }
            None => false,
        }
    }
}

fn clean_key(key: &str) -> &str {
    key.trim().trim_matches('/').trim()
}
