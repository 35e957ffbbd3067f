//! Opportunistic category population from ordinary page loads
//!
//! Wraps an executor. While the category cache is empty, every textual
//! response is buffered, parsed for category links and offered to the
//! cache; the response then continues downstream with an equivalent body.
//! Once the cache is populated the wrapper is a pass-through.

use std::sync::Arc;

use futures::future::BoxFuture;
use log::{debug, trace};

use super::types::SiteResponse;
use super::{HttpExecutor, SiteRequest};
use crate::categories::{CategoryCache, CategoryParser, best_effort};
use crate::document::Document;
use crate::error::TransportError;

pub struct CategoryInterceptor<E> {
    inner: E,
    cache: Arc<CategoryCache>,
    parser: Arc<CategoryParser>,
    max_inspect_bytes: usize,
}

impl<E: HttpExecutor> CategoryInterceptor<E> {
    #[must_use]
    pub fn new(
        inner: E,
        cache: Arc<CategoryCache>,
        parser: Arc<CategoryParser>,
        max_inspect_bytes: usize,
    ) -> Self {
        Self {
            inner,
            cache,
            parser,
            max_inspect_bytes,
        }
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }

    async fn observe(&self, response: SiteResponse) -> SiteResponse {
        if self.cache.is_populated() || !response.is_textual() {
            return response;
        }
        if response
            .content_length()
            .is_some_and(|len| len > self.max_inspect_bytes as u64)
        {
            trace!(
                target: "oceanwp::interceptor",
                "Skipping oversized body of {}",
                response.url
            );
            return response;
        }

        let SiteResponse {
            url,
            status,
            headers,
            body,
        } = response;

        let drained = body.drain().await;
        if drained.error.is_none() && drained.bytes.len() <= self.max_inspect_bytes {
            self.inspect(&url, &drained.bytes);
        }

        SiteResponse {
            url,
            status,
            headers,
            body: drained.into_body(),
        }
    }

    fn inspect(&self, url: &str, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        let parsed = best_effort(
            "opportunistic category parse",
            Document::parse(&text, url).map(|document| self.parser.parse(&document)),
        );
        if let Some(entries) = parsed {
            if self.cache.offer(entries) {
                debug!(
                    target: "oceanwp::interceptor",
                    "Categories discovered from {url}"
                );
            }
        }
    }
}

impl<E: HttpExecutor> HttpExecutor for CategoryInterceptor<E> {
    fn execute(&self, request: SiteRequest) -> BoxFuture<'_, Result<SiteResponse, TransportError>> {
        Box::pin(async move {
            let response = self.inner.execute(request).await?;
            Ok(self.observe(response).await)
        })
    }
}
