//! Category cache: lazily populated, attempt-bounded, first writer wins
//!
//! Two ways in:
//! - `offer` adopts entries parsed from an unrelated page load (interceptor)
//! - `ensure_populated` runs an explicit discovery fetch, at most
//!   `max_attempts` times over the cache's lifetime
//!
//! State lives behind a short-lived `parking_lot` lock that is never held
//! across an await. A separate async gate serializes explicit fetches, so the
//! interceptor can still `offer` while a discovery request is in flight.

use std::future::Future;

use log::{debug, info};
use parking_lot::Mutex;

use super::best_effort::best_effort;
use super::CategoryEntry;
use crate::error::SourceResult;

/// Cache states; `Populated` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Populated,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: Vec<CategoryEntry>,
    attempts_made: u32,
}

pub struct CategoryCache {
    inner: Mutex<CacheInner>,
    fetch_gate: tokio::sync::Mutex<()>,
    max_attempts: u32,
}

impl CategoryCache {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            fetch_gate: tokio::sync::Mutex::new(()),
            max_attempts,
        }
    }

    #[must_use]
    pub fn state(&self) -> CacheState {
        if self.inner.lock().entries.is_empty() {
            CacheState::Empty
        } else {
            CacheState::Populated
        }
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.state() == CacheState::Populated
    }

    #[must_use]
    pub fn attempts_made(&self) -> u32 {
        self.inner.lock().attempts_made
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether explicit discovery has given up for good
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        let inner = self.inner.lock();
        inner.entries.is_empty() && inner.attempts_made >= self.max_attempts
    }

    /// Snapshot of the cached entries, in discovery order
    #[must_use]
    pub fn entries(&self) -> Vec<CategoryEntry> {
        self.inner.lock().entries.clone()
    }

    /// Offer entries found on an ordinary page load.
    ///
    /// Adopted only while the cache is empty and only if at least one entry
    /// carries a key; the "All" sentinel alone is not a discovery. Does not
    /// consume an attempt. Returns whether the offer was adopted.
    pub fn offer(&self, entries: Vec<CategoryEntry>) -> bool {
        if !has_usable_entries(&entries) {
            return false;
        }
        let mut inner = self.inner.lock();
        if !inner.entries.is_empty() {
            return false;
        }
        info!(
            target: "oceanwp::categories",
            "Category cache populated with {} entries",
            entries.len()
        );
        inner.entries = entries;
        true
    }

    /// Run one explicit discovery attempt unless the cache is populated or
    /// the attempt budget is spent.
    ///
    /// The attempt is counted whether `fetch` succeeds or not. Fetch errors are
    /// swallowed; the cache simply stays empty and may be retried later.
    pub async fn ensure_populated<F, Fut>(&self, fetch: F) -> CacheState
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SourceResult<Vec<CategoryEntry>>>,
    {
        if self.is_populated() {
            return CacheState::Populated;
        }

        let _gate = self.fetch_gate.lock().await;
        {
            let mut inner = self.inner.lock();
            if !inner.entries.is_empty() {
                return CacheState::Populated;
            }
            if inner.attempts_made >= self.max_attempts {
                debug!(
                    target: "oceanwp::categories",
                    "Category discovery exhausted after {} attempts",
                    inner.attempts_made
                );
                return CacheState::Empty;
            }
            inner.attempts_made += 1;
            debug!(
                target: "oceanwp::categories",
                "Category discovery attempt {}/{}",
                inner.attempts_made,
                self.max_attempts
            );
        }

        if let Some(entries) = best_effort("category discovery", fetch().await) {
            if !self.offer(entries) && !self.is_populated() {
                debug!(
                    target: "oceanwp::categories",
                    "Category discovery returned no usable entries"
                );
            }
        }

        self.state()
    }
}

impl Default for CategoryCache {
    fn default() -> Self {
        Self::new(crate::utils::DEFAULT_MAX_CATEGORY_ATTEMPTS)
    }
}

fn has_usable_entries(entries: &[CategoryEntry]) -> bool {
    entries.iter().any(|entry| !entry.key.is_empty())
}
