//! Cached, request-collapsing access to the portfolio content document.
//!
//! The document is fetched at most once per staleness window and shared
//! read-only between all consumers. Concurrent readers of a stale cache
//! collapse onto a single outbound request: the fetch happens while the slot
//! lock is held, so every waiter observes the freshly stored entry instead of
//! issuing its own GET. Failures are returned to the caller and never cached;
//! the next read simply tries again.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use folio_api::{ApiError, PortfolioClient};
use folio_types::PortfolioContent;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Logical cache key for the content query. There is exactly one.
pub const CONTENT_CACHE_KEY: &str = "portfolio-content";

/// Staleness window after which the next read refetches (5 minutes).
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

/// Anything that can produce a portfolio document.
///
/// The production implementation is [`PortfolioClient`]; tests substitute
/// counting fakes.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioContent, ApiError>;
}

#[async_trait]
impl ContentSource for PortfolioClient {
    async fn fetch(&self) -> Result<PortfolioContent, ApiError> {
        self.fetch_portfolio().await
    }
}

struct CacheEntry {
    fetched_at: Instant,
    data: Arc<PortfolioContent>,
}

/// Staleness-windowed cache over a [`ContentSource`].
pub struct ContentCache {
    source: Arc<dyn ContentSource>,
    stale_after: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl ContentCache {
    /// Wrap `source` with the given staleness window.
    pub fn new(source: Arc<dyn ContentSource>, stale_after: Duration) -> Self {
        Self {
            source,
            stale_after,
            slot: Mutex::new(None),
        }
    }

    /// Wrap `source` with the default 5-minute window.
    pub fn with_default_window(source: Arc<dyn ContentSource>) -> Self {
        Self::new(source, DEFAULT_STALE_AFTER)
    }

    /// Read the content document, fetching if the cache is empty or stale.
    ///
    /// Holding the slot lock across the fetch is what provides request
    /// collapsing: a second caller arriving mid-fetch waits on the lock and
    /// then finds a fresh entry.
    pub async fn get(&self) -> Result<Arc<PortfolioContent>, ApiError> {
        let mut slot = self.slot.lock().await;
        if let Some(entry) = slot.as_ref()
            && entry.fetched_at.elapsed() < self.stale_after
        {
            debug!(key = CONTENT_CACHE_KEY, "serving cached content");
            return Ok(Arc::clone(&entry.data));
        }
        self.fetch_into(&mut slot).await
    }

    /// Force a refetch regardless of staleness.
    pub async fn refresh(&self) -> Result<Arc<PortfolioContent>, ApiError> {
        let mut slot = self.slot.lock().await;
        self.fetch_into(&mut slot).await
    }

    /// The cached document, if any, regardless of staleness. Never fetches.
    pub async fn peek(&self) -> Option<Arc<PortfolioContent>> {
        self.slot.lock().await.as_ref().map(|entry| Arc::clone(&entry.data))
    }

    async fn fetch_into(&self, slot: &mut Option<CacheEntry>) -> Result<Arc<PortfolioContent>, ApiError> {
        debug!(key = CONTENT_CACHE_KEY, "fetching content");
        match self.source.fetch().await {
            Ok(content) => {
                let data = Arc::new(content);
                *slot = Some(CacheEntry {
                    fetched_at: Instant::now(),
                    data: Arc::clone(&data),
                });
                Ok(data)
            }
            Err(error) => {
                // Errors are never cached; the next read retries.
                warn!(key = CONTENT_CACHE_KEY, error = %error, "content fetch failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        async fn fetch(&self) -> Result<PortfolioContent, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Yield so concurrent readers genuinely overlap with the fetch.
            tokio::task::yield_now().await;
            if self.fail {
                Err(ApiError::Status { status: 500 })
            } else {
                Ok(PortfolioContent::default())
            }
        }
    }

    #[tokio::test]
    async fn fresh_reads_are_served_from_cache() {
        let source = CountingSource::new(false);
        let cache = ContentCache::with_default_window(source.clone());

        cache.get().await.unwrap();
        cache.get().await.unwrap();
        cache.get().await.unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_reads_collapse_to_one_request() {
        let source = CountingSource::new(false);
        let cache = Arc::new(ContentCache::with_default_window(source.clone()));

        let (a, b) = tokio::join!(cache.get(), cache.get());
        a.unwrap();
        b.unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn stale_entries_are_refetched_on_next_read() {
        let source = CountingSource::new(false);
        let cache = ContentCache::new(source.clone(), Duration::ZERO);

        cache.get().await.unwrap();
        cache.get().await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn failures_are_returned_and_never_cached() {
        let source = CountingSource::new(true);
        let cache = ContentCache::with_default_window(source.clone());

        assert!(cache.get().await.is_err());
        assert!(cache.get().await.is_err());
        assert_eq!(source.calls(), 2);
        assert!(cache.peek().await.is_none());
    }

    #[tokio::test]
    async fn refresh_bypasses_a_fresh_cache() {
        let source = CountingSource::new(false);
        let cache = ContentCache::with_default_window(source.clone());

        cache.get().await.unwrap();
        cache.refresh().await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn peek_returns_cached_data_without_fetching() {
        let source = CountingSource::new(false);
        let cache = ContentCache::with_default_window(source.clone());

        assert!(cache.peek().await.is_none());
        cache.get().await.unwrap();
        assert!(cache.peek().await.is_some());
        assert_eq!(source.calls(), 1);
    }
}
