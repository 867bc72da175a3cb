use lru::LruCache;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::date::DateKey;
use super::error::LookupError;
use super::rate::RateRecord;

pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Bounded least-recently-used map of looked up rates. Cloning yields another
/// handle to the same entries.
#[derive(Clone)]
pub struct RateCache {
    inner: Arc<Mutex<LruCache<DateKey, RateRecord>>>,
}

impl RateCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Returns the cached record and marks it most recently used.
    pub async fn get(&self, key: &DateKey) -> Option<RateRecord> {
        let mut cache = self.inner.lock().await;
        let value = cache.get(key).cloned();
        if value.is_some() {
            debug!(%key, "Cache HIT");
        } else {
            debug!(%key, "Cache MISS");
        }
        value
    }

    pub async fn put(&self, key: DateKey, value: RateRecord) {
        let mut cache = self.inner.lock().await;
        insert(&mut cache, key, value);
    }

    /// Looks `key` up, running `fetch` on a miss and caching its success.
    ///
    /// The cache stays locked while `fetch` runs, so two callers asking for
    /// the same date never both reach the network.
    pub async fn get_or_fetch<F, Fut>(&self, key: DateKey, fetch: F) -> Result<RateRecord, LookupError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<RateRecord, LookupError>>,
    {
        let mut cache = self.inner.lock().await;
        if let Some(cached) = cache.get(&key) {
            debug!(%key, "Cache HIT");
            return Ok(cached.clone());
        }
        debug!(%key, "Cache MISS");

        let record = fetch().await?;
        insert(&mut cache, key, record.clone());
        Ok(record)
    }

    /// Checks for `key` without touching its recency.
    pub async fn contains(&self, key: &DateKey) -> bool {
        self.inner.lock().await.contains(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.lock().await.cap().get()
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

fn insert(cache: &mut LruCache<DateKey, RateRecord>, key: DateKey, value: RateRecord) {
    debug!(%key, "Cache PUT");
    if let Some((evicted, _)) = cache.push(key, value)
        && evicted != key
    {
        debug!(key = %evicted, "Cache EVICT");
    }
}
