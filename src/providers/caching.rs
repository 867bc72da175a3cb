use async_trait::async_trait;

use crate::core::{DateKey, LookupError, RateCache, RateProvider, RateRecord};

/// Memoizes successful lookups of an inner provider in a shared [`RateCache`].
pub struct CachingRateProvider<T: RateProvider> {
    inner: T,
    cache: RateCache,
}

impl<T: RateProvider> CachingRateProvider<T> {
    pub fn new(inner: T, cache: RateCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }
}

#[async_trait]
impl<T: RateProvider> RateProvider for CachingRateProvider<T> {
    async fn fetch(&self, date: DateKey) -> Result<RateRecord, LookupError> {
        self.cache
            .get_or_fetch(date, || self.inner.fetch(date))
            .await
    }
}
