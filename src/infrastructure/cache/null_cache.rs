//! No-op cache implementation.

use super::service::{CacheResult, ProductCache};
use crate::application::dto::ProductDto;
use async_trait::async_trait;
use tracing::debug;

/// A cache that never holds anything.
///
/// Every read is a miss, so it can never serve a stale product. Used when
/// Redis is configured but unreachable at startup: falling back to a
/// per-process map there would let instances diverge.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCache for NullCache {
    async fn get(&self, _id: i64) -> CacheResult<Option<ProductDto>> {
        Ok(None)
    }

    async fn put(&self, _id: i64, _product: &ProductDto) -> CacheResult<()> {
        Ok(())
    }

    async fn evict(&self, _id: i64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_null_cache_is_always_cold() {
        let cache = NullCache::new();
        let dto = ProductDto::new(Some(1), "Laptop", dec!(1200));

        cache.put(1, &dto).await.unwrap();

        assert!(cache.get(1).await.unwrap().is_none());
        assert!(cache.evict(1).await.is_ok());
        assert!(cache.health_check().await);
    }
}
