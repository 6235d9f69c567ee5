//! Cache trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::ProductDto;

/// Name of the single cache region holding products.
///
/// Shared between the catalog service and any code that inspects the cache.
pub const PRODUCT_CACHE: &str = "product";

/// Builds the namespaced key of a product entry, e.g. `product::42`.
pub fn cache_key(id: i64) -> String {
    format!("{}::{}", PRODUCT_CACHE, id)
}

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache region for [`ProductDto`] values keyed by product identifier.
///
/// Implementations must be thread-safe. Unlike a plain lookup cache, write
/// failures are reported to the caller: the catalog relies on `put` and
/// `evict` actually landing to keep entries from going stale.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Returns the cached product for `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(dto))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend cannot be read. Callers treat
    /// this as a miss.
    async fn get(&self, id: i64) -> CacheResult<Option<ProductDto>>;

    /// Stores `product` under `id`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the entry could not be written.
    async fn put(&self, id: i64, product: &ProductDto) -> CacheResult<()>;

    /// Removes the entry for `id`. Evicting a missing entry succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend could not be reached.
    async fn evict(&self, id: i64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
