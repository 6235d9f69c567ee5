//! Product cache region.
//!
//! Provides a [`ProductCache`] trait with three implementations:
//! - [`RedisCache`] - Production Redis-backed cache with TTL
//! - [`MemoryCache`] - In-process cache for single-instance deployments and tests
//! - [`NullCache`] - Always-cold cache used when Redis is configured but unreachable

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, PRODUCT_CACHE, ProductCache, cache_key};

#[cfg(test)]
pub use service::MockProductCache;
