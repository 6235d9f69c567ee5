//! In-process cache implementation.

use std::collections::HashMap;

use super::service::{CacheResult, ProductCache};
use crate::application::dto::ProductDto;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Product cache backed by a map in process memory.
///
/// Entries never expire. Only safe when a single instance serves the
/// catalog; multi-instance deployments must use Redis.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<i64, ProductDto>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached products.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every entry, leaving a cold cache.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl ProductCache for MemoryCache {
    async fn get(&self, id: i64) -> CacheResult<Option<ProductDto>> {
        let hit = self.entries.read().await.get(&id).cloned();
        debug!(id, hit = hit.is_some(), "Memory cache lookup");
        Ok(hit)
    }

    async fn put(&self, id: i64, product: &ProductDto) -> CacheResult<()> {
        self.entries.write().await.insert(id, product.clone());
        Ok(())
    }

    async fn evict(&self, id: i64) -> CacheResult<()> {
        self.entries.write().await.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
