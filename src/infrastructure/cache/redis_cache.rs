//! Redis-backed product cache.

use super::service::{CacheError, CacheResult, ProductCache, cache_key};
use crate::application::dto::ProductDto;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache implementation holding products as JSON.
///
/// Uses `ConnectionManager` for connection reuse and reconnects. Entries are
/// written with `SET EX`, so an entry may expire and the next read goes back
/// to the store.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - TTL applied to every entry; controlled via
    ///   `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
        })
    }
}

#[async_trait]
impl ProductCache for RedisCache {
    async fn get(&self, id: i64) -> CacheResult<Option<ProductDto>> {
        let key = cache_key(id);
        let mut conn = self.client.clone();

        let raw = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {}: {}", key, e)))?;

        match raw {
            Some(json) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn put(&self, id: i64, product: &ProductDto) -> CacheResult<()> {
        let key = cache_key(id);
        let json = serde_json::to_string(product)?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, json, self.ttl_seconds)
            .await
            .map_err(|e| CacheError::Operation(format!("SET {}: {}", key, e)))?;

        debug!("Cache PUT: {} (TTL: {}s)", key, self.ttl_seconds);
        Ok(())
    }

    async fn evict(&self, id: i64) -> CacheResult<()> {
        let key = cache_key(id);
        let mut conn = self.client.clone();

        let deleted = conn
            .del::<_, i32>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("DEL {}: {}", key, e)))?;

        if deleted > 0 {
            debug!("Cache EVICT: {}", key);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
