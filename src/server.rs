//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, and the Axum server lifecycle.

use crate::application::services::CatalogService;
use crate::config::Config;
use crate::metrics;
use crate::infrastructure::cache::{MemoryCache, NullCache, ProductCache, RedisCache};
use crate::infrastructure::persistence::PgProductRepository;
use crate::routes::app_router;
use crate::state::{AppState, PgCatalogService};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Prometheus metrics recorder
/// - PostgreSQL connection pool (with retry)
/// - Apply migrations
/// - Product cache (Redis, in-process, or NullCache fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - A metrics recorder is already installed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let metrics_handle = metrics::install_recorder()?;
    let pool = connect_database(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Migrations applied");

    let cache = connect_cache(&config).await;
    let catalog_service = build_catalog_service(pool, cache);
    let state = AppState::new(Arc::new(catalog_service));

    let app = app_router(state, &config.cors_allowed_origins, metrics_handle);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to PostgreSQL, retrying with exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once `db_connect_attempts` is exhausted.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_connect_timeout())
        .idle_timeout(config.db_idle_timeout())
        .max_lifetime(config.db_max_lifetime());

    // 200ms, 400ms, 800ms ... capped at 5s
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_attempts.saturating_sub(1));

    let pool = Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!("Database connection failed: {}", e))
        }
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Selects the product cache backend.
///
/// - Redis when configured and reachable
/// - [`NullCache`] when Redis is configured but unreachable
/// - [`MemoryCache`] when Redis is not configured
pub async fn connect_cache(config: &Config) -> Arc<dyn ProductCache> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache enabled (in-process)");
        return Arc::new(MemoryCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Connects to the Redis cache shared with running servers.
///
/// Unlike [`connect_cache`] there is no fallback. Writes made against a
/// private or null cache would leave servers holding stale entries.
///
/// # Errors
///
/// Returns an error if Redis is not configured or cannot be reached.
pub async fn connect_shared_cache(config: &Config) -> Result<Arc<dyn ProductCache>> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL must be set to change products or cache entries")?;

    let redis = RedisCache::connect(redis_url, config.cache_ttl_seconds)
        .await
        .context("Failed to connect to the shared Redis cache")?;

    Ok(Arc::new(redis))
}

/// Wires the PostgreSQL repository and a cache into a catalog service.
pub fn build_catalog_service(pool: PgPool, cache: Arc<dyn ProductCache>) -> PgCatalogService {
    let repository = Arc::new(PgProductRepository::new(Arc::new(pool)));
    CatalogService::new(repository, cache)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_redis(redis_url: Option<&str>) -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            redis_url: redis_url.map(str::to_string),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_ttl_seconds: 600,
            cors_allowed_origins: vec![],
            db_max_connections: 10,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
            db_connect_attempts: 5,
        }
    }

    #[tokio::test]
    async fn test_shared_cache_requires_redis_url() {
        let result = connect_shared_cache(&config_with_redis(None)).await;

        let err = result.err().unwrap();
        assert!(err.to_string().contains("REDIS_URL"));
    }

    #[tokio::test]
    async fn test_shared_cache_does_not_fall_back() {
        let result = connect_shared_cache(&config_with_redis(Some("not-a-redis-url"))).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_local_cache_without_redis_url() {
        let cache = connect_cache(&config_with_redis(None)).await;

        assert_eq!(cache.backend(), "memory");
    }
}
