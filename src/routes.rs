//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Health check: database and cache (public)
//! - `GET /metrics`  - Prometheus scrape endpoint
//! - `/api/*`        - Product REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured frontend origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, metrics_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allowed_origins` - browser origins allowed to call the API
/// - `metrics` - handle of the installed Prometheus recorder
pub fn app_router(
    state: AppState,
    cors_allowed_origins: &[String],
    metrics: PrometheusHandle,
) -> NormalizePath<Router> {
    let router = build_router(state, cors_allowed_origins).merge(metrics_router(metrics));
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Scrape endpoint, kept outside the request tracing layer.
pub fn metrics_router(metrics: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

/// Routes and middleware without path normalization.
///
/// Path normalization has to wrap the router from the outside, so it is
/// applied separately by [`app_router`].
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::product_routes())
        .with_state(state)
        .layer(cors::layer(cors_allowed_origins))
        .layer(tracing::layer())
}
