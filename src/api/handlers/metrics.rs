//! Handler for the Prometheus scrape endpoint.

use axum::extract::State;
use metrics_exporter_prometheus::PrometheusHandle;

/// Renders all recorded metrics in the Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
