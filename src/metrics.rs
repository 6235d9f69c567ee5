//! Prometheus metrics for the product cache.

use anyhow::{Context, Result};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Metric names.
pub mod names {
    /// Product reads answered by the cache.
    pub const CACHE_HITS_TOTAL: &str = "catalog_cache_hits_total";
    /// Product reads that went to the store, including unreadable cache.
    pub const CACHE_MISSES_TOTAL: &str = "catalog_cache_misses_total";
    /// Failed cache puts after a read or a mutation.
    pub const CACHE_WRITE_FAILURES_TOTAL: &str = "catalog_cache_write_failures_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of product reads served from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of product reads that fell through to the store"
    );
    describe_counter!(
        names::CACHE_WRITE_FAILURES_TOTAL,
        "Total number of failed cache writes"
    );
}

/// Installs the global Prometheus recorder and returns its render handle.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    register_metrics();
    Ok(handle)
}
