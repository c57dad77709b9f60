//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_requests_total` (counter): handled requests by route and status
//! - `cache_hits_total` / `cache_misses_total` (counters): response cache
//! - `rankings_fallback_total` (counter): fallback generations
//! - `wcl_token_refresh_total` (counter): token exchanges performed

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled API request.
pub fn record_request(route: &'static str, status: u16) {
    ::metrics::counter!(
        "api_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
}
