//! Metrics collection and exposition.
//!
//! # Metrics
//! - `console_route_resolutions_total` (counter): rendered paths by outcome
//! - `console_navigation_publish_total` (counter): navigation publications
//! - `console_duplicate_routes_total` (counter): declarations dropped as duplicates
//! - `console_lazy_loads_total` (counter): lazy view loads by outcome
//!
//! # Design Decisions
//! - Recording is a no-op until `init_metrics` installs the exporter
//! - Labels are small closed sets

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_resolution(outcome: &'static str) {
    counter!("console_route_resolutions_total", "outcome" => outcome).increment(1);
}

pub fn record_navigation_publish() {
    counter!("console_navigation_publish_total").increment(1);
}

pub fn record_duplicate_route() {
    counter!("console_duplicate_routes_total").increment(1);
}

pub fn record_lazy_load(outcome: &'static str) {
    counter!("console_lazy_loads_total", "outcome" => outcome).increment(1);
}
