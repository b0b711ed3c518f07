//! Metrics collection and exposition.
//!
//! # Metrics
//! - `servicenow_requests_total` (counter): Table API calls by method, outcome
//! - `servicenow_instance_online` (gauge): 1=online, 0=offline, per adapter
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one classified Table API call.
pub fn record_call(method: &'static str, outcome: &'static str) {
    counter!("servicenow_requests_total", "method" => method, "outcome" => outcome).increment(1);
}

/// Record the health state an adapter just moved to.
pub fn record_instance_health(adapter: &str, online: bool) {
    gauge!("servicenow_instance_online", "adapter" => adapter.to_string())
        .set(if online { 1.0 } else { 0.0 });
}
