//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize logging and metrics from the validated configuration
//! - Build the adapter with its production transport
//!
//! # Design Decisions
//! - Config is loaded and validated before anything else starts
//! - A broken metrics address is logged, not fatal

use std::net::SocketAddr;

use crate::adapter::ServiceNowAdapter;
use crate::config::AdapterConfig;
use crate::connector::TransportError;
use crate::observability::{logging, metrics};

/// Bring up observability and construct the adapter. Needs a Tokio runtime
/// when metrics are enabled.
pub fn start(config: &AdapterConfig) -> Result<ServiceNowAdapter, TransportError> {
    logging::init_logging(&config.observability);

    tracing::info!(
        id = %config.id,
        url = %config.properties.url,
        table = %config.properties.service_now_table,
        "servicenow-adapter v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    ServiceNowAdapter::from_config(config)
}
