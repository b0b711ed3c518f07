//! Host-facing change request adapter.
//!
//! # Data Flow
//! ```text
//! host
//!     → connect() / healthcheck()  → get_record() → HealthState + ONLINE/OFFLINE
//!     → get_record()               → connector.get()  → shape_read()
//!     → post_record(payload)       → connector.post() → shape_create()
//! ```
//!
//! # Design Decisions
//! - Hosts integrate against the `ChangeRequestAdapter` trait
//! - Results are returned when the underlying call completes; there is no
//!   callback that can observe a half-finished check
//! - Error outcomes are forwarded as `CallError` without transformation

pub mod service;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::connector::CallResult;
use crate::events::AdapterEvent;
use crate::health::{HealthReport, HealthState};
use crate::records::AdapterData;

pub use service::ServiceNowAdapter;

/// Operations an orchestration host can invoke on a change request adapter.
#[async_trait]
pub trait ChangeRequestAdapter: Send + Sync {
    /// Identity carried by every notification.
    fn id(&self) -> &str;

    /// State set by the most recent completed health check.
    fn health(&self) -> HealthState;

    /// Receive ONLINE/OFFLINE notifications.
    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent>;

    /// Start monitoring: exactly one health check.
    async fn connect(&self) -> HealthReport;

    /// Read one record and derive Online/Offline from the outcome.
    async fn healthcheck(&self) -> HealthReport;

    /// Read one record from the configured table.
    async fn get_record(&self) -> CallResult<AdapterData>;

    /// Create a record in the configured table.
    async fn post_record(&self, payload: Option<Value>) -> CallResult<AdapterData>;
}
