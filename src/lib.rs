//! ServiceNow change request adapter library.

pub mod adapter;
pub mod config;
pub mod connector;
pub mod events;
pub mod health;
pub mod lifecycle;
pub mod observability;
pub mod records;

pub use adapter::{ChangeRequestAdapter, ServiceNowAdapter};
pub use config::AdapterConfig;
pub use connector::{CallError, Outcome};
pub use events::{AdapterEvent, EventKind};
pub use health::{HealthReport, HealthState};
pub use records::{AdapterData, NormalizedChangeRecord};
