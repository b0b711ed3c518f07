//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! connect() / healthcheck():
//!     get_record() through the normalization path
//!     → Outcome success?  → Online,  emit ONLINE  {id}
//!     → any error         → Offline, emit OFFLINE {id}
//!     → HealthReport
//!
//! Host-side monitor (monitor.rs):
//!     Periodic timer → healthcheck() → log report
//! ```
//!
//! # Design Decisions
//! - Binary state, set on every check, no thresholds
//! - Checks on one adapter are serialized so notifications keep check order
//! - Health state is per adapter instance

pub mod monitor;
pub mod report;
pub mod state;

pub use monitor::HealthMonitor;
pub use report::HealthReport;
pub use state::{HealthState, HealthTracker};
