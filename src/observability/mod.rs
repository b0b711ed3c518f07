//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! adapter, health checks, host binary produce:
//!     → logging.rs (structured log events, adapter id as a field)
//!     → metrics.rs (call counters, health gauge)
//!
//! Consumers:
//!     → stdout (human or JSON lines)
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - The connector stays silent; callers log what they observe
//! - Metrics are cheap (no-ops when no recorder is installed)

pub mod logging;
pub mod metrics;
