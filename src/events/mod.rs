//! Adapter notifications.
//!
//! # Data Flow
//! ```text
//! health check completes
//!     → AdapterEvent { ONLINE | OFFLINE, id }
//!     → EventBus (tokio broadcast)
//!     → every subscribed host observer
//! ```
//!
//! # Design Decisions
//! - The adapter owns the bus; it is not an emitter base type
//! - Emitting with no subscribers is a no-op
//! - Every completed check emits, even when the state did not change

pub mod bus;

pub use bus::{AdapterEvent, EventBus, EventKind};
