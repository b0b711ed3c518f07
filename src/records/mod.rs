//! Record shape transformation.
//!
//! # Data Flow
//! ```text
//! successful HttpResponse
//!     → body parsed as JSON envelope
//!     → `result` (array for reads, object for creates)
//!     → normalize.rs (allow-list + rename)
//!     → AdapterData
//!
//! anything unexpected
//!     → AdapterData::Passthrough (response untouched)
//! ```

pub mod normalize;
pub mod shape;

pub use normalize::NormalizedChangeRecord;
pub use shape::{shape_create, shape_read, AdapterData};
