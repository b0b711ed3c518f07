//! Transport connector for the ServiceNow Table API.
//!
//! # Data Flow
//! ```text
//! get() / post(payload)
//!     → CallOptions (method, query, table, payload)
//!     → uri.rs (/api/now/table/<table>?<query>)
//!     → transport.rs (one HTTP exchange, basic auth)
//!     → outcome.rs (transport error > bad status > hibernating > success)
//!     → Outcome
//! ```
//!
//! # Design Decisions
//! - The HTTP capability is injected as a trait object
//! - Classification is a pure function over the exchange result
//! - Connection parameters are immutable once the connector exists

pub mod client;
pub mod outcome;
pub mod transport;
pub mod types;
pub mod uri;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{CallOptions, ConnectionConfig, ServiceNowConnector};
pub use outcome::{classify, Outcome};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{CallError, CallResult, Credentials, HttpMethod, HttpResponse, TransportError, TransportRequest};
