//! Forwarding gateway subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/proxy {url, method, headers, body}
//!     → ForwardRequest (types.rs)
//!     → ForwardingGateway::forward (client.rs)
//!         → one outbound call via reqwest
//!         → ForwardResult {status, statusText, headers, body}
//!         or ApiError::TransportFailure
//! ```

pub mod client;
pub mod types;

pub use client::ForwardingGateway;
pub use types::{ForwardRequest, ForwardResult};
