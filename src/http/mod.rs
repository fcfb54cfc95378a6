//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request id)
//!     → auth.rs / collections.rs / history.rs / proxy.rs (handlers)
//!     → response.rs (ApiError → status + {"error"})
//!     → Send to client
//! ```

pub mod auth;
pub mod collections;
pub mod history;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
