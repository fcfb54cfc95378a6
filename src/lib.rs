//! API-testing backend library.
//!
//! Forwards arbitrary HTTP requests for browser clients, keeps a capped
//! per-user history of executed requests, and stores users and named
//! collections of request definitions in memory.

pub mod accounts;
pub mod collections;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
