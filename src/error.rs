//! Error taxonomy shared by every component.
//!
//! Each variant maps to exactly one HTTP status at the routing boundary
//! (see `http::response`). Nothing here is ever retried.

use thiserror::Error;

/// Errors surfaced by the api-tester components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// An identity key (the user email) is already taken.
    #[error("{0} already exists")]
    DuplicateResource(String),

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Email/password mismatch. Deliberately carries no detail.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The request body or path could not be extracted.
    #[error("{0}")]
    InvalidPayload(String),

    /// The forwarding gateway's outbound call failed.
    #[error("{0}")]
    TransportFailure(String),
}

/// Result type for api-tester operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::DuplicateResource("User".into()).to_string(),
            "User already exists"
        );
        assert_eq!(
            ApiError::NotFound("Collection".into()).to_string(),
            "Collection not found"
        );
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");

        let err = ApiError::TransportFailure("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }
}
