//! Error types for the Braintree client
//!
//! Validation failures reported by the gateway are *not* errors: they are
//! returned as [`Outcome::Failed`](crate::result::Outcome) with a populated
//! error collection, because a rejected request is an expected outcome of
//! user-driven operations. Everything in this module covers the other
//! cases: misuse (bad identifiers, typo'd field access), stale references
//! (not found), credentials, and transport failures.

use thiserror::Error;

/// Result type alias for Braintree operations
pub type Result<T> = std::result::Result<T, BraintreeError>;

/// Errors that can occur when talking to the Braintree gateway
#[derive(Debug, Error)]
pub enum BraintreeError {
    /// The requested resource does not exist on the gateway
    #[error("Not found: {0}")]
    NotFound(String),

    /// A lookup identifier was malformed; raised before any remote call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An attribute not present on a successful result was requested
    #[error("Undefined field on successful result: {0}")]
    UndefinedField(String),

    /// `for_key` lookup on an error collection missed
    #[error("No nested errors under key: {0}")]
    KeyNotFound(String),

    /// The gateway rejected the credentials (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The credentials are valid but not permitted for this call (HTTP 403)
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A no-validate convenience call hit validation errors anyway
    #[error("Validations failed: {0}")]
    ValidationsFailed(String),

    /// The gateway returned a body this client could not interpret
    #[error("Unexpected response from gateway: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server-side failure (HTTP 5xx)
    #[error("Gateway server error: {0}")]
    ServerError(String),
}

impl BraintreeError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an undefined-field error naming the requested field
    pub fn undefined_field(field: impl Into<String>) -> Self {
        Self::UndefinedField(field.into())
    }

    /// Create a key-not-found error naming the requested key
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unexpected-response error
    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
