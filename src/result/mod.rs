//! Result model for remote gateway operations
//!
//! Every write-style gateway operation returns an [`Outcome`]: either
//! [`Successful`] carrying the typed resource the gateway produced, or
//! [`Failed`] carrying the validation-error tree it reported. A failed
//! outcome is a normal return value, never a Rust error; the error path
//! is reserved for misuse, stale references, and transport problems.
//!
//! # Examples
//!
//! ```
//! use rust_braintree::result::{Failed, Outcome};
//! use serde_json::json;
//!
//! # fn example() -> rust_braintree::Result<()> {
//! let body = json!({
//!     "errors": {
//!         "paypalAccount": {
//!             "errors": [
//!                 {"code": "92906", "message": "Token is in use", "attribute": "token"}
//!             ]
//!         }
//!     }
//! });
//!
//! let outcome: Outcome<()> = Outcome::Failed(Failed::from_value(&body)?);
//! let errors = outcome.errors().unwrap();
//! let on_token = errors.for_key("paypalAccount")?.on_attribute("token");
//! assert_eq!(on_token[0].code, "92906");
//! # Ok(())
//! # }
//! ```

use crate::{BraintreeError, Result};
use serde_json::Value;

pub mod errors;

#[cfg(test)]
mod tests;

pub use errors::{ErrorCollection, ErrorEntry};

/// Result of one remote gateway operation
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The gateway accepted the request and produced a resource
    Successful(Successful<T>),
    /// The gateway rejected the request with validation errors
    Failed(Failed),
}

/// The success side of an [`Outcome`]
///
/// The payload is bound to the logical field name the gateway returned it
/// under ("customer", "paypalAccount", ...). The [`get`](Self::get)
/// accessor enforces that name so that a typo'd field in calling code
/// surfaces as a diagnosable error instead of a silently absent value.
#[derive(Debug, Clone)]
pub struct Successful<T> {
    field: &'static str,
    payload: T,
}

/// The failure side of an [`Outcome`]
#[derive(Debug, Clone)]
pub struct Failed {
    errors: ErrorCollection,
    message: Option<String>,
}

impl<T> Outcome<T> {
    /// Wrap a payload produced under the given logical field name
    pub fn successful(field: &'static str, payload: T) -> Self {
        Self::Successful(Successful { field, payload })
    }

    /// Wrap a validation failure
    pub fn failed(failed: Failed) -> Self {
        Self::Failed(failed)
    }

    /// Whether the gateway accepted the request
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Successful(_))
    }

    /// The payload, when successful
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Successful(success) => Some(&success.payload),
            Self::Failed(_) => None,
        }
    }

    /// Consume the outcome, yielding the payload when successful
    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Successful(success) => Some(success.payload),
            Self::Failed(_) => None,
        }
    }

    /// The validation errors, when failed
    pub fn errors(&self) -> Option<&ErrorCollection> {
        match self {
            Self::Successful(_) => None,
            Self::Failed(failed) => Some(&failed.errors),
        }
    }

    /// The gateway's summary message, when failed
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Successful(_) => None,
            Self::Failed(failed) => failed.message.as_deref(),
        }
    }

    /// The payload, addressed by its logical field name
    ///
    /// Fails with [`BraintreeError::UndefinedField`] naming the requested
    /// field when the name does not match the one the payload was bound
    /// to at construction, or when the outcome is a failure.
    pub fn get(&self, field: &str) -> Result<&T> {
        match self {
            Self::Successful(success) => success.get(field),
            Self::Failed(_) => Err(BraintreeError::undefined_field(field)),
        }
    }
}

impl<T> Successful<T> {
    /// The logical field name the payload was returned under
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The payload itself
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the success, yielding the payload
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// The payload, addressed by its logical field name
    pub fn get(&self, field: &str) -> Result<&T> {
        if field == self.field {
            Ok(&self.payload)
        } else {
            Err(BraintreeError::undefined_field(field))
        }
    }
}

impl Failed {
    /// Build a failure from the gateway's decoded error response body
    ///
    /// Expects the 422 response shape: an object with a nested `"errors"`
    /// tree and an optional top-level `"message"` summary.
    pub fn from_value(body: &Value) -> Result<Self> {
        let errors = match body.get("errors") {
            Some(raw) => ErrorCollection::from_value(raw)?,
            None => ErrorCollection::default(),
        };
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { errors, message })
    }

    /// The validation-error tree
    pub fn errors(&self) -> &ErrorCollection {
        &self.errors
    }

    /// The gateway's summary message, when present
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
