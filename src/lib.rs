//! # Braintree Rust Client
//!
//! A **server-side, type-safe** Rust client for the Braintree payment
//! gateway API.
//!
//! ## Features
//!
//! - 💳 **Payment method vaulting**: Credit cards and PayPal accounts,
//!   created from client-side nonces
//! - 🧾 **Transactions**: Sale transactions against vaulted payment
//!   methods or one-time nonces
//! - 🔑 **OAuth**: Access token exchange for OAuth applications
//! - ✅ **Structured results**: Every write operation returns an
//!   [`Outcome`](result::Outcome) — success with a typed payload, or a
//!   navigable tree of the gateway's validation errors
//! - 🔒 **Type safety**: Strongly typed resources with comprehensive
//!   error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_braintree::{Config, Gateway};
//! use rust_braintree::types::CustomerRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::sandbox("merchant_id", "public_key", "private_key");
//!     let gateway = Gateway::new(config)?;
//!
//!     let request = CustomerRequest::new()
//!         .with_first_name("Jane")
//!         .with_last_name("Doe")
//!         .with_email("jane.doe@example.com");
//!
//!     let outcome = gateway.customer().create(&request).await?;
//!     if outcome.is_success() {
//!         println!("Created customer {}", outcome.get("customer")?.id);
//!     } else {
//!         for error in outcome.errors().map(|e| e.deep_all()).unwrap_or_default() {
//!             println!("{}: {}", error.attribute, error.message);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **`config`**: Environment selection and credential handling
//! - **`gateway`**: The HTTP client and per-resource gateways
//! - **`result`**: The outcome and validation-error model
//! - **`types`**: Typed resources and request builders
//! - **`error`**: Comprehensive error handling
//!
//! ## Validation failures are data
//!
//! The gateway validates every write request. A rejected request is a
//! normal, expected outcome of user-driven business operations, so it is
//! returned as [`Outcome::Failed`](result::Outcome) rather than raised as
//! an error. The Rust error path is reserved for misuse (malformed
//! identifiers, typo'd field access), stale references (not found),
//! credentials, and transport failures.

pub mod config;
pub mod error;
pub mod gateway;
pub mod result;
pub mod types;

// Re-exports for convenience
pub use config::{Config, Credentials, Environment};
pub use error::{BraintreeError, Result};
pub use gateway::Gateway;
pub use result::{ErrorCollection, ErrorEntry, Failed, Outcome, Successful};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        // VERSION is a const string, so it's never empty
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_environment_hosts() {
        assert_eq!(
            Environment::Sandbox.host(),
            "https://api.sandbox.braintreegateway.com"
        );
        assert_eq!(
            Environment::Production.host(),
            "https://api.braintreegateway.com"
        );
    }
}
