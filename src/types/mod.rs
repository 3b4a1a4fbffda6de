//! Resource types for the Braintree gateway API
//!
//! This module defines the typed representations of the resources the
//! gateway exposes, plus the request builders used to create and update
//! them. All wire names follow the gateway's camelCase JSON convention.
//!
//! - [`customer`] - Customer records and creation parameters
//! - [`credit_card`] - Vaulted credit cards
//! - [`paypal_account`] - Vaulted PayPal accounts
//! - [`payment_method`] - Nonce-based payment method vaulting
//! - [`transaction`] - Sale transactions
//! - [`access_token`] - OAuth access tokens
//! - [`constants`] - Environment hosts and validation error codes

pub mod access_token;
pub mod constants;
pub mod credit_card;
pub mod customer;
pub mod payment_method;
pub mod paypal_account;
pub mod transaction;

// Re-export commonly used types
pub use access_token::AccessToken;
pub use constants::{codes, environments};
pub use credit_card::{CreditCard, CreditCardRequest};
pub use customer::{Customer, CustomerRequest};
pub use payment_method::{PaymentMethod, PaymentMethodRequest};
pub use paypal_account::{PayPalAccount, PayPalAccountOptions, PayPalAccountUpdateRequest};
pub use transaction::{PayPalDetails, Transaction, TransactionOptions, TransactionRequest};
