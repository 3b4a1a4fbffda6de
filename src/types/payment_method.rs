//! Payment method types
//!
//! The gateway vaults a payment method from a one-time-use nonce and
//! responds with whichever concrete type the nonce represented. The
//! [`PaymentMethod`] enum carries that distinction through to callers.

use super::credit_card::CreditCard;
use super::paypal_account::PayPalAccount;
use serde::Serialize;

/// A vaulted payment method of any kind
#[derive(Debug, Clone)]
pub enum PaymentMethod {
    /// A vaulted credit card
    CreditCard(CreditCard),
    /// A vaulted PayPal account
    PayPalAccount(PayPalAccount),
}

impl PaymentMethod {
    /// The vault token of the underlying payment method
    pub fn token(&self) -> &str {
        match self {
            Self::CreditCard(card) => &card.token,
            Self::PayPalAccount(account) => &account.token,
        }
    }

    /// The vaulted credit card, if this is one
    pub fn as_credit_card(&self) -> Option<&CreditCard> {
        match self {
            Self::CreditCard(card) => Some(card),
            _ => None,
        }
    }

    /// The vaulted PayPal account, if this is one
    pub fn as_paypal_account(&self) -> Option<&PayPalAccount> {
        match self {
            Self::PayPalAccount(account) => Some(account),
            _ => None,
        }
    }
}

/// Parameters for vaulting a payment method from a nonce
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodRequest {
    /// Id of the customer to attach the payment method to
    #[serde(rename = "customerId")]
    pub customer_id: String,
    /// One-time-use nonce produced by a client integration
    #[serde(rename = "paymentMethodNonce")]
    pub payment_method_nonce: String,
    /// Caller-chosen token; the gateway assigns one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl PaymentMethodRequest {
    /// Create a request vaulting `nonce` under `customer_id`
    pub fn new(customer_id: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            payment_method_nonce: nonce.into(),
            token: None,
        }
    }

    /// Set an explicit payment method token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
