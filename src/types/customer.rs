//! Customer resource types

use super::credit_card::CreditCard;
use super::paypal_account::PayPalAccount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vaulted customer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Gateway-assigned (or caller-chosen) customer id
    pub id: String,
    /// First name
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// When the customer was created on the gateway
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Credit cards vaulted under this customer
    #[serde(rename = "creditCards", default)]
    pub credit_cards: Vec<CreditCard>,
    /// PayPal accounts vaulted under this customer
    #[serde(rename = "paypalAccounts", default)]
    pub paypal_accounts: Vec<PayPalAccount>,
}

/// Parameters for creating a customer
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerRequest {
    /// Caller-chosen customer id; the gateway assigns one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First name
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// One-time-use payment method nonce to vault alongside the customer
    #[serde(rename = "paymentMethodNonce", skip_serializing_if = "Option::is_none")]
    pub payment_method_nonce: Option<String>,
}

impl CustomerRequest {
    /// Create an empty customer request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set a payment method nonce to vault with the customer
    pub fn with_payment_method_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.payment_method_nonce = Some(nonce.into());
        self
    }
}
