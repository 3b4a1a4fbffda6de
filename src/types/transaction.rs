//! Transaction resource types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A processed transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Gateway-assigned transaction id
    pub id: String,
    /// Transaction type (e.g. "sale", "credit")
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Transaction amount
    pub amount: Decimal,
    /// Current gateway status (e.g. "authorized", "settled")
    pub status: String,
    /// ISO 4217 currency code
    #[serde(rename = "currencyIsoCode", skip_serializing_if = "Option::is_none")]
    pub currency_iso_code: Option<String>,
    /// PayPal-specific transaction details, present on PayPal sales
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<PayPalDetails>,
    /// When the transaction was created
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// PayPal details attached to a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPalDetails {
    /// Vault token of the PayPal account that funded the sale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Email of the paying PayPal account
    #[serde(rename = "payerEmail", skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    /// PayPal-side payment id
    #[serde(rename = "paymentId", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Parameters for creating a sale transaction
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRequest {
    /// Amount to charge
    pub amount: Decimal,
    /// Vault token of the payment method to charge
    #[serde(rename = "paymentMethodToken", skip_serializing_if = "Option::is_none")]
    pub payment_method_token: Option<String>,
    /// One-time-use nonce to charge without vaulting
    #[serde(rename = "paymentMethodNonce", skip_serializing_if = "Option::is_none")]
    pub payment_method_nonce: Option<String>,
    /// Transaction options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransactionOptions>,
}

/// Options applied when creating a transaction
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionOptions {
    /// Submit the transaction for settlement immediately
    #[serde(rename = "submitForSettlement", skip_serializing_if = "Option::is_none")]
    pub submit_for_settlement: Option<bool>,
}

impl TransactionRequest {
    /// Create a sale request for the given amount
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            payment_method_token: None,
            payment_method_nonce: None,
            options: None,
        }
    }

    /// Charge a vaulted payment method
    pub fn with_payment_method_token(mut self, token: impl Into<String>) -> Self {
        self.payment_method_token = Some(token.into());
        self
    }

    /// Charge a one-time-use nonce
    pub fn with_payment_method_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.payment_method_nonce = Some(nonce.into());
        self
    }

    /// Submit for settlement immediately
    pub fn submit_for_settlement(mut self) -> Self {
        self.options = Some(TransactionOptions {
            submit_for_settlement: Some(true),
        });
        self
    }
}
