//! PayPal account resource types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vaulted PayPal account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPalAccount {
    /// Payment method token identifying this account in the vault
    pub token: String,
    /// Email of the PayPal account holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Id of the customer the account belongs to
    #[serde(rename = "customerId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Billing agreement backing the vaulted account
    #[serde(rename = "billingAgreementId", skip_serializing_if = "Option::is_none")]
    pub billing_agreement_id: Option<String>,
    /// Whether this is the customer's default payment method
    #[serde(default)]
    pub default: bool,
    /// URL of the PayPal logo image
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When the account was vaulted
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the account was last updated
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parameters for updating a vaulted PayPal account
#[derive(Debug, Clone, Default, Serialize)]
pub struct PayPalAccountUpdateRequest {
    /// New payment method token to move the account to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Update options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PayPalAccountOptions>,
}

/// Options applied when updating a PayPal account
#[derive(Debug, Clone, Default, Serialize)]
pub struct PayPalAccountOptions {
    /// Make this account the customer's default payment method
    #[serde(rename = "makeDefault", skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,
}

impl PayPalAccountUpdateRequest {
    /// Create an empty update request
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the account to a new token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Make the account the customer's default payment method
    pub fn make_default(mut self) -> Self {
        self.options = Some(PayPalAccountOptions {
            make_default: Some(true),
        });
        self
    }
}
