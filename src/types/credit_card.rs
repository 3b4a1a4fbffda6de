//! Credit card resource types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vaulted credit card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    /// Payment method token identifying this card in the vault
    pub token: String,
    /// Id of the customer the card belongs to
    #[serde(rename = "customerId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// First six digits of the card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    /// Last four digits of the card number
    #[serde(rename = "last4", skip_serializing_if = "Option::is_none")]
    pub last_4: Option<String>,
    /// Name on the card
    #[serde(rename = "cardholderName", skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    /// Two-digit expiration month
    #[serde(rename = "expirationMonth", skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    /// Four-digit expiration year
    #[serde(rename = "expirationYear", skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    /// Card brand (e.g. "Visa", "MasterCard")
    #[serde(rename = "cardType", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Whether this is the customer's default payment method
    #[serde(default)]
    pub default: bool,
    /// URL of the card-brand image
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When the card was vaulted
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreditCard {
    /// Expiration as "MM/YYYY", when both parts are present
    pub fn expiration_date(&self) -> Option<String> {
        match (&self.expiration_month, &self.expiration_year) {
            (Some(month), Some(year)) => Some(format!("{}/{}", month, year)),
            _ => None,
        }
    }
}

/// Parameters for vaulting a credit card
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreditCardRequest {
    /// Id of the customer to attach the card to
    #[serde(rename = "customerId")]
    pub customer_id: String,
    /// Raw card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Card verification value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    /// Expiration as "MM/YY" or "MM/YYYY"
    #[serde(rename = "expirationDate", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Name on the card
    #[serde(rename = "cardholderName", skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    /// Caller-chosen token; the gateway assigns one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CreditCardRequest {
    /// Create a request for the given customer
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Self::default()
        }
    }

    /// Set the card number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Set the expiration date
    pub fn with_expiration_date(mut self, expiration_date: impl Into<String>) -> Self {
        self.expiration_date = Some(expiration_date.into());
        self
    }

    /// Set the cardholder name
    pub fn with_cardholder_name(mut self, cardholder_name: impl Into<String>) -> Self {
        self.cardholder_name = Some(cardholder_name.into());
        self
    }

    /// Set an explicit payment method token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
