//! Gateway clients for the Braintree API
//!
//! A [`Gateway`] owns the HTTP client and validated configuration; the
//! per-resource gateways borrow it and expose the actual operations:
//!
//! - [`CustomerGateway`] - customer create/find
//! - [`CreditCardGateway`] - credit card vaulting and lookup
//! - [`PaymentMethodGateway`] - vaulting payment methods from nonces
//! - [`PayPalAccountGateway`] - PayPal account lookup, update, delete, sale
//! - [`TransactionGateway`] - sale transactions
//! - [`OAuthGateway`] - OAuth access token exchange
//!
//! # Examples
//!
//! ```no_run
//! use rust_braintree::{Config, Gateway};
//!
//! # async fn example() -> rust_braintree::Result<()> {
//! let config = Config::sandbox("merchant_id", "public_key", "private_key");
//! let gateway = Gateway::new(config)?;
//!
//! let account = gateway.paypal_account().find("the-token").await?;
//! println!("PayPal account email: {:?}", account.email);
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::result::{Failed, Outcome};
use crate::{BraintreeError, Result};
use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod credit_card;
pub mod customer;
pub mod oauth;
pub mod payment_method;
pub mod paypal_account;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use credit_card::CreditCardGateway;
pub use customer::CustomerGateway;
pub use oauth::OAuthGateway;
pub use payment_method::PaymentMethodGateway;
pub use paypal_account::PayPalAccountGateway;
pub use transaction::TransactionGateway;

/// Decoded HTTP response from the gateway
///
/// Validation rejections (422) are data, not errors, so the plumbing
/// hands both sides back to the resource gateways and lets each decide
/// whether an unprocessable response is expected for its operation.
#[derive(Debug)]
pub(crate) enum GatewayResponse {
    /// 2xx with a decoded body (Null for 204)
    Ok(Value),
    /// 4xx carrying a validation-error body
    Unprocessable(Value),
}

/// Root client for the Braintree gateway
#[derive(Debug, Clone)]
pub struct Gateway {
    config: Config,
    client: Client,
}

impl Gateway {
    /// Create a new gateway client from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();
        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| BraintreeError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Customer operations
    pub fn customer(&self) -> CustomerGateway<'_> {
        CustomerGateway::new(self)
    }

    /// Credit card operations
    pub fn credit_card(&self) -> CreditCardGateway<'_> {
        CreditCardGateway::new(self)
    }

    /// Payment method operations
    pub fn payment_method(&self) -> PaymentMethodGateway<'_> {
        PaymentMethodGateway::new(self)
    }

    /// PayPal account operations
    pub fn paypal_account(&self) -> PayPalAccountGateway<'_> {
        PayPalAccountGateway::new(self)
    }

    /// Transaction operations
    pub fn transaction(&self) -> TransactionGateway<'_> {
        TransactionGateway::new(self)
    }

    /// OAuth operations
    pub fn oauth(&self) -> OAuthGateway<'_> {
        OAuthGateway::new(self)
    }

    /// The configuration this gateway was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Prefix a path with the merchant-scoped API root
    pub(crate) fn merchant_path(&self, suffix: &str) -> Result<String> {
        Ok(format!("{}{}", self.config.merchant_path()?, suffix))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        match self.request(Method::GET, path, None).await? {
            GatewayResponse::Ok(body) => Ok(body),
            GatewayResponse::Unprocessable(_) => Err(BraintreeError::unexpected_response(
                format!("GET {} was rejected as unprocessable", path),
            )),
        }
    }

    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<GatewayResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put(&self, path: &str, body: &Value) -> Result<GatewayResponse> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        match self.request(Method::DELETE, path, None).await? {
            GatewayResponse::Ok(_) => Ok(()),
            GatewayResponse::Unprocessable(_) => Err(BraintreeError::unexpected_response(
                format!("DELETE {} was rejected as unprocessable", path),
            )),
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<GatewayResponse> {
        let url = format!("{}{}", self.config.base_url(), path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url.as_str())
            .header(header::AUTHORIZATION, self.config.authorization_header())
            .header(header::ACCEPT, "application/json")
            .header(
                header::USER_AGENT,
                format!("rust-braintree/{}", crate::VERSION),
            );
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        match status {
            s if s.is_success() => {
                if s == StatusCode::NO_CONTENT {
                    Ok(GatewayResponse::Ok(Value::Null))
                } else {
                    Ok(GatewayResponse::Ok(response.json().await?))
                }
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body: Value = response.json().await.map_err(|e| {
                    BraintreeError::unexpected_response(format!(
                        "undecodable validation-error body: {}",
                        e
                    ))
                })?;
                tracing::debug!(
                    "Gateway rejected {} with status {}: {}",
                    url,
                    status,
                    serde_json::to_string(&body).unwrap_or_default()
                );
                Ok(GatewayResponse::Unprocessable(body))
            }
            StatusCode::UNAUTHORIZED => Err(BraintreeError::Authentication(
                "gateway rejected the provided credentials".to_string(),
            )),
            StatusCode::FORBIDDEN => Err(BraintreeError::Authorization(
                "credentials are not permitted for this call".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(BraintreeError::not_found(format!(
                "no resource at {}",
                path
            ))),
            s if s.is_server_error() => {
                tracing::error!("Gateway server error {} for {}", s, url);
                Err(BraintreeError::ServerError(format!(
                    "gateway returned status {}",
                    s
                )))
            }
            s => Err(BraintreeError::unexpected_response(format!(
                "unexpected status {} from {}",
                s, url
            ))),
        }
    }
}

/// Deserialize the object under `field` in a response body
pub(crate) fn extract<T: DeserializeOwned>(body: &Value, field: &str) -> Result<T> {
    let raw = body.get(field).ok_or_else(|| {
        BraintreeError::unexpected_response(format!("response body missing \"{}\"", field))
    })?;
    Ok(serde_json::from_value(raw.clone())?)
}

/// Turn a write-style response into an [`Outcome`]
pub(crate) fn outcome_from<T: DeserializeOwned>(
    response: GatewayResponse,
    field: &'static str,
) -> Result<Outcome<T>> {
    match response {
        GatewayResponse::Ok(body) => Ok(Outcome::successful(field, extract(&body, field)?)),
        GatewayResponse::Unprocessable(body) => Ok(Outcome::failed(Failed::from_value(&body)?)),
    }
}

/// Reject malformed lookup identifiers before any remote call
///
/// Matches the remote vault's token alphabet: letters, digits, `-`, `_`.
/// `noun` names the kind of identifier in the malformed-value message:
/// customers are looked up by "id", payment methods by "token".
pub(crate) fn validate_identifier(kind: &str, noun: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BraintreeError::invalid_argument(format!(
            "expected {} id to be set",
            kind
        )));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(BraintreeError::invalid_argument(format!(
            "{} is an invalid {} {}",
            value, kind, noun
        )));
    }
    Ok(())
}
