//! PayPal account operations

use super::{extract, outcome_from, validate_identifier, Gateway};
use crate::result::Outcome;
use crate::types::{PayPalAccount, PayPalAccountUpdateRequest, Transaction, TransactionRequest};
use crate::Result;
use rust_decimal::Decimal;
use serde_json::json;

/// Gateway for vaulted PayPal account operations
#[derive(Debug)]
pub struct PayPalAccountGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> PayPalAccountGateway<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Find a vaulted PayPal account by token
    ///
    /// Tokens belonging to a different payment method type are a remote
    /// 404, surfaced as [`NotFound`](crate::BraintreeError::NotFound).
    pub async fn find(&self, token: &str) -> Result<PayPalAccount> {
        validate_identifier("paypal account", "token", token)?;
        let path = self.path(token)?;
        let body = self.gateway.get(&path).await?;
        extract(&body, "paypalAccount")
    }

    /// Update a vaulted PayPal account
    pub async fn update(
        &self,
        token: &str,
        request: &PayPalAccountUpdateRequest,
    ) -> Result<Outcome<PayPalAccount>> {
        validate_identifier("paypal account", "token", token)?;
        let path = self.path(token)?;
        let body = json!({ "paypalAccount": request });
        let response = self.gateway.put(&path, &body).await?;
        outcome_from(response, "paypalAccount")
    }

    /// Delete a vaulted PayPal account
    pub async fn delete(&self, token: &str) -> Result<()> {
        validate_identifier("paypal account", "token", token)?;
        let path = self.path(token)?;
        self.gateway.delete(&path).await
    }

    /// Charge a vaulted PayPal account
    pub async fn sale(&self, token: &str, amount: Decimal) -> Result<Outcome<Transaction>> {
        validate_identifier("paypal account", "token", token)?;
        let request = TransactionRequest::new(amount).with_payment_method_token(token);
        self.gateway.transaction().sale(&request).await
    }

    fn path(&self, token: &str) -> Result<String> {
        self.gateway
            .merchant_path(&format!("/payment_methods/paypal_accounts/{}", token))
    }
}
