//! Credit card operations

use super::{extract, outcome_from, validate_identifier, Gateway};
use crate::result::Outcome;
use crate::types::{CreditCard, CreditCardRequest};
use crate::Result;
use serde_json::json;

/// Gateway for credit card operations
#[derive(Debug)]
pub struct CreditCardGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> CreditCardGateway<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Vault a credit card, reporting validation failures in the outcome
    pub async fn create(&self, request: &CreditCardRequest) -> Result<Outcome<CreditCard>> {
        let path = self
            .gateway
            .merchant_path("/payment_methods/credit_cards")?;
        let body = json!({ "creditCard": request });
        let response = self.gateway.post(&path, &body).await?;
        outcome_from(response, "creditCard")
    }

    /// Find a vaulted credit card by token
    pub async fn find(&self, token: &str) -> Result<CreditCard> {
        validate_identifier("credit card", "token", token)?;
        let path = self
            .gateway
            .merchant_path(&format!("/payment_methods/credit_cards/{}", token))?;
        let body = self.gateway.get(&path).await?;
        extract(&body, "creditCard")
    }
}
