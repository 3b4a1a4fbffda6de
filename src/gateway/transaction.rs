//! Transaction operations

use super::{outcome_from, Gateway};
use crate::result::Outcome;
use crate::types::{Transaction, TransactionRequest};
use crate::{BraintreeError, Result};
use serde_json::json;

/// Gateway for transaction operations
#[derive(Debug)]
pub struct TransactionGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> TransactionGateway<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Create a sale transaction, reporting validation failures in the outcome
    pub async fn sale(&self, request: &TransactionRequest) -> Result<Outcome<Transaction>> {
        let path = self.gateway.merchant_path("/transactions")?;

        let mut transaction = serde_json::to_value(request)?;
        let object = transaction.as_object_mut().ok_or_else(|| {
            BraintreeError::unexpected_response("transaction request did not serialize to an object")
        })?;
        object.insert("type".to_string(), json!("sale"));

        let body = json!({ "transaction": transaction });
        let response = self.gateway.post(&path, &body).await?;
        outcome_from(response, "transaction")
    }
}
