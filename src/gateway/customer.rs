//! Customer operations

use super::{extract, outcome_from, validate_identifier, Gateway};
use crate::result::Outcome;
use crate::types::{Customer, CustomerRequest};
use crate::{BraintreeError, Result};
use serde_json::json;

/// Gateway for customer operations
#[derive(Debug)]
pub struct CustomerGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> CustomerGateway<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Create a customer, reporting validation failures in the outcome
    pub async fn create(&self, request: &CustomerRequest) -> Result<Outcome<Customer>> {
        let path = self.gateway.merchant_path("/customers")?;
        let body = json!({ "customer": request });
        let response = self.gateway.post(&path, &body).await?;
        outcome_from(response, "customer")
    }

    /// Create a customer, treating validation failure as a hard error
    ///
    /// Convenience for test setup and callers that send no
    /// gateway-validated fields.
    pub async fn create_no_validate(&self, request: &CustomerRequest) -> Result<Customer> {
        match self.create(request).await? {
            Outcome::Successful(success) => Ok(success.into_payload()),
            Outcome::Failed(failed) => Err(BraintreeError::ValidationsFailed(
                failed
                    .message()
                    .unwrap_or("customer creation failed")
                    .to_string(),
            )),
        }
    }

    /// Find a customer by id
    ///
    /// A well-formed but unknown id surfaces the remote 404 as
    /// [`BraintreeError::NotFound`]; a malformed id is rejected locally.
    pub async fn find(&self, id: &str) -> Result<Customer> {
        validate_identifier("customer", "id", id)?;
        let path = self.gateway.merchant_path(&format!("/customers/{}", id))?;
        let body = self.gateway.get(&path).await?;
        extract(&body, "customer")
    }
}
