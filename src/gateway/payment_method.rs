//! Payment method operations
//!
//! Vaulting goes through a one-time-use nonce; the gateway answers with
//! whichever concrete payment method the nonce represented.

use super::{extract, Gateway, GatewayResponse};
use crate::result::{Failed, Outcome};
use crate::types::{PaymentMethod, PaymentMethodRequest};
use crate::{BraintreeError, Result};
use serde_json::json;

/// Gateway for payment method operations
#[derive(Debug)]
pub struct PaymentMethodGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> PaymentMethodGateway<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Vault a payment method from a nonce
    pub async fn create(&self, request: &PaymentMethodRequest) -> Result<Outcome<PaymentMethod>> {
        let path = self.gateway.merchant_path("/payment_methods")?;
        let body = json!({ "paymentMethod": request });

        match self.gateway.post(&path, &body).await? {
            GatewayResponse::Ok(body) => {
                let payment_method = if body.get("creditCard").is_some() {
                    PaymentMethod::CreditCard(extract(&body, "creditCard")?)
                } else if body.get("paypalAccount").is_some() {
                    PaymentMethod::PayPalAccount(extract(&body, "paypalAccount")?)
                } else {
                    return Err(BraintreeError::unexpected_response(
                        "response carried no recognizable payment method",
                    ));
                };
                Ok(Outcome::successful("paymentMethod", payment_method))
            }
            GatewayResponse::Unprocessable(body) => {
                Ok(Outcome::failed(Failed::from_value(&body)?))
            }
        }
    }
}
