//! OAuth access token exchange
//!
//! Token exchange authenticates with the application's client id/secret
//! pair rather than merchant API keys, and lives outside the merchant
//! path scope. Rejected codes come back as a failed outcome whose error
//! collection holds the OAuth error under the "credentials" key, so the
//! caller reads them the same way as any other validation failure.

use super::{extract, Gateway, GatewayResponse};
use crate::config::Credentials;
use crate::result::{Failed, Outcome};
use crate::types::AccessToken;
use crate::{BraintreeError, Result};
use serde_json::{json, Value};

/// Gateway for OAuth operations
#[derive(Debug)]
pub struct OAuthGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> OAuthGateway<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Exchange an authorization code for an access token
    pub async fn create_access_token(&self, code: &str) -> Result<Outcome<AccessToken>> {
        if !matches!(
            self.gateway.config().credentials,
            Credentials::ClientCredentials { .. }
        ) {
            return Err(BraintreeError::config(
                "access token exchange requires OAuth client credentials",
            ));
        }
        if code.is_empty() {
            return Err(BraintreeError::invalid_argument(
                "expected authorization code to be set",
            ));
        }

        let body = json!({
            "grantType": "authorization_code",
            "code": code,
        });

        match self.gateway.post("/oauth/access_tokens", &body).await? {
            GatewayResponse::Ok(body) => Ok(Outcome::successful(
                "credentials",
                extract(&body, "credentials")?,
            )),
            GatewayResponse::Unprocessable(body) => {
                Ok(Outcome::failed(oauth_failure(&body)?))
            }
        }
    }
}

/// Fold an OAuth error body into the standard validation-error shape
///
/// The token endpoint reports failures RFC 6749 style
/// (`{"error": "...", "errorDescription": "..."}`) instead of the
/// nested-errors shape the rest of the API uses.
fn oauth_failure(body: &Value) -> Result<Failed> {
    if body.get("errors").is_some() {
        return Failed::from_value(body);
    }

    let error = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("unknown_error");
    let description = body
        .get("errorDescription")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Failed::from_value(&json!({
        "errors": {
            "credentials": {
                "errors": [
                    {"code": error, "message": description, "attribute": "code"}
                ]
            }
        },
        "message": description,
    }))
}
