//! Client configuration
//!
//! Credentials are injected here, never read from global state. A config
//! is validated before a [`Gateway`](crate::gateway::Gateway) is built
//! from it, so a client holding a `Gateway` always has a usable config.

use crate::types::environments;
use crate::{BraintreeError, Result};
use base64::{engine::general_purpose, Engine as _};
use std::time::Duration;

/// Gateway environment selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production gateway
    Production,
    /// Sandbox gateway for integration testing
    Sandbox,
    /// Local development gateway
    Development,
}

impl Environment {
    /// Base API host for this environment
    pub fn host(&self) -> &'static str {
        match self {
            Self::Production => environments::PRODUCTION_HOST,
            Self::Sandbox => environments::SANDBOX_HOST,
            Self::Development => environments::DEVELOPMENT_HOST,
        }
    }
}

/// Credentials used to authenticate against the gateway
#[derive(Clone)]
pub enum Credentials {
    /// Merchant API key pair, the usual server-to-server credential
    ApiKeys {
        /// Merchant account identifier
        merchant_id: String,
        /// Public half of the API key pair
        public_key: String,
        /// Private half of the API key pair
        private_key: String,
    },
    /// OAuth application credentials, used for the token endpoint
    ClientCredentials {
        /// OAuth client id
        client_id: String,
        /// OAuth client secret
        client_secret: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKeys { merchant_id, .. } => f
                .debug_struct("ApiKeys")
                .field("merchant_id", merchant_id)
                .field("public_key", &"<redacted>")
                .field("private_key", &"<redacted>")
                .finish(),
            Self::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
        }
    }
}

/// Gateway client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Target environment
    pub environment: Environment,
    /// Authentication credentials
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Explicit base URL, overriding the environment host
    pub base_url: Option<String>,
}

impl Config {
    /// Create a sandbox config from a merchant API key pair
    pub fn sandbox(
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self::new(
            Environment::Sandbox,
            Credentials::ApiKeys {
                merchant_id: merchant_id.into(),
                public_key: public_key.into(),
                private_key: private_key.into(),
            },
        )
    }

    /// Create a config from an OAuth client id/secret pair
    pub fn for_client_credentials(
        environment: Environment,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self::new(
            environment,
            Credentials::ClientCredentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
        )
    }

    /// Create a config from an environment and credentials
    pub fn new(environment: Environment, credentials: Credentials) -> Self {
        Self {
            environment,
            credentials,
            timeout: None,
            base_url: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the environment host with an explicit base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match &self.credentials {
            Credentials::ApiKeys {
                merchant_id,
                public_key,
                private_key,
            } => {
                if merchant_id.is_empty() {
                    return Err(BraintreeError::config("merchant id cannot be empty"));
                }
                if public_key.is_empty() || private_key.is_empty() {
                    return Err(BraintreeError::config("API key pair cannot be empty"));
                }
            }
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => {
                if client_id.is_empty() || client_secret.is_empty() {
                    return Err(BraintreeError::config(
                        "OAuth client credentials cannot be empty",
                    ));
                }
            }
        }

        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(BraintreeError::config(
                    "base URL must start with http:// or https://",
                ));
            }
        }

        Ok(())
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.host())
    }

    /// The merchant-scoped API root, e.g. `/merchants/<id>`
    ///
    /// Only meaningful for API-key credentials; OAuth endpoints live
    /// outside the merchant scope.
    pub fn merchant_path(&self) -> Result<String> {
        match &self.credentials {
            Credentials::ApiKeys { merchant_id, .. } => {
                Ok(format!("/merchants/{}", merchant_id))
            }
            Credentials::ClientCredentials { .. } => Err(BraintreeError::config(
                "merchant-scoped calls require API key credentials",
            )),
        }
    }

    /// HTTP Basic authorization header value for these credentials
    pub fn authorization_header(&self) -> String {
        let pair = match &self.credentials {
            Credentials::ApiKeys {
                public_key,
                private_key,
                ..
            } => format!("{}:{}", public_key, private_key),
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => format!("{}:{}", client_id, client_secret),
        };
        format!("Basic {}", general_purpose::STANDARD.encode(pair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_config() {
        let config = Config::sandbox("integration_merchant_id", "public", "private");
        config.validate().unwrap();
        assert_eq!(config.base_url(), environments::SANDBOX_HOST);
        assert_eq!(
            config.merchant_path().unwrap(),
            "/merchants/integration_merchant_id"
        );
    }

    #[test]
    fn test_base_url_override() {
        let config =
            Config::sandbox("m", "pub", "priv").with_base_url("http://127.0.0.1:9292");
        config.validate().unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9292");
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let config = Config::sandbox("", "public", "private");
        assert!(config.validate().is_err());

        let config =
            Config::for_client_credentials(Environment::Development, "client_id", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_base_url_rejected() {
        let config = Config::sandbox("m", "pub", "priv").with_base_url("localhost:9292");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_authorization_header_is_basic() {
        let config = Config::sandbox("m", "public", "private");
        let header = config.authorization_header();
        assert!(header.starts_with("Basic "));

        use base64::{engine::general_purpose, Engine as _};
        let decoded = general_purpose::STANDARD
            .decode(header.trim_start_matches("Basic "))
            .unwrap();
        assert_eq!(decoded, b"public:private");
    }

    #[test]
    fn test_merchant_path_requires_api_keys() {
        let config = Config::for_client_credentials(Environment::Sandbox, "id", "secret");
        assert!(config.merchant_path().is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let config = Config::sandbox("m", "public_key_value", "private_key_value");
        let debugged = format!("{:?}", config);
        assert!(!debugged.contains("private_key_value"));
        assert!(debugged.contains("<redacted>"));
    }
}
