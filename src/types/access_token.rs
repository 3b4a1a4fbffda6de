//! OAuth access token types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials issued by the gateway's OAuth token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer token itself
    #[serde(rename = "accessToken")]
    pub token: String,
    /// Token type, always "bearer" today
    #[serde(rename = "tokenType", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// When the token expires
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Space-separated scopes granted to the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Refresh token for obtaining a replacement
    #[serde(rename = "refreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl AccessToken {
    /// Whether the token has expired as of now
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }
}
