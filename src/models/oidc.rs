//! Data shapes exchanged with the identity provider during the
//! authorization-code flow.
//!
//! These types are only carried by this crate; populating and
//! interpreting them belongs to the request-time flow.

use serde::{Deserialize, Serialize};

use crate::error::AuthResult;

/// Token endpoint response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Usually `Bearer`
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: String,
}

/// State carried through the provider round trip so the original request
/// can be resumed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectState {
    pub redirect_url: String,
}

impl RedirectState {
    pub fn new(redirect_url: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
        }
    }

    /// Serialize for use as the OAuth `state` parameter.
    pub fn encode(&self) -> AuthResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a `state` parameter produced by [`RedirectState::encode`].
    pub fn decode(state: &str) -> AuthResult<Self> {
        Ok(serde_json::from_str(state)?)
    }
}
