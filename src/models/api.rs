use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service health status
    pub status: String,
    /// Service version
    pub version: String,
    /// Current timestamp
    pub timestamp: DateTime<Utc>,
}

/// Public view of the active provider settings.
///
/// Deliberately has no field for the client secret.
#[derive(Debug, Serialize)]
pub struct ProviderInfoResponse {
    pub instance: String,
    pub realm: String,
    pub client_id: String,
    /// Realm URL, which Keycloak uses as the token issuer
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub end_session_endpoint: String,
}
