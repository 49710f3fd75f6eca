use std::sync::Arc;

use axum::{Extension, Json};
use tracing::instrument;

use crate::models::ProviderInfoResponse;
use crate::provider::ProviderSettings;

/// Describe the provider the middleware was activated against.
///
/// Reads the settings the Keycloak layer attaches to every request.
#[instrument(skip_all)]
pub async fn provider_info(
    Extension(settings): Extension<Arc<ProviderSettings>>,
) -> Json<ProviderInfoResponse> {
    Json(ProviderInfoResponse {
        instance: settings.name().to_string(),
        realm: settings.realm().to_string(),
        client_id: settings.client_id().to_string(),
        issuer: settings.realm_url().to_string(),
        authorization_endpoint: settings.authorization_endpoint().to_string(),
        token_endpoint: settings.token_endpoint().to_string(),
        userinfo_endpoint: settings.userinfo_endpoint().to_string(),
        end_session_endpoint: settings.end_session_endpoint().to_string(),
    })
}
