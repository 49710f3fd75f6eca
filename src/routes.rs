//! Demo application router.
//!
//! # Middleware Stack (applied in order)
//!
//! ```text
//! Request
//!    │
//!    ▼
//! ┌──────────────────┐
//! │     Keycloak     │ ← Attaches Arc<ProviderSettings> to the request
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │     Tracing      │ ← HTTP request/response logging
//! └────────┬─────────┘
//!          │
//!          ▼
//!      Handler
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness
//! - `GET /provider` - Active realm, client and derived endpoints

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::middleware::KeycloakAuthLayer;

/// Build the application router around an already validated layer.
pub fn build_router(keycloak: KeycloakAuthLayer) -> Router {
    info!(
        instance = keycloak.settings().name(),
        realm = keycloak.settings().realm(),
        "Mounting Keycloak middleware"
    );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/provider", get(handlers::provider_info))
        .layer(TraceLayer::new_for_http())
        .layer(keycloak)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn layer() -> KeycloakAuthLayer {
        let config = Config {
            keycloak_url: "https://idp.example.com/auth".to_string(),
            client_id: "gateway".to_string(),
            client_secret: "s3cr3t".to_string(),
            keycloak_realm: "master".to_string(),
            ..Config::default()
        };
        KeycloakAuthLayer::new(config, "keycloak").unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = build_router(layer())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_provider_route_hides_secret() {
        let response = build_router(layer())
            .oneshot(Request::builder().uri("/provider").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["realm"], "master");
        assert_eq!(json["client_id"], "gateway");
        assert_eq!(json["issuer"], "https://idp.example.com/auth/realms/master");
        assert!(!String::from_utf8_lossy(&body).contains("s3cr3t"));
    }
}
