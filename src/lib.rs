//! # Keycloak OpenID
//!
//! Construction-time layer of a Keycloak OpenID Connect middleware for
//! Axum/Tower. It turns a declarative configuration into an immutable,
//! request-ready middleware, failing fast on anything malformed:
//!
//! - **Secret files**: client id and secret may be given inline or by path
//! - **Validation**: client id and realm are mandatory
//! - **URL normalization**: bare hosts default to `https://`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config (JSON manifest / KEYCLOAK_* environment)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Secret files → mandatory fields → provider URL             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProviderSettings (immutable, Arc-shared)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  KeycloakAuthLayer / KeycloakAuthService (Tower)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keycloak_openid::{Config, KeycloakAuthLayer, build_router};
//!
//! # fn main() -> keycloak_openid::AuthResult<()> {
//! let config = Config::from_json(r#"{
//!     "url": "idp.example.com",
//!     "client_id_file": "/run/secrets/keycloak_client_id",
//!     "keycloak_realm": "master"
//! }"#)?;
//! let layer = KeycloakAuthLayer::new(config, "keycloak")?;
//! let app = build_router(layer);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod provider;
pub mod registry;
pub mod routes;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use config::{Config, ServerConfig};
pub use error::{AuthError, AuthResult};
pub use middleware::{KeycloakAuthLayer, KeycloakAuthService, new};
pub use models::{RedirectState, TokenResponse};
pub use provider::ProviderSettings;
pub use registry::InstanceRegistry;
pub use routes::build_router;
pub use validation::parse_provider_url;
