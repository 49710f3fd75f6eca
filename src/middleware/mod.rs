//! Tower middleware that activates Keycloak OpenID Connect settings.
//!
//! # Architecture
//!
//! ```text
//! Config ─► KeycloakAuthLayer::new ─► layer(inner) ─► KeycloakAuthService
//!                (validated once)                        │
//! Request ───────────────────────────────────────────────┤ + Arc<ProviderSettings>
//!                                                        ▼   in extensions
//!                                                    inner service
//! ```
//!
//! Construction is the only place configuration can fail. Once a layer
//! exists, every request sees the same immutable settings.

pub mod keycloak;

pub use keycloak::{KeycloakAuthLayer, KeycloakAuthService, new};
