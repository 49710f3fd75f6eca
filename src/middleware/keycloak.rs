//! Keycloak middleware layer and service.
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use keycloak_openid::{Config, KeycloakAuthLayer};
//!
//! # fn main() -> keycloak_openid::AuthResult<()> {
//! let layer = KeycloakAuthLayer::new(Config::from_env(), "keycloak")?;
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "ok" }))
//!     .layer(layer);
//! # Ok(())
//! # }
//! ```
//!
//! Handlers behind the layer read the settings through
//! `Extension<Arc<ProviderSettings>>`.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};
use tracing::debug;

use crate::config::Config;
use crate::error::AuthResult;
use crate::provider::ProviderSettings;

/// Build a ready service wrapping `next` from a raw configuration.
///
/// Runs the full bootstrap pipeline once. On failure nothing is
/// constructed and `next` is dropped.
///
/// # Errors
///
/// Propagates the first pipeline failure (see [`ProviderSettings::from_config`]).
pub fn new<S>(next: S, config: Config, name: &str) -> AuthResult<KeycloakAuthService<S>> {
    Ok(KeycloakAuthLayer::new(config, name)?.layer(next))
}

/// Keycloak authentication layer.
///
/// Cloning is cheap; all clones share one `ProviderSettings`.
#[derive(Debug, Clone)]
pub struct KeycloakAuthLayer {
    settings: Arc<ProviderSettings>,
}

impl KeycloakAuthLayer {
    /// Validate `config` and create the layer.
    ///
    /// # Arguments
    ///
    /// * `config` - Raw configuration; credential files are resolved here
    /// * `name` - Instance name assigned by the host, used in logs
    ///
    /// # Errors
    ///
    /// Propagates the first pipeline failure (see [`ProviderSettings::from_config`]).
    pub fn new(config: Config, name: &str) -> AuthResult<Self> {
        let settings = ProviderSettings::from_config(config, name)?;
        Ok(Self::from_settings(Arc::new(settings)))
    }

    /// Create a layer around settings that were already resolved.
    pub fn from_settings(settings: Arc<ProviderSettings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Arc<ProviderSettings> {
        &self.settings
    }
}

impl<S> Layer<S> for KeycloakAuthLayer {
    type Service = KeycloakAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        KeycloakAuthService {
            inner,
            settings: self.settings.clone(),
        }
    }
}

/// Keycloak authentication service wrapper.
#[derive(Debug, Clone)]
pub struct KeycloakAuthService<S> {
    inner: S,
    settings: Arc<ProviderSettings>,
}

impl<S> KeycloakAuthService<S> {
    pub fn settings(&self) -> &Arc<ProviderSettings> {
        &self.settings
    }
}

impl<S, B> Service<Request<B>> for KeycloakAuthService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        debug!(
            instance = self.settings.name(),
            realm = self.settings.realm(),
            path = req.uri().path(),
            "Forwarding request with Keycloak settings"
        );
        req.extensions_mut().insert(self.settings.clone());
        self.inner.call(req)
    }
}
