//! Resolved, immutable identity provider settings.
//!
//! [`ProviderSettings`] is what the bootstrap pipeline produces. It is built
//! once per middleware activation and then shared read-only (behind an
//! `Arc`) by every request, so it carries no interior mutability.
//!
//! # Pipeline
//!
//! ```text
//! Config ──► resolve secret files ──► validate fields ──► parse URL ──► ProviderSettings
//!                  │                        │                  │
//!           SecretFileRead         InvalidConfiguration   EmptyUrl / MalformedUrl /
//!                                                          UnsupportedScheme / OpaqueUrl
//! ```
//!
//! The first failure aborts construction; no partial value is returned.

use std::fmt;

use tracing::{info, warn};
use url::Url;

use crate::config::{Config, redact};
use crate::error::{AuthError, AuthResult};
use crate::validation::parse_provider_url;

/// Settings for one activated middleware instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    name: String,
    url: Url,
    client_id: String,
    client_secret: String,
    realm: String,
}

impl ProviderSettings {
    /// Run the bootstrap pipeline on `config`.
    ///
    /// `config` is consumed: secret resolution rewrites its credential
    /// fields in place before anything is validated.
    ///
    /// # Errors
    ///
    /// Returns the first failure in pipeline order (secret files, then
    /// mandatory fields, then the provider URL).
    pub fn from_config(mut config: Config, name: &str) -> AuthResult<Self> {
        let result = Self::build(&mut config, name);

        match &result {
            Ok(settings) => info!(
                instance = name,
                realm = %settings.realm,
                client_id = %settings.client_id,
                url = %settings.url,
                "Keycloak middleware configured"
            ),
            Err(e) => warn!(
                instance = name,
                kind = e.kind(),
                error = %e,
                "Keycloak middleware configuration rejected"
            ),
        }

        result
    }

    fn build(config: &mut Config, name: &str) -> AuthResult<Self> {
        config.resolve_secret_files()?;
        config.validate()?;
        let url = parse_provider_url(&config.keycloak_url)?;

        // The loose scheme check admits opaque forms like `httpx:opaque://x`,
        // which cannot have `realms/<realm>` appended.
        if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
            return Err(AuthError::OpaqueUrl(url.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            url,
            client_id: std::mem::take(&mut config.client_id),
            client_secret: std::mem::take(&mut config.client_secret),
            realm: std::mem::take(&mut config.keycloak_realm),
        })
    }

    /// Instance name given by the host at activation time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized identity provider base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Client secret; empty for public clients.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Realm base URL, `<url>/realms/<realm>`. Also the token issuer.
    pub fn realm_url(&self) -> Url {
        self.endpoint(&[])
    }

    /// Discovery document location.
    pub fn openid_configuration_url(&self) -> Url {
        self.endpoint(&[".well-known", "openid-configuration"])
    }

    pub fn authorization_endpoint(&self) -> Url {
        self.openid_connect_endpoint("auth")
    }

    pub fn token_endpoint(&self) -> Url {
        self.openid_connect_endpoint("token")
    }

    pub fn userinfo_endpoint(&self) -> Url {
        self.openid_connect_endpoint("userinfo")
    }

    pub fn end_session_endpoint(&self) -> Url {
        self.openid_connect_endpoint("logout")
    }

    fn openid_connect_endpoint(&self, leaf: &str) -> Url {
        self.endpoint(&["protocol", "openid-connect", leaf])
    }

    /// Append `realms/<realm>/<segments..>` to the base URL path.
    ///
    /// Query and fragment of the base URL are dropped.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.url.clone();
        url.set_query(None);
        url.set_fragment(None);

        // `build` rejects cannot-be-a-base URLs, the only ones refusing segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .push("realms")
                .push(&self.realm)
                .extend(segments);
        }

        url
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("name", &self.name)
            .field("url", &self.url.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("realm", &self.realm)
            .finish()
    }
}
