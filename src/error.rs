use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bootstrapping the Keycloak middleware.
///
/// Every variant is fatal to construction: the host is expected to refuse
/// to serve traffic rather than run with a half-validated configuration.
///
/// # Ordering
///
/// The bootstrap pipeline reports failures in a fixed order:
///
/// 1. `SecretFileRead` - credential files are resolved first
/// 2. `InvalidConfiguration` - mandatory fields are checked next
/// 3. `EmptyUrl` / `MalformedUrl` / `UnsupportedScheme` / `OpaqueUrl` - the provider URL last
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid empty url")]
    EmptyUrl,

    #[error("malformed identity provider url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("{0} is not a valid scheme")]
    UnsupportedScheme(String),

    #[error("{0} has no host to derive realm endpoints from")]
    OpaqueUrl(String),

    #[error("failed to read {field} from {}: {source}", .path.display())]
    SecretFileRead {
        /// Which credential was being resolved (`client_id` or `client_secret`)
        field: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to parse configuration: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid environment: {0}")]
    Environment(String),
}

impl AuthError {
    /// Stable, machine-friendly tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::EmptyUrl => "empty_url",
            AuthError::MalformedUrl(_) => "malformed_url",
            AuthError::UnsupportedScheme(_) => "unsupported_scheme",
            AuthError::OpaqueUrl(_) => "opaque_url",
            AuthError::SecretFileRead { .. } => "secret_file_read",
            AuthError::InvalidConfiguration(_) => "invalid_configuration",
            AuthError::Deserialize(_) => "deserialize",
            AuthError::Environment(_) => "environment",
        }
    }
}

/// Convenience type alias for Results with AuthError.
pub type AuthResult<T> = Result<T, AuthError>;
