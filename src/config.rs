//! Middleware configuration.
//!
//! # Sources
//!
//! A [`Config`] can be populated three ways:
//!
//! - Declaratively from a JSON manifest via [`Config::from_json`]
//! - From environment variables (or a `.env` file) via [`Config::from_env`]
//! - Directly in code, starting from [`Config::default`]
//!
//! Loading never validates. Validation happens once, during middleware
//! construction, in the order: secret files → mandatory fields → URL.
//!
//! # Environment Variables
//!
//! - `KEYCLOAK_URL`: Identity provider base URL (bare hosts default to `https://`)
//! - `KEYCLOAK_CLIENT_ID` / `KEYCLOAK_CLIENT_ID_FILE`: Client identifier, inline or from a file
//! - `KEYCLOAK_CLIENT_SECRET` / `KEYCLOAK_CLIENT_SECRET_FILE`: Client secret, inline or from a file
//! - `KEYCLOAK_REALM`: Realm name (required)
//!
//! # Secret Files
//!
//! File contents are used verbatim. A trailing newline written by
//! `echo secret > file` stays part of the credential.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Flat middleware configuration as supplied by the host.
///
/// Field names on the wire match the manifest keys used by existing
/// deployments (`url`, `client_id`, `keycloak_realm`, ...).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity provider base URL
    #[serde(rename = "url")]
    pub keycloak_url: String,

    /// Client identifier (may be empty when `client_id_file` is set)
    pub client_id: String,

    /// Client secret (may be empty for public clients or when `client_secret_file` is set)
    pub client_secret: String,

    /// Realm name (required)
    pub keycloak_realm: String,

    /// Path to a file holding the client identifier
    pub client_id_file: String,

    /// Path to a file holding the client secret
    pub client_secret_file: String,
}

impl Config {
    /// Parse a JSON manifest.
    ///
    /// Missing keys default to empty strings.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Deserialize` if the document is not valid JSON
    /// or a key has the wrong type.
    pub fn from_json(manifest: &str) -> AuthResult<Self> {
        Ok(serde_json::from_str(manifest)?)
    }

    /// Load configuration from `KEYCLOAK_*` environment variables.
    ///
    /// Unset variables become empty strings.
    pub fn from_env() -> Self {
        // Load an .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            keycloak_url: env::var("KEYCLOAK_URL").unwrap_or_default(),
            client_id: env::var("KEYCLOAK_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("KEYCLOAK_CLIENT_SECRET").unwrap_or_default(),
            keycloak_realm: env::var("KEYCLOAK_REALM").unwrap_or_default(),
            client_id_file: env::var("KEYCLOAK_CLIENT_ID_FILE").unwrap_or_default(),
            client_secret_file: env::var("KEYCLOAK_CLIENT_SECRET_FILE").unwrap_or_default(),
        }
    }

    /// Replace inline credentials with the contents of their referenced files.
    ///
    /// The client identifier file is read first. If it fails the secret file
    /// is never touched. Contents are not trimmed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SecretFileRead` wrapping the I/O failure.
    pub fn resolve_secret_files(&mut self) -> AuthResult<()> {
        if !self.client_id_file.is_empty() {
            self.client_id = read_secret_file("client_id", &self.client_id_file)?;
        }

        if !self.client_secret_file.is_empty() {
            self.client_secret = read_secret_file("client_secret", &self.client_secret_file)?;
        }

        Ok(())
    }

    /// Check that the mandatory fields are present.
    ///
    /// The client secret is optional: public clients have none.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidConfiguration` if the client identifier or
    /// realm is empty.
    pub fn validate(&self) -> AuthResult<()> {
        if self.client_id.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "client_id must be set (inline or via client_id_file)".to_string(),
            ));
        }

        if self.keycloak_realm.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "keycloak_realm must be set".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("keycloak_url", &self.keycloak_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("keycloak_realm", &self.keycloak_realm)
            .field("client_id_file", &self.client_id_file)
            .field("client_secret_file", &self.client_secret_file)
            .finish()
    }
}

/// Placeholder used instead of secrets in `Debug` output.
pub(crate) fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "[REDACTED]" }
}

fn read_secret_file(field: &'static str, path: &str) -> AuthResult<String> {
    debug!(field, path, "Reading credential from file");
    fs::read_to_string(path).map_err(|source| AuthError::SecretFileRead {
        field,
        path: Path::new(path).to_path_buf(),
        source,
    })
}

/// Listener settings for the demo server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address (default: "0.0.0.0")
    pub host: String,

    /// Server port (default: 3000)
    pub port: u16,
}

impl ServerConfig {
    /// Load listener settings from `HOST` and `PORT`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Environment` if `PORT` is not a valid port number.
    pub fn from_env() -> AuthResult<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 3000)?,
        })
    }

    /// Get the full server address for binding.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse an environment variable into the specified type with a default value.
fn parse_env<T>(name: &str, default: T) -> AuthResult<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| AuthError::Environment(format!("Invalid {name}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn valid_config() -> Config {
        Config {
            keycloak_url: "https://idp.example.com".to_string(),
            client_id: "gateway".to_string(),
            client_secret: "s3cr3t".to_string(),
            keycloak_realm: "master".to_string(),
            ..Config::default()
        }
    }

    fn secret_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.keycloak_url.is_empty());
        assert!(config.client_id.is_empty());
        assert!(config.client_secret.is_empty());
        assert!(config.keycloak_realm.is_empty());
        assert!(config.client_id_file.is_empty());
        assert!(config.client_secret_file.is_empty());
    }

    #[test]
    fn test_from_json_uses_manifest_keys() {
        let config = Config::from_json(
            r#"{
                "url": "idp.example.com",
                "client_id": "gateway",
                "keycloak_realm": "master",
                "client_secret_file": "/run/secrets/kc"
            }"#,
        )
        .unwrap();

        assert_eq!(config.keycloak_url, "idp.example.com");
        assert_eq!(config.client_id, "gateway");
        assert_eq!(config.keycloak_realm, "master");
        assert_eq!(config.client_secret_file, "/run/secrets/kc");
        assert!(config.client_secret.is_empty());
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = Config::from_json(r#"{"url": 42}"#).unwrap_err();
        assert!(matches!(err, AuthError::Deserialize(_)));
    }

    #[test]
    fn test_resolve_client_id_file_not_trimmed() {
        let file = secret_file("abc123\n");
        let mut config = Config {
            client_id: String::new(),
            client_id_file: file.path().to_string_lossy().into_owned(),
            ..valid_config()
        };

        config.resolve_secret_files().unwrap();
        assert_eq!(config.client_id, "abc123\n");
        assert_eq!(config.client_secret, "s3cr3t");
    }

    #[test]
    fn test_resolve_secret_file_overrides_inline_value() {
        let file = secret_file("from-file");
        let mut config = Config {
            client_secret_file: file.path().to_string_lossy().into_owned(),
            ..valid_config()
        };

        config.resolve_secret_files().unwrap();
        assert_eq!(config.client_secret, "from-file");
    }

    #[test]
    fn test_resolve_without_files_is_noop() {
        let mut config = valid_config();
        config.resolve_secret_files().unwrap();
        assert_eq!(config, valid_config());
    }

    #[test]
    fn test_resolve_missing_id_file_skips_secret_file() {
        let secret = secret_file("never-read");
        let mut config = Config {
            client_id_file: "/nonexistent/keycloak/client_id".to_string(),
            client_secret_file: secret.path().to_string_lossy().into_owned(),
            ..valid_config()
        };

        let err = config.resolve_secret_files().unwrap_err();
        match err {
            AuthError::SecretFileRead { field, .. } => assert_eq!(field, "client_id"),
            other => panic!("expected SecretFileRead, got {other:?}"),
        }
        assert_eq!(config.client_secret, "s3cr3t");
    }

    #[test]
    fn test_resolve_non_utf8_secret_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x41]).unwrap();
        let mut config = Config {
            client_secret_file: file.path().to_string_lossy().into_owned(),
            ..valid_config()
        };

        let err = config.resolve_secret_files().unwrap_err();
        match err {
            AuthError::SecretFileRead { field, source, .. } => {
                assert_eq!(field, "client_secret");
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected SecretFileRead, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_client_id() {
        let config = Config {
            client_id: String::new(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AuthError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("client_id"));
    }

    #[test]
    fn test_validate_empty_realm() {
        let config = Config {
            keycloak_realm: String::new(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AuthError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("keycloak_realm"));
    }

    #[test]
    fn test_validate_allows_empty_secret() {
        let config = Config {
            client_secret: String::new(),
            ..valid_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", valid_config());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("s3cr3t"));
    }

    #[test]
    fn test_server_addr_format() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
