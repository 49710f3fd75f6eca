use tracing::debug;
use url::Url;

use crate::error::{AuthError, AuthResult};

// =============================================================================
// Validation Constants
// =============================================================================

/// Separator that marks a raw URL as already carrying a scheme.
pub const SCHEME_SEPARATOR: &str = "://";

/// Scheme assumed for bare hostnames such as `idp.example.com`.
pub const DEFAULT_SCHEME: &str = "https";

/// Prefix every accepted scheme must start with.
///
/// This is a prefix match, not an enum match: `http` and `https` pass, and
/// so would any other scheme beginning with these four characters.
pub const ALLOWED_SCHEME_PREFIX: &str = "http";

/// Normalize the identity provider URL into an absolute HTTP(S) endpoint.
///
/// Rules:
/// - The input must not be empty
/// - Input without `://` is treated as a bare host and gets `https://` prepended
/// - The result must parse as an absolute URL
/// - The scheme must start with `http`
///
/// The function is pure; it never touches the network.
///
/// # Errors
///
/// - `AuthError::EmptyUrl` for an empty string
/// - `AuthError::MalformedUrl` when the URL parser rejects the input
/// - `AuthError::UnsupportedScheme` for non-HTTP schemes (e.g. `ftp`)
pub fn parse_provider_url(raw: &str) -> AuthResult<Url> {
    if raw.is_empty() {
        return Err(AuthError::EmptyUrl);
    }

    let parsed = if raw.contains(SCHEME_SEPARATOR) {
        Url::parse(raw)?
    } else {
        debug!(raw, "No scheme in provider url, assuming {DEFAULT_SCHEME}");
        Url::parse(&format!("{DEFAULT_SCHEME}{SCHEME_SEPARATOR}{raw}"))?
    };

    if !parsed.scheme().starts_with(ALLOWED_SCHEME_PREFIX) {
        return Err(AuthError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    Ok(parsed)
}
