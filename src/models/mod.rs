mod api;
mod oidc;

pub use api::{HealthResponse, ProviderInfoResponse};
pub use oidc::{RedirectState, TokenResponse};
