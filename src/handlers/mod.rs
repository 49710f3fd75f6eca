mod health;
mod provider;

pub use health::health_check;
pub use provider::provider_info;
