//! Fuzz the configuration entry points that take untrusted strings.
//!
//! ```bash
//! cargo +nightly fuzz run fuzz_provider_url -- -max_total_time=60
//! ```
//!
//! Checks that for any input:
//!
//! - `parse_provider_url` never panics and only returns http-like schemes
//! - `Config::from_json` never panics on arbitrary manifests

#![no_main]

use keycloak_openid::{Config, parse_provider_url};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(url) = parse_provider_url(s) {
            assert!(url.scheme().starts_with("http"));
        }

        let _ = Config::from_json(s);
    }
});
