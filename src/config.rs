//! Client configuration.
//!
//! Configuration is injected into [`crate::Client::new`] rather than read
//! from ambient process state; [`ClientConfig::from_env`] exists as an
//! explicit convenience for deployments that override the API address.

use std::time::Duration;

/// Production API address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.facetdb.io/v1";

/// Environment variable checked by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "FACETDB_API_ADDRESS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base address every operation path is appended to.
    pub base_url: String,
    /// Whole round-trip timeout; a timeout surfaces as a transport error.
    pub timeout: Duration,
    /// Disable TLS certificate verification. Off by default; only for
    /// legacy deployments behind self-signed certificates. Opting in makes
    /// the connection vulnerable to interception.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read the base address from `FACETDB_API_ADDRESS` (loading `.env`
    /// first), falling back to the production address.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ClientConfig::new(base_url)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}
