use anyhow::{Context, Result};
use nonzero_ext::nonzero;
use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_RATE_LIMIT_PER_SECOND: NonZeroU32 = nonzero!(10u32);

/// Settings for a catalog client connection
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URI of the catalog service, e.g. `http://localhost:8090`
    pub uri: String,
    pub request_timeout: Duration,
    pub rate_limit_per_second: NonZeroU32,
}

impl ClientConfig {
    /// Config with defaults for everything but the service URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            rate_limit_per_second: DEFAULT_RATE_LIMIT_PER_SECOND,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_rate_limit(mut self, requests_per_second: NonZeroU32) -> Self {
        self.rate_limit_per_second = requests_per_second;
        self
    }

    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(ClientConfig {
            uri: env::var("CATALOG_URI").context("CATALOG_URI must be set")?,
            request_timeout: Duration::from_millis(
                env::var("CATALOG_REQUEST_TIMEOUT_MS")
                    .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_MS.to_string())
                    .parse()
                    .context("CATALOG_REQUEST_TIMEOUT_MS must be a valid number")?,
            ),
            rate_limit_per_second: env::var("CATALOG_RATE_LIMIT_PER_SECOND")
                .unwrap_or_else(|_| DEFAULT_RATE_LIMIT_PER_SECOND.to_string())
                .parse()
                .context("CATALOG_RATE_LIMIT_PER_SECOND must be a positive number")?,
        })
    }
}
