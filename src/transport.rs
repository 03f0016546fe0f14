// Shared transport configuration for building reqwest::Client instances.
//
// Every Bridge (and the broker discovery helper) obtains its client
// through this module so timeout and user-agent settings live in one
// place. The bridge's local API is plain HTTP; the broker endpoint is
// HTTPS against a public certificate, so no TLS knobs are needed here.

use std::time::Duration;

/// Transport configuration shared by all requests of a session.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. Every operation in this crate is a single
    /// round trip, so this bounds each call end to end.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("hue-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| crate::error::Error::Http(format!("failed to build HTTP client: {e}")))
    }
}
