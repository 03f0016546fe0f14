use thiserror::Error;

/// Top-level error type for the `hue-api` crate.
///
/// Covers every failure mode across the API surface: transport, URL
/// building, response decoding, protocol-shape violations, errors the
/// bridge itself reports, and locally-detected precondition failures.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout,
    /// non-success status, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to build the underlying HTTP client.
    #[error("HTTP client error: {0}")]
    Http(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The response had a valid JSON shape the protocol does not allow
    /// (e.g. a per-command response array with zero or several items).
    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    // ── Bridge ──────────────────────────────────────────────────────
    /// The bridge returned an explicit `{error: ...}` object. The
    /// message is the bridge's own `description` text, unmodified.
    #[error("Bridge error: {description}")]
    Bridge { description: String },

    // ── Local ───────────────────────────────────────────────────────
    /// A precondition was violated before any network call was made.
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl Error {
    /// Returns `true` if this is a transient transport failure worth
    /// retrying at a higher layer. This crate never retries itself.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if the bridge rejected the request itself (as
    /// opposed to the request never completing).
    pub fn is_bridge_error(&self) -> bool {
        matches!(self, Self::Bridge { .. })
    }
}
