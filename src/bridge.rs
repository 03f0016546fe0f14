// Bridge session
//
// Holds the bridge's host address, its (optionally cached) identifier,
// and the credential issued by user creation. All endpoint URLs derive
// from this session, and the shared request helpers here centralize the
// send/decode/error-mapping path for every module in the crate.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::discovery::BrokerBridge;
use crate::error::Error;
use crate::response::{ApiResponse, decode_body};
use crate::transport::TransportConfig;

/// A session against one Hue bridge.
///
/// The host address is fixed at construction. The credential (the
/// bridge-issued username) starts empty and is assigned explicitly via
/// [`set_username`](Bridge::set_username) after a successful
/// [`create_user`](Bridge::create_user) -- registering with the bridge
/// and authenticating this session are deliberately separate steps.
#[derive(Debug, Clone)]
pub struct Bridge {
    http: reqwest::Client,
    host: String,
    id: Option<String>,
    username: Option<SecretString>,
}

impl Bridge {
    /// Create a session for the bridge at `host` (IP or hostname,
    /// optionally with a port) using default transport settings.
    pub fn new(host: impl Into<String>) -> Result<Self, Error> {
        Self::with_transport(host, &TransportConfig::default())
    }

    /// Create a session with explicit transport settings (timeout etc.)
    pub fn with_transport(
        host: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            host: host.into(),
            id: None,
            username: None,
        })
    }

    /// Create a session from a broker discovery record, seeding the
    /// cached bridge identifier from the record.
    pub fn from_discovery(record: &BrokerBridge) -> Result<Self, Error> {
        let mut bridge = Self::new(record.internal_ip_address.clone())?;
        bridge.id = Some(record.id.clone());
        Ok(bridge)
    }

    /// The host address this session was constructed with.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The cached bridge identifier, if known.
    ///
    /// `None` until resolved. The accessor never performs network I/O;
    /// sessions built via [`from_discovery`](Bridge::from_discovery)
    /// have it from the broker record.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assign the credential for subsequent requests.
    ///
    /// Callers do this once, after [`create_user`](Bridge::create_user)
    /// succeeds. Requests issued before assignment go unauthenticated
    /// and the bridge will reject them.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(SecretString::from(username.into()));
    }

    /// Whether a credential has been assigned to this session.
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// The shared HTTP client. Cloning is cheap (`reqwest::Client` is a
    /// handle), so light handles carry their own copy.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL building ────────────────────────────────────────────────

    /// The per-request base URL: `http://<host>/api/<username>` once a
    /// credential is assigned, `http://<host>/api` before.
    pub(crate) fn base_url(&self) -> String {
        match &self.username {
            Some(u) => format!("http://{}/api/{}", self.host, u.expose_secret()),
            None => format!("http://{}/api", self.host),
        }
    }

    /// An endpoint URL under the session base.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let mut raw = self.base_url();
        if !path.is_empty() {
            raw.push('/');
            raw.push_str(path);
        }
        Url::parse(&raw).map_err(Error::InvalidUrl)
    }

    /// The credential-free root API URL, used only by user creation
    /// (no credential exists yet at that point).
    fn root_api_url(&self) -> Result<Url, Error> {
        Url::parse(&format!("http://{}/api", self.host)).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ─────────────────────────────────────────────

    /// GET `url` and decode the JSON response body into `T`.
    ///
    /// The body is read as text first so decode failures can carry the
    /// raw payload for debugging.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(Error::Transport)?
            .error_for_status()
            .map_err(Error::Transport)?;

        let body = resp.text().await.map_err(Error::Transport)?;
        decode_body(&body)
    }

    /// POST to `url` with an empty body, checking only transport-level
    /// success. The response body is ignored.
    pub(crate) async fn post_empty(&self, url: Url) -> Result<(), Error> {
        self.http
            .post(url)
            .send()
            .await
            .map_err(Error::Transport)?
            .error_for_status()
            .map_err(Error::Transport)?;
        Ok(())
    }

    // ── User creation ───────────────────────────────────────────────

    /// Register a new user (application credential) with the bridge.
    ///
    /// `POST /api` with `{"devicetype": ...}` -- the physical link
    /// button must have been pressed beforehand to prove access, or the
    /// bridge answers with a "link button not pressed" error. When
    /// `new_username` is empty the key is omitted entirely and the
    /// bridge generates a username; otherwise the requested name is
    /// sent verbatim.
    ///
    /// Returns the issued username. The session credential is NOT
    /// updated; call [`set_username`](Bridge::set_username) with the
    /// result to authenticate this session.
    pub async fn create_user(&self, device_type: &str, new_username: &str) -> Result<String, Error> {
        let url = self.root_api_url()?;

        let mut body = json!({ "devicetype": device_type });
        if !new_username.is_empty() {
            body["username"] = json!(new_username);
        }

        debug!(device_type, "creating user at {}", url);

        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?
            .error_for_status()
            .map_err(Error::Transport)?;

        let text = resp.text().await.map_err(Error::Transport)?;
        let responses: Vec<ApiResponse> = decode_body(&text)?;
        let success = ApiResponse::into_single(responses)?.into_success()?;

        let username = success.get("username").cloned().unwrap_or_default();
        debug!("user created");
        Ok(username)
    }
}
