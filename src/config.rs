// Bridge configuration
//
// Read-only snapshot of the bridge's /config endpoint. Fields use
// `#[serde(default)]` liberally because field presence varies across
// bridge firmware versions.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::bridge::Bridge;
use crate::error::Error;

/// Bridge metadata from `GET <base>/config`.
///
/// Produced fresh on each fetch; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Port of the proxy being used by the bridge.
    #[serde(rename = "proxyport", default)]
    pub proxy_port: u16,
    /// Current UTC time of the bridge.
    #[serde(rename = "UTC", default)]
    pub utc: String,
    /// Name of the bridge (length 4-16).
    #[serde(default)]
    pub name: String,
    #[serde(rename = "swupdate", default)]
    pub software_update: SoftwareUpdate,
    /// Whitelisted users, keyed by the bridge-issued username.
    #[serde(default)]
    pub whitelist: HashMap<String, WhitelistEntry>,
    /// Software version of the bridge.
    #[serde(rename = "swversion", default)]
    pub software_version: String,
    /// Address of the proxy (length 0-40); "none" means no proxy.
    #[serde(rename = "proxyaddress", default)]
    pub proxy_address: String,
    /// MAC address of the bridge.
    #[serde(rename = "mac", default)]
    pub mac_address: String,
    /// Whether the link button has been pressed within the last 30
    /// seconds.
    #[serde(rename = "linkbutton", default)]
    pub link_button: bool,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    /// Whether the IP address was obtained via DHCP.
    #[serde(rename = "dhcp", default)]
    pub dhcp_enabled: bool,
    /// Whether the bridge is signed up for the portal services.
    #[serde(rename = "portalservices", default)]
    pub portal_services: bool,
}

/// Software update details nested in [`BridgeConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoftwareUpdate {
    #[serde(rename = "updatestate", default)]
    pub update_state: u32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub text: String,
    /// Whether the bridge should notify the user about the update.
    #[serde(default)]
    pub notify: bool,
}

/// One whitelisted user nested in [`BridgeConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhitelistEntry {
    #[serde(rename = "last use date", default)]
    pub last_use_date: String,
    #[serde(rename = "create date", default)]
    pub create_date: String,
    #[serde(default)]
    pub name: String,
}

impl Bridge {
    /// Fetch the bridge's configuration.
    ///
    /// `GET <base>/config`
    pub async fn fetch_configuration(&self) -> Result<BridgeConfig, Error> {
        let url = self.api_url("config")?;
        debug!("fetching bridge configuration");
        self.get_json(url).await
    }
}
