// Broker-based bridge discovery
//
// Philips operates a cloud broker (nupnp) that lists bridges it has
// seen on the caller's network. One GET, one JSON array, no retry and
// no caching. An empty array is a valid "no bridges known" answer and
// is not an error.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// The Philips broker endpoint listing bridges on the local network.
pub const BROKER_URL: &str = "https://www.meethue.com/api/nupnp";

/// One bridge as reported by the broker service.
///
/// Immutable; use [`Bridge::from_discovery`](crate::Bridge::from_discovery)
/// (or the `internal_ip_address` field directly) to open a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrokerBridge {
    pub id: String,
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: String,
    #[serde(rename = "macaddress", default)]
    pub mac_address: String,
}

/// Ask the Philips broker service for bridges on this network.
///
/// Returns the broker's records unchanged. An empty vec means the
/// request succeeded but the broker knows of no bridges here; transport
/// and decode failures surface as errors.
pub async fn discover_bridges() -> Result<Vec<BrokerBridge>, Error> {
    let url = Url::parse(BROKER_URL).map_err(Error::InvalidUrl)?;
    discover_bridges_at(url).await
}

/// Like [`discover_bridges`], but against an explicit broker URL.
pub async fn discover_bridges_at(broker: Url) -> Result<Vec<BrokerBridge>, Error> {
    let http = TransportConfig::default().build_client()?;

    debug!("querying broker at {}", broker);

    let resp = http
        .get(broker)
        .send()
        .await
        .map_err(Error::Transport)?
        .error_for_status()
        .map_err(Error::Transport)?;

    let body = resp.text().await.map_err(Error::Transport)?;
    let records: Vec<BrokerBridge> =
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })?;

    debug!("broker returned {} bridge(s)", records.len());
    Ok(records)
}
