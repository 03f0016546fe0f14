//! Async Rust client for the Philips Hue bridge's local HTTP/JSON API.
//!
//! Covers bridge discovery via the Philips broker service, user
//! creation (pairing), configuration fetch, and light enumeration and
//! control. Every operation is a single request/reply round trip: no
//! retries, no caching, no background tasks.
//!
//! ```no_run
//! use hue_api::{Bridge, discover_bridges};
//!
//! # async fn demo() -> Result<(), hue_api::Error> {
//! let records = discover_bridges().await?;
//! let mut bridge = Bridge::from_discovery(&records[0])?;
//!
//! // Press the link button on the bridge first.
//! let username = bridge.create_user("my-app", "").await?;
//! bridge.set_username(username);
//!
//! for light in bridge.lights().await? {
//!     let attrs = light.attributes().await?;
//!     println!("{}: {}", light.id(), attrs.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod config;
pub mod discovery;
pub mod error;
pub mod lights;
pub mod transport;

mod response;

pub use bridge::Bridge;
pub use config::{BridgeConfig, SoftwareUpdate, WhitelistEntry};
pub use discovery::{BrokerBridge, discover_bridges, discover_bridges_at};
pub use error::Error;
pub use lights::{Alert, ColorMode, Effect, Light, LightAttributes, LightState};
pub use transport::TransportConfig;
