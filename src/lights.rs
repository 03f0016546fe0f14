// Light enumeration and per-light operations
//
// Lights are enumerated from `GET <base>/lights`, a JSON object keyed
// by light id whose values are bridge-defined and irrelevant here --
// only the key set matters. A Light handle carries a copy of the
// session's URL base (and HTTP client) rather than borrowing the
// Bridge, so it has no lifetime tie to the session. Enumerate after
// assigning the session credential; handles snapshot the base URL.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::bridge::Bridge;
use crate::error::Error;
use crate::response::{ApiResponse, decode_body};

/// Maximum length the bridge accepts for a light name.
const MAX_NAME_LEN: usize = 32;

/// A handle to one light on a bridge.
#[derive(Debug, Clone)]
pub struct Light {
    http: reqwest::Client,
    /// Session base URL at enumeration time (`http://<host>/api/<user>`).
    base: String,
    id: String,
}

/// Attributes of a light, from `GET <base>/lights/<id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct LightAttributes {
    #[serde(default)]
    pub state: LightState,
    /// Fixed name describing the type of light, e.g. "Extended color light".
    #[serde(rename = "type", default)]
    pub light_type: String,
    /// Unique, editable name given to the light (length 0-32).
    #[serde(default)]
    pub name: String,
    /// Hardware model of the light (length 6).
    #[serde(rename = "modelid", default)]
    pub model_id: String,
    /// Software version running on the light (length 8).
    #[serde(rename = "swversion", default)]
    pub software_version: String,
}

/// Current state of a light.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LightState {
    /// On/off state. Brightness 0 is not off; only this flag is.
    #[serde(default)]
    pub on: bool,
    /// Brightness from the light's minimum (0) to maximum (255).
    #[serde(rename = "bri", default)]
    pub brightness: u8,
    /// Hue, wrapping 0-65535. Both 0 and 65535 are red, 25500 is green
    /// and 46920 is blue.
    #[serde(default)]
    pub hue: u16,
    /// Saturation: 0 is white, 255 fully saturated.
    #[serde(rename = "sat", default)]
    pub saturation: u8,
    /// Mired color temperature, 153 (6500K) to 500 (2000K).
    #[serde(rename = "ct", default)]
    pub color_temperature: u16,
    #[serde(default)]
    pub alert: Alert,
    #[serde(default)]
    pub effect: Effect,
    /// Color mode the light is working in -- the last command type it
    /// received. Present only when the light supports at least one mode.
    #[serde(rename = "colormode", default)]
    pub color_mode: Option<ColorMode>,
    /// Whether the bridge can reach the light.
    #[serde(default)]
    pub reachable: bool,
}

/// Temporary alert effect of a light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// Not performing an alert effect.
    #[default]
    None,
    /// One breathe cycle.
    Select,
    /// Breathe cycles for 30 seconds or until cancelled.
    LSelect,
}

/// Dynamic effect of a light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    #[default]
    None,
    /// Cycle through all hues at the current brightness and saturation.
    Colorloop,
}

/// Color mode a light is working in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Hue and saturation.
    Hs,
    /// CIE xy coordinates.
    Xy,
    /// Color temperature.
    Ct,
}

impl Bridge {
    /// List all lights known by the bridge.
    ///
    /// `GET <base>/lights` -- one handle per key of the response
    /// object; the values are discarded. Order is unspecified.
    pub async fn lights(&self) -> Result<Vec<Light>, Error> {
        let url = self.api_url("lights")?;
        debug!("listing lights");

        let ids: HashMap<String, IgnoredAny> = self.get_json(url).await?;

        let base = self.base_url();
        let lights = ids
            .into_keys()
            .map(|id| Light {
                http: self.http().clone(),
                base: base.clone(),
                id,
            })
            .collect();
        Ok(lights)
    }

    /// Start a search for new lights.
    ///
    /// `POST <base>/lights` (empty body). The bridge searches for one
    /// minute and admits at most 15 new lights; an already-running
    /// search is aborted and restarted. Fire-and-forget -- call
    /// [`lights`](Bridge::lights) again after the search completes.
    pub async fn search(&self) -> Result<(), Error> {
        let url = self.api_url("lights")?;
        debug!("starting light search");
        self.post_empty(url).await
    }
}

impl Light {
    /// The bridge-assigned id of this light.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn light_url(&self, suffix: &str) -> Result<Url, Error> {
        let mut raw = format!("{}/lights/{}", self.base, self.id);
        if !suffix.is_empty() {
            raw.push('/');
            raw.push_str(suffix);
        }
        Url::parse(&raw).map_err(Error::InvalidUrl)
    }

    /// Fetch the light's attributes and state.
    ///
    /// `GET <base>/lights/<id>`
    pub async fn attributes(&self) -> Result<LightAttributes, Error> {
        let url = self.light_url("")?;
        debug!(light = %self.id, "fetching light attributes");

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

    /// Rename the light.
    ///
    /// `PUT <base>/lights/<id>/name` with `{"name": ...}`. Names longer
    /// than 32 characters are rejected locally before any network call.
    /// The bridge's per-command response is decoded and a reported
    /// error surfaces as [`Error::Bridge`].
    pub async fn set_name(&self, new_name: &str) -> Result<(), Error> {
        if new_name.len() > MAX_NAME_LEN {
            return Err(Error::Validation {
                message: format!("light name exceeds {MAX_NAME_LEN} character limit"),
            });
        }

        let url = self.light_url("name")?;
        debug!(light = %self.id, new_name, "renaming light");

        let resp = self
            .http
            .put(url)
            .json(&json!({ "name": new_name }))
            .send()
            .await
            .map_err(Error::Transport)?
            .error_for_status()
            .map_err(Error::Transport)?;

        let text = resp.text().await.map_err(Error::Transport)?;
        let responses: Vec<ApiResponse> = decode_body(&text)?;
        ApiResponse::into_single(responses)?.into_success()?;
        Ok(())
    }
}
