// Per-command response envelope
//
// Write-style bridge endpoints (user creation, attribute writes) answer
// with a JSON array of result objects, each either
// `{"success": {...}}` or `{"error": {"type", "address", "description"}}`.
// Read endpoints return their payload directly and do not use this shape.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;

/// Decode a JSON body, keeping the raw text on failure.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: body.to_owned(),
    })
}

/// One element of a per-command response array.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    /// Success payload, keyed by the address that was written
    /// (user creation uses the key `"username"`).
    #[serde(default)]
    pub success: Option<HashMap<String, String>>,
    #[serde(default)]
    pub error: Option<ApiResponseError>,
}

/// Error object the bridge embeds in a response element.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponseError {
    #[serde(rename = "type", default)]
    pub error_type: u32,
    #[serde(default)]
    pub address: String,
    pub description: String,
}

impl ApiResponse {
    /// Reduce a response array to its single element.
    ///
    /// The bridge answers single-command requests with exactly one
    /// element; anything else means the exchange went off the rails and
    /// is rejected rather than guessed at.
    pub fn into_single(mut responses: Vec<ApiResponse>) -> Result<ApiResponse, Error> {
        match responses.len() {
            1 => Ok(responses.remove(0)),
            0 => Err(Error::UnexpectedResponse {
                message: "received empty api response array".into(),
            }),
            _ => Err(Error::UnexpectedResponse {
                message: "received api response array with >1 items".into(),
            }),
        }
    }

    /// Surface a bridge-reported error, or the success payload.
    pub fn into_success(self) -> Result<HashMap<String, String>, Error> {
        if let Some(err) = self.error {
            debug!(
                error_type = err.error_type,
                address = %err.address,
                "bridge rejected command"
            );
            return Err(Error::Bridge {
                description: err.description,
            });
        }
        Ok(self.success.unwrap_or_default())
    }
}
