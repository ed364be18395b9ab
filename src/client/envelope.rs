//! JSON-RPC envelopes exchanged with the Deluge web UI.
//!
//! Request:
//!
//! ```json
//! {"method": "core.get_torrents_status", "id": 3, "params": ["", ""]}
//! ```
//!
//! Response:
//!
//! ```json
//! {"id": 3, "result": {"abc123": {"name": "Test.Torrent"}}, "error": {"code": 0, "message": ""}}
//! ```
//!
//! The web UI sends `"error": null` on success, and a non-zero `code` when
//! the call failed, for example because the session cookie expired.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug, PartialEq)]
pub struct Request<'a> {
    pub method: &'static str,
    pub id: u64,
    pub params: &'a [Value],
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Response {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl Response {
    /// The daemon error, if the call failed.
    #[must_use]
    pub fn failure(&self) -> Option<&RpcError> {
        self.error.as_ref().filter(|error| error.code != 0)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure().is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
