//! A daemon host the Deluge web UI can connect to.
//!
//! The web UI returns its hosts as a heterogeneous list per host:
//!
//! ```text
//! ["c6099253ba83ea059adb7f6db27cd80228572721", "127.0.0.1", 58846, "localhost"]
//!  \______________________________________/  \_________/  \___/  \_________/
//!                    |                            |          |        |
//!                 host id                      address     port   protocol
//! ```
//!
//! [`Backend::try_from`] validates the amount of elements and the type of each
//! position before extracting them.
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The minimum number of elements of a host entry.
pub const HOST_ENTRY_LEN: usize = 4;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Constructor)]
pub struct Backend {
    /// The host id.
    pub id: String,
    /// The daemon address with the format `host:port`.
    pub address: String,
    /// The protocol (or the host name for some daemon versions).
    pub protocol: String,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseBackendError {
    #[error("host entry is not a list: {entry}")]
    NotAList { entry: String },

    #[error("host entry has {len} elements, expected at least {}", HOST_ENTRY_LEN)]
    TooShort { len: usize },

    #[error("host entry element at position {position} is not a {expected}: {found}")]
    UnexpectedElement {
        position: usize,
        expected: &'static str,
        found: String,
    },
}

impl TryFrom<&Value> for Backend {
    type Error = ParseBackendError;

    fn try_from(entry: &Value) -> Result<Self, Self::Error> {
        let Some(elements) = entry.as_array() else {
            return Err(ParseBackendError::NotAList { entry: entry.to_string() });
        };

        if elements.len() < HOST_ENTRY_LEN {
            return Err(ParseBackendError::TooShort { len: elements.len() });
        }

        let id = string_at(elements, 0)?;
        let host = string_at(elements, 1)?;
        let port = port_at(elements, 2)?;
        let protocol = string_at(elements, 3)?;

        Ok(Backend {
            id,
            address: format!("{host}:{port}"),
            protocol,
        })
    }
}

fn string_at(elements: &[Value], position: usize) -> Result<String, ParseBackendError> {
    elements[position]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| ParseBackendError::UnexpectedElement {
            position,
            expected: "string",
            found: elements[position].to_string(),
        })
}

/// The port is a JSON number. Fractional ports are rounded the same way the
/// web UI prints them.
fn port_at(elements: &[Value], position: usize) -> Result<String, ParseBackendError> {
    let element = &elements[position];

    if let Some(port) = element.as_u64() {
        return Ok(port.to_string());
    }

    element
        .as_f64()
        .map(|port| format!("{port:.0}"))
        .ok_or_else(|| ParseBackendError::UnexpectedElement {
            position,
            expected: "number",
            found: element.to_string(),
        })
}
