//! Decoding of the heterogeneous lists returned while discovering the
//! daemon version.
//!
//! `web.get_hosts` returns one list per host:
//!
//! ```json
//! [["h1", "10.0.0.1", 58846, "tcp"]]
//! ```
//!
//! `web.get_host_status` returns a list whose last element is the version:
//!
//! ```json
//! ["h1", "Online", "2.0.3"]
//! ```
use serde_json::Value;
use torrust_deluge_client_primitives::backend::Backend;

use super::error::Error;

/// The minimum number of elements of a host status.
pub const HOST_STATUS_MIN_LEN: usize = 3;

/// # Errors
///
/// Will return an [`Error::InvalidVersion`] if the result is not a list of
/// valid host entries.
pub fn parse_hosts(result: &Value) -> Result<Vec<Backend>, Error> {
    let Some(entries) = result.as_array() else {
        return Err(Error::InvalidVersion {
            reason: format!("the host list is not a list: {result}"),
        });
    };

    entries
        .iter()
        .map(|entry| {
            Backend::try_from(entry).map_err(|err| Error::InvalidVersion {
                reason: err.to_string(),
            })
        })
        .collect()
}

/// # Errors
///
/// Will return an [`Error::InvalidVersion`] if the result is not a list
/// with at least three elements whose last element is a string.
pub fn parse_host_status(result: &Value) -> Result<String, Error> {
    let Some(status) = result.as_array() else {
        return Err(Error::InvalidVersion {
            reason: format!("the host status is not a list: {result}"),
        });
    };

    if status.len() < HOST_STATUS_MIN_LEN {
        return Err(Error::InvalidVersion {
            reason: format!(
                "the host status has {} elements, expected at least {HOST_STATUS_MIN_LEN}",
                status.len()
            ),
        });
    }

    match status.last() {
        Some(Value::String(version)) => Ok(version.clone()),
        Some(other) => Err(Error::InvalidVersion {
            reason: format!("the last element of the host status is not a string: {other}"),
        }),
        None => Err(Error::InvalidVersion {
            reason: "the host status is empty".to_string(),
        }),
    }
}
