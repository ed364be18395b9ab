//! Errors returned by the Deluge web UI [`Client`](crate::client::Client).
use reqwest::header::InvalidHeaderValue;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use super::method::Method;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build the HTTP client: {source}")]
    ClientBuilding { source: reqwest::Error },

    #[error("Invalid Deluge web UI URL `{url}`: {source}")]
    InvalidUrl { url: String, source: url::ParseError },

    #[error("Invalid HTTP basic authentication credentials: {source}")]
    InvalidHttpCredentials { source: InvalidHeaderValue },

    /// The web UI answered the login request with a status other than `200`.
    #[error("authentication failed: {url}[{method}] (status: {status})")]
    AuthFailed { url: Url, method: Method, status: StatusCode },

    /// The daemon kept failing after logging in again and retrying once.
    #[error("deluge error calling `{method}` (code: {code}): {message}")]
    Deluge { method: Method, code: i64, message: String },

    /// The host list or the host status do not have the expected shape.
    #[error("invalid data returned while checking version: {reason}")]
    InvalidVersion { reason: String },

    /// The HTTP request failed or timed out. It's never retried.
    #[error("Http request calling `{method}` failed: {source}")]
    Transport { method: Method, source: reqwest::Error },

    #[error("Failed to decode the response of `{method}`: {source}")]
    Decode { method: Method, source: serde_json::Error },
}

impl Error {
    /// The RPC method that was being called, if the error is related to one.
    #[must_use]
    pub fn method(&self) -> Option<Method> {
        match self {
            Error::AuthFailed { method, .. }
            | Error::Deluge { method, .. }
            | Error::Transport { method, .. }
            | Error::Decode { method, .. } => Some(*method),
            Error::ClientBuilding { .. }
            | Error::InvalidUrl { .. }
            | Error::InvalidHttpCredentials { .. }
            | Error::InvalidVersion { .. } => None,
        }
    }
}
