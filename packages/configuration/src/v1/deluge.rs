use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};
use url::Url;

use crate::{DEFAULT_DELUGE_URL, DEFAULT_TIMEOUT};

/// Connection parameters for the Deluge web UI.
///
/// Once passed to the client they can not be changed.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Deluge {
    /// The Deluge web UI URL, for example `http://localhost:8112`. The
    /// client appends the `/json` RPC endpoint path when it is missing.
    #[serde(default = "Deluge::default_url")]
    pub url: Url,

    /// The web UI password. It's the only parameter of the `auth.login`
    /// method.
    #[serde(default)]
    pub password: String,

    /// Optional HTTP basic authentication user, for web UIs running behind
    /// a reverse proxy that requires it.
    #[serde(default)]
    pub http_user: String,

    /// Optional HTTP basic authentication password.
    #[serde(default)]
    pub http_pass: String,

    /// Timeout in seconds for a whole HTTP round trip.
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "Deluge::default_timeout")]
    pub timeout: Duration,

    /// Whether the TLS certificate of the web UI must be valid.
    #[serde(default = "Deluge::default_verify_ssl")]
    pub verify_ssl: bool,

    /// Pinned daemon version. When it's set the client does not ask the
    /// web UI for the version of its hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Default for Deluge {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            password: String::default(),
            http_user: String::default(),
            http_pass: String::default(),
            timeout: Self::default_timeout(),
            verify_ssl: Self::default_verify_ssl(),
            version: None,
        }
    }
}

impl Deluge {
    /// # Panics
    ///
    /// Will panic if the hardcoded default URL is not a valid URL.
    fn default_url() -> Url {
        Url::parse(DEFAULT_DELUGE_URL).expect("the default Deluge URL should be valid")
    }

    fn default_timeout() -> Duration {
        DEFAULT_TIMEOUT
    }

    fn default_verify_ssl() -> bool {
        true
    }

    /// Returns `true` if the web UI is also protected with HTTP basic
    /// authentication.
    #[must_use]
    pub fn has_http_credentials(&self) -> bool {
        !self.http_user.is_empty() || !self.http_pass.is_empty()
    }
}
