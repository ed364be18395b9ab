//! The authenticated HTTP context shared by all the calls of one client.
//!
//! The web UI authenticates with a session cookie set by `auth.login`. The
//! session keeps the cookie jar, the login flag and the request id counter.
//! It can also carry an HTTP basic authentication header, for web UIs behind
//! a reverse proxy. That header is sent with every request, on top of the
//! session cookie.
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::cookie::Jar;
use reqwest::header::HeaderValue;
use reqwest::Url;
use torrust_deluge_client_configuration::Deluge;

use super::error::Error;

/// The path of the JSON-RPC endpoint of the web UI.
pub const RPC_PATH: &str = "/json";

#[derive(Debug)]
pub struct Session {
    url: Url,
    authorization: Option<HeaderValue>,
    cookies: Arc<Jar>,
    authenticated: bool,
    request_id: u64,
    bytes_received: u64,
}

impl Session {
    /// # Errors
    ///
    /// Will return an error if the configured URL can't be turned into the
    /// RPC endpoint URL or the basic authentication credentials are not a
    /// valid header value.
    pub fn new(config: &Deluge) -> Result<Self, Error> {
        Ok(Self {
            url: rpc_endpoint(&config.url)?,
            authorization: if config.has_http_credentials() {
                Some(basic_authorization(&config.http_user, &config.http_pass)?)
            } else {
                None
            },
            cookies: Arc::new(Jar::default()),
            authenticated: false,
            request_id: 0,
            bytes_received: 0,
        })
    }

    /// The RPC endpoint URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn authorization(&self) -> Option<&HeaderValue> {
        self.authorization.as_ref()
    }

    #[must_use]
    pub fn cookies(&self) -> Arc<Jar> {
        self.cookies.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Total number of response body bytes read through this session.
    #[must_use]
    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    pub(crate) fn authenticate(&mut self) {
        self.authenticated = true;
    }

    /// The next call will log in again before sending its request.
    pub(crate) fn invalidate(&mut self) {
        self.authenticated = false;
    }

    /// Ids only pair a request with its response, so the counter wraps.
    pub(crate) fn next_request_id(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    pub(crate) fn count_received(&mut self, bytes: usize) {
        self.bytes_received = self.bytes_received.saturating_add(u64::try_from(bytes).unwrap_or(u64::MAX));
    }
}

/// It normalizes the web UI URL so that it always ends with the `/json` RPC
/// endpoint path, whether it was configured or not:
///
/// ```text
/// http://localhost:8112        -> http://localhost:8112/json
/// http://localhost:8112/       -> http://localhost:8112/json
/// http://localhost:8112/json   -> http://localhost:8112/json
/// https://host/deluge/         -> https://host/deluge/json
/// ```
///
/// # Errors
///
/// Will return an error if the resulting URL is not valid.
pub fn rpc_endpoint(url: &Url) -> Result<Url, Error> {
    let base = url.as_str();
    let base = base.strip_suffix(RPC_PATH).unwrap_or(base);
    let base = base.strip_suffix('/').unwrap_or(base);

    let endpoint = format!("{base}{RPC_PATH}");

    Url::parse(&endpoint).map_err(|source| Error::InvalidUrl { url: endpoint, source })
}

/// It builds the `Authorization` header value for HTTP basic authentication.
///
/// # Errors
///
/// Will return an error if the credentials can't be used in a header.
pub fn basic_authorization(user: &str, password: &str) -> Result<HeaderValue, Error> {
    let credentials = STANDARD.encode(format!("{user}:{password}"));

    let mut header =
        HeaderValue::from_str(&format!("Basic {credentials}")).map_err(|source| Error::InvalidHttpCredentials { source })?;

    header.set_sensitive(true);

    Ok(header)
}
