//! Deluge web UI JSON-RPC client.
//!
//! Every call is an HTTP `POST` to the `/json` endpoint of the web UI with a
//! JSON-RPC envelope. The client logs in lazily, before the first call, and
//! keeps the session cookie for the following ones.
//!
//! ```text
//! Unauthenticated --login--> Authenticated --daemon error--> Re-authenticating
//!        ^                        ^                                 |
//!        |                        |                               login
//!   transport error               |                                 v
//!        |                        +-------retry succeeds------- Retry once
//!        +--------------------------------------------------- retry fails -> Error::Deluge
//! ```
//!
//! A daemon error (a non-zero `error.code` in the response envelope) usually
//! means the session expired. The client logs in again and retries the call
//! only once. Transport errors are never retried, but the next call logs in
//! again.
//!
//! A client must not be shared between concurrent callers: all the calls
//! take `&mut self` because they update the request id counter and the
//! session state.
pub mod envelope;
pub mod error;
pub mod method;
pub mod session;
pub mod transfers;
pub mod version;

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use torrust_deluge_client_configuration::Deluge;
use torrust_deluge_client_primitives::transfer::v1::TransferStatusV1;
use torrust_deluge_client_primitives::transfer::v2::TransferStatusV2;
use torrust_deluge_client_primitives::transfer::{TransferMap, TransferStatus};
use torrust_deluge_client_primitives::Backends;
use tracing::{debug, info, warn};

pub use self::envelope::{Response, RpcError};
pub use self::error::Error;
pub use self::method::Method;
use self::envelope::Request;
use self::session::Session;
pub use self::transfers::{Schema, Transfers};

const JSON_CONTENT_TYPE: &str = "application/json";

/// A hook that receives the raw payloads the client could not decode.
pub type DebugLog = Arc<dyn Fn(&str) + Send + Sync>;

/// Deluge web UI client.
pub struct Client {
    config: Deluge,
    session: Session,
    http: reqwest::Client,
    version: Option<String>,
    backends: Backends,
    debug_log: Option<DebugLog>,
}

impl Client {
    /// It builds a client without contacting the web UI. The client logs in
    /// before the first call.
    ///
    /// # Errors
    ///
    /// Will return an error if the configuration is not valid or the HTTP
    /// client can't be built.
    pub fn new(config: Deluge) -> Result<Self, Error> {
        let session = Session::new(&config)?;

        let http = reqwest::Client::builder()
            .cookie_provider(session.cookies())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|source| Error::ClientBuilding { source })?;

        Ok(Self {
            version: config.version.clone(),
            config,
            session,
            http,
            backends: Backends::default(),
            debug_log: None,
        })
    }

    /// It builds a client and logs in. Then it discovers the daemon version,
    /// unless the configuration pins one.
    ///
    /// # Errors
    ///
    /// Will return an error if the login or the version discovery fail.
    pub async fn connect(config: Deluge) -> Result<Self, Error> {
        let mut client = Self::new(config)?;

        client.login().await?;

        if client.version.is_none() {
            client.discover_version().await?;
        }

        Ok(client)
    }

    #[must_use]
    pub fn with_debug_log(mut self, debug_log: DebugLog) -> Self {
        self.debug_log = Some(debug_log);
        self
    }

    /// The RPC endpoint URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        self.session.url()
    }

    /// The daemon version, either pinned in the configuration or discovered.
    /// It's only informative.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The daemon hosts found by the last version discovery.
    #[must_use]
    pub fn backends(&self) -> &Backends {
        &self.backends
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Total number of response body bytes read by this client.
    #[must_use]
    pub fn bytes_received(&self) -> u64 {
        self.session.bytes_received()
    }

    /// It logs in with the configured password. The web UI sets the session
    /// cookie used by the following calls.
    ///
    /// Only the HTTP status of the response tells if the login succeeded.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::AuthFailed`] if the response status is not
    /// `200`, or an [`Error::Transport`] if the request fails.
    pub async fn login(&mut self) -> Result<(), Error> {
        let method = Method::AuthLogin;
        let params = [Value::String(self.config.password.clone())];

        let (status, _body) = self.post(method, &params).await?;

        if status != StatusCode::OK {
            self.session.invalidate();

            return Err(Error::AuthFailed {
                url: self.session.url().clone(),
                method,
                status,
            });
        }

        self.session.authenticate();

        info!(url = %self.session.url(), "Logged in to the Deluge web UI");

        Ok(())
    }

    /// It calls an RPC method, logging in first if needed.
    ///
    /// When the daemon answers with an error, the client logs in again and
    /// retries the call once.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::Deluge`] if the retry fails too, or the
    /// error of the login, transport or decoding step that failed.
    pub async fn call(&mut self, method: Method, params: &[Value]) -> Result<Response, Error> {
        if !self.session.is_authenticated() {
            self.login().await?;
        }

        let response = self.send(method, params).await?;

        let Some(failure) = response.failure() else {
            return Ok(response);
        };

        warn!(%method, code = failure.code, message = %failure.message, "Deluge error, logging in again to retry once");

        self.login().await?;

        let response = self.send(method, params).await?;

        match response.failure() {
            None => Ok(response),
            Some(failure) => Err(Error::Deluge {
                method,
                code: failure.code,
                message: failure.message.clone(),
            }),
        }
    }

    /// It gets the version of the last daemon host known by the web UI and
    /// stores every host in the [`backends`](Self::backends).
    ///
    /// # Errors
    ///
    /// Will return an [`Error::InvalidVersion`] if the hosts or the host
    /// status don't have the expected shape, or the error of the failed call.
    pub async fn discover_version(&mut self) -> Result<String, Error> {
        let response = self.call(Method::GetHosts, &[]).await?;

        let hosts = version::parse_hosts(&response.result).map_err(|err| {
            self.log_payload(&response.result.to_string());
            err
        })?;

        let host_id = hosts.last().map(|backend| backend.id.clone()).unwrap_or_default();

        for backend in hosts {
            self.backends.insert(backend.id.clone(), backend);
        }

        let response = self.call(Method::GetHostStatus, &[Value::String(host_id)]).await?;

        let version = version::parse_host_status(&response.result).map_err(|err| {
            self.log_payload(&response.result.to_string());
            err
        })?;

        debug!(%version, backends = self.backends.len(), "Deluge version discovered");

        self.version = Some(version.clone());

        Ok(version)
    }

    /// It gets the status of all the torrents, decoded with the given
    /// layout.
    ///
    /// # Errors
    ///
    /// Will return an error if the call fails or the result can't be decoded
    /// with the layout.
    pub async fn list_transfers(&mut self, schema: Schema) -> Result<Transfers, Error> {
        debug!(%schema, "Listing transfers");

        let transfers = match schema {
            Schema::Legacy => Transfers::Legacy(self.fetch_transfers().await?),
            Schema::Current => Transfers::Current(self.fetch_transfers().await?),
            Schema::Compat => Transfers::Compat(self.fetch_transfers().await?),
        };

        Ok(transfers)
    }

    /// It gets the status of all the torrents with the Deluge `1.x` layout.
    ///
    /// # Errors
    ///
    /// See [`list_transfers`](Self::list_transfers).
    pub async fn list_transfers_v1(&mut self) -> Result<TransferMap<TransferStatusV1>, Error> {
        self.fetch_transfers().await
    }

    /// It gets the status of all the torrents with the Deluge `2.x` layout.
    ///
    /// # Errors
    ///
    /// See [`list_transfers`](Self::list_transfers).
    pub async fn list_transfers_v2(&mut self) -> Result<TransferMap<TransferStatusV2>, Error> {
        self.fetch_transfers().await
    }

    /// It gets the status of all the torrents with the layout that contains
    /// the fields of both daemon generations. It's the recommended way to
    /// list transfers.
    ///
    /// # Errors
    ///
    /// See [`list_transfers`](Self::list_transfers).
    pub async fn list_transfers_compat(&mut self) -> Result<TransferMap<TransferStatus>, Error> {
        self.fetch_transfers().await
    }

    async fn fetch_transfers<T: DeserializeOwned>(&mut self) -> Result<TransferMap<T>, Error> {
        let method = Method::GetTorrentsStatus;

        // No filter and all the fields.
        let params = [Value::String(String::new()), Value::String(String::new())];

        let response = self.call(method, &params).await?;

        self.decode_result(method, &response.result)
    }

    fn decode_result<T: DeserializeOwned>(&self, method: Method, result: &Value) -> Result<T, Error> {
        T::deserialize(result).map_err(|source| {
            self.log_payload(&result.to_string());
            Error::Decode { method, source }
        })
    }

    /// It sends one request and decodes the response envelope.
    async fn send(&mut self, method: Method, params: &[Value]) -> Result<Response, Error> {
        let (status, body) = self.post(method, params).await?;

        match serde_json::from_slice::<Response>(&body) {
            Ok(response) => {
                debug!(%method, %status, id = ?response.id, success = response.is_success(), "Response received");
                Ok(response)
            }
            Err(source) => {
                self.log_payload(&String::from_utf8_lossy(&body));
                Err(Error::Decode { method, source })
            }
        }
    }

    /// It sends one request and reads the whole response body, whatever the
    /// status is, so the connection can be reused.
    async fn post(&mut self, method: Method, params: &[Value]) -> Result<(StatusCode, Vec<u8>), Error> {
        let request = Request {
            method: method.as_str(),
            id: self.session.next_request_id(),
            params,
        };

        debug!(%method, id = request.id, url = %self.session.url(), "Sending request");

        let mut builder = self
            .http
            .post(self.session.url().clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .json(&request);

        if let Some(authorization) = self.session.authorization() {
            builder = builder.header(AUTHORIZATION, authorization.clone());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(source) => {
                self.session.invalidate();
                return Err(Error::Transport { method, source });
            }
        };

        let status = response.status();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                self.session.invalidate();
                return Err(Error::Transport { method, source });
            }
        };

        self.session.count_received(body.len());

        Ok((status, body.to_vec()))
    }

    fn log_payload(&self, payload: &str) {
        debug!(payload, "Failed payload");

        if let Some(debug_log) = &self.debug_log {
            debug_log(payload);
        }
    }
}
