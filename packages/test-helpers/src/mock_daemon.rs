//! A fake Deluge web UI for the client tests.
//!
//! It listens on a random local port and serves the `/json` JSON-RPC
//! endpoint:
//!
//! - `auth.login` answers `200` and sets a `_session_id` cookie when the
//!   password is right, or `403` when it's wrong.
//! - Any other method answers a "Not authenticated" daemon error when the
//!   request does not carry a valid session cookie. Otherwise it answers the
//!   next scripted [`Reply`] for the method. The last scripted reply is
//!   repeated. Methods without replies answer a `null` result.
//!
//! Every request is recorded, including the login ones.
use std::collections::{HashMap, HashSet, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use crate::random;

pub const SESSION_COOKIE: &str = "_session_id";

pub const LOGIN_METHOD: &str = "auth.login";

/// Code of the daemon error sent when the session is not valid.
pub const NOT_AUTHENTICATED_CODE: i64 = 1;

/// A scripted answer for one RPC call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A successful call with this `result`.
    Result(Value),
    /// A failed call with this daemon error.
    Error { code: i64, message: String },
    /// A raw body, sent as is.
    Raw(String),
    /// A reply sent after a delay, to make the client time out.
    Delayed { delay: Duration, reply: Box<Reply> },
}

impl Reply {
    #[must_use]
    pub fn error(code: i64, message: &str) -> Self {
        Self::Error {
            code,
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn delayed(delay: Duration, reply: Reply) -> Self {
        Self::Delayed {
            delay,
            reply: Box::new(reply),
        }
    }
}

/// A request received by the mock daemon.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub id: Value,
    pub params: Vec<Value>,
    /// The value of the session cookie, if the request had one.
    pub session_cookie: Option<String>,
    /// The raw `Authorization` header, if the request had one.
    pub authorization: Option<String>,
}

#[derive(Deserialize)]
struct RpcRequest {
    method: String,
    #[serde(default)]
    id: Value,
    #[serde(default)]
    params: Vec<Value>,
}

#[derive(Default)]
struct Daemon {
    password: String,
    sessions: HashSet<String>,
    replies: HashMap<String, VecDeque<Reply>>,
    calls: Vec<RecordedCall>,
}

impl Daemon {
    fn next_reply(&mut self, method: &str) -> Option<Reply> {
        let queue = self.replies.get_mut(method)?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

type SharedDaemon = Arc<Mutex<Daemon>>;

/// A running mock daemon. It's stopped when dropped.
pub struct MockDaemon {
    pub address: SocketAddr,
    daemon: SharedDaemon,
    task: JoinHandle<()>,
}

impl MockDaemon {
    /// It starts a mock daemon that accepts the given login password.
    ///
    /// # Panics
    ///
    /// Will panic if it can't bind to a local port.
    pub async fn start(password: &str) -> Self {
        let daemon = Arc::new(Mutex::new(Daemon {
            password: password.to_owned(),
            ..Default::default()
        }));

        let app = Router::new().route("/json", post(handle_rpc)).with_state(daemon.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind the mock daemon to a local port");

        let address = listener.local_addr().expect("it should get the mock daemon local address");

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("the mock daemon should keep running");
        });

        Self { address, daemon, task }
    }

    /// The web UI URL, without the `/json` path.
    ///
    /// # Panics
    ///
    /// Will panic if the address is not a valid URL host.
    #[must_use]
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.address)).expect("the mock daemon address should be a valid URL")
    }

    /// It adds a reply at the end of the method's reply queue.
    pub fn push_reply(&self, method: &str, reply: Reply) {
        self.lock().replies.entry(method.to_owned()).or_default().push_back(reply);
    }

    /// It forgets all the sessions, like a web UI restart or a cookie
    /// expiration.
    pub fn expire_sessions(&self) {
        self.lock().sessions.clear();
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
        self.lock().calls.iter().filter(|call| call.method == method).cloned().collect()
    }

    #[must_use]
    pub fn logins(&self) -> usize {
        self.calls_to(LOGIN_METHOD).len()
    }

    fn lock(&self) -> MutexGuard<'_, Daemon> {
        self.daemon.lock().expect("the mock daemon state should not be poisoned")
    }
}

impl Drop for MockDaemon {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle_rpc(State(daemon): State<SharedDaemon>, headers: HeaderMap, body: String) -> Response {
    let request: RpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    let (delay, response) = dispatch(&daemon, &headers, &request);

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    response
}

/// It records the request and builds the response. The lock is released
/// before the handler waits for any delay.
fn dispatch(daemon: &SharedDaemon, headers: &HeaderMap, request: &RpcRequest) -> (Option<Duration>, Response) {
    let session_cookie = session_cookie(headers);

    let mut daemon = daemon.lock().expect("the mock daemon state should not be poisoned");

    daemon.calls.push(RecordedCall {
        method: request.method.clone(),
        id: request.id.clone(),
        params: request.params.clone(),
        session_cookie: session_cookie.clone(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned),
    });

    if request.method == LOGIN_METHOD {
        return (None, login(&mut daemon, request));
    }

    let authenticated = session_cookie.is_some_and(|session| daemon.sessions.contains(&session));

    let reply = if authenticated {
        daemon.next_reply(&request.method).unwrap_or(Reply::Result(Value::Null))
    } else {
        Reply::error(NOT_AUTHENTICATED_CODE, "Not authenticated")
    };

    match reply {
        Reply::Delayed { delay, reply } => (Some(delay), envelope(&request.id, *reply)),
        reply => (None, envelope(&request.id, reply)),
    }
}

fn login(daemon: &mut Daemon, request: &RpcRequest) -> Response {
    let password = request.params.first().and_then(Value::as_str).unwrap_or_default();

    if password != daemon.password {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    let session = random::string(32);

    daemon.sessions.insert(session.clone());

    let mut response = envelope(&request.id, Reply::Result(Value::Bool(true)));

    response.headers_mut().insert(
        SET_COOKIE,
        format!("{SESSION_COOKIE}={session}; Path=/")
            .parse()
            .expect("the session cookie should be a valid header value"),
    );

    response
}

fn envelope(id: &Value, reply: Reply) -> Response {
    let body = match reply {
        Reply::Result(result) => json!({"id": id, "result": result, "error": null}).to_string(),
        Reply::Error { code, message } => {
            json!({"id": id, "result": null, "error": {"code": code, "message": message}}).to_string()
        }
        Reply::Raw(body) => body,
        Reply::Delayed { reply, .. } => return envelope(id, *reply),
    };

    (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response()
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_owned())
}
