use reqwest::StatusCode;
use torrust_deluge_client::client::Method;
use torrust_deluge_client::{Client, Error};
use torrust_deluge_client_test_helpers::configuration::{ephemeral_deluge, ephemeral_deluge_with_http_credentials};
use torrust_deluge_client_test_helpers::mock_daemon::MockDaemon;
use torrust_deluge_client_test_helpers::random;
use tracing::level_filters::LevelFilter;

use super::start_daemon_and_client;
use crate::common::fixtures::PASSWORD;
use crate::common::logging::{tracing_stderr_init, INIT};

#[tokio::test]
async fn it_should_log_in_with_the_configured_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    assert!(!client.is_authenticated());

    client.login().await.unwrap();

    assert!(client.is_authenticated());

    let logins = daemon.calls_to("auth.login");
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].params, vec![serde_json::Value::String(PASSWORD.to_string())]);
}

#[tokio::test]
async fn it_should_log_in_before_the_first_call() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    client.call(Method::GetHosts, &[]).await.unwrap();

    assert!(client.is_authenticated());
    assert_eq!(daemon.logins(), 1);
    assert_eq!(daemon.calls()[0].method, "auth.login");
}

#[tokio::test]
async fn it_should_not_log_in_again_while_the_session_is_valid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    client.login().await.unwrap();
    client.call(Method::GetHosts, &[]).await.unwrap();
    client.call(Method::GetHosts, &[]).await.unwrap();

    assert_eq!(daemon.logins(), 1);
}

#[tokio::test]
async fn it_should_send_the_session_cookie_set_by_the_login() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    client.call(Method::GetHosts, &[]).await.unwrap();

    let calls = daemon.calls_to("web.get_hosts");
    assert_eq!(calls.len(), 1);
    assert!(calls[0].session_cookie.is_some());
}

#[tokio::test]
async fn it_should_fail_with_an_authentication_error_when_the_password_is_wrong() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = MockDaemon::start(PASSWORD).await;

    let mut client = Client::new(ephemeral_deluge(&daemon.url(), &random::string(16))).unwrap();

    let err = client.login().await.unwrap_err();

    assert!(
        matches!(err, Error::AuthFailed { method: Method::AuthLogin, status, .. } if status == StatusCode::FORBIDDEN),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().starts_with("authentication failed: "));
    assert!(err.to_string().contains("[auth.login]"));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn it_should_not_send_the_call_when_the_login_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = MockDaemon::start(PASSWORD).await;

    let mut client = Client::new(ephemeral_deluge(&daemon.url(), "wrong password")).unwrap();

    let result = client.call(Method::GetHosts, &[]).await;

    assert!(matches!(result, Err(Error::AuthFailed { .. })));
    assert!(daemon.calls_to("web.get_hosts").is_empty());
}

#[tokio::test]
async fn it_should_send_the_basic_authentication_header_with_every_request() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = MockDaemon::start(PASSWORD).await;

    let config = ephemeral_deluge_with_http_credentials(&daemon.url(), PASSWORD, "user", "pass");

    let mut client = Client::new(config).unwrap();

    client.call(Method::GetHosts, &[]).await.unwrap();

    let calls = daemon.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls
        .iter()
        .all(|call| call.authorization.as_deref() == Some("Basic dXNlcjpwYXNz")));
}

#[tokio::test]
async fn it_should_not_send_an_authorization_header_without_http_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    client.call(Method::GetHosts, &[]).await.unwrap();

    assert!(daemon.calls().iter().all(|call| call.authorization.is_none()));
}
