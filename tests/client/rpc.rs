use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use torrust_deluge_client::client::Method;
use torrust_deluge_client::{Client, Error};
use torrust_deluge_client_test_helpers::configuration::ephemeral_deluge;
use torrust_deluge_client_test_helpers::mock_daemon::Reply;
use tracing::level_filters::LevelFilter;

use super::start_daemon_and_client;
use crate::common::fixtures::{hosts, PASSWORD};
use crate::common::logging::{tracing_stderr_init, INIT};

#[tokio::test]
async fn it_should_return_the_result_of_a_successful_call() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));

    let response = client.call(Method::GetHosts, &[]).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.result, hosts());
}

#[tokio::test]
async fn it_should_send_the_method_name_and_the_params() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    client.call(Method::GetHostStatus, &[json!("h1")]).await.unwrap();

    let calls = daemon.calls_to("web.get_host_status");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].params, vec![json!("h1")]);
}

#[tokio::test]
async fn it_should_use_a_new_request_id_for_every_request() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    client.call(Method::GetHosts, &[]).await.unwrap();
    client.call(Method::GetHosts, &[]).await.unwrap();

    let ids: Vec<u64> = daemon.calls().iter().filter_map(|call| call.id.as_u64()).collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn it_should_log_in_again_and_retry_once_when_the_daemon_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::error(2, "Session expired"));
    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));

    let response = client.call(Method::GetHosts, &[]).await.unwrap();

    assert_eq!(response.result, hosts());
    assert_eq!(daemon.logins(), 2);
    assert_eq!(daemon.calls_to("web.get_hosts").len(), 2);
}

#[tokio::test]
async fn it_should_recover_transparently_when_the_session_expires() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));

    client.call(Method::GetHosts, &[]).await.unwrap();

    daemon.expire_sessions();

    let response = client.call(Method::GetHosts, &[]).await.unwrap();

    assert_eq!(response.result, hosts());
    assert_eq!(daemon.logins(), 2);
}

#[tokio::test]
async fn it_should_fail_with_a_deluge_error_when_the_retry_fails_too() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::error(3, "Unknown method"));

    let err = client.call(Method::GetHosts, &[]).await.unwrap_err();

    assert_eq!(err.method(), Some(Method::GetHosts));

    match err {
        Error::Deluge { method, code, message } => {
            assert_eq!(method, Method::GetHosts);
            assert_eq!(code, 3);
            assert_eq!(message, "Unknown method");
        }
        err => panic!("unexpected error: {err:?}"),
    }

    // One call and only one retry.
    assert_eq!(daemon.calls_to("web.get_hosts").len(), 2);
    assert_eq!(daemon.logins(), 2);
}

#[tokio::test]
async fn it_should_accept_an_error_object_with_a_zero_code_as_a_success() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply(
        "web.get_hosts",
        Reply::Raw(r#"{"id": 1, "result": [], "error": {"code": 0, "message": ""}}"#.to_string()),
    );

    let response = client.call(Method::GetHosts, &[]).await.unwrap();

    assert_eq!(response.result, json!([]));
    assert_eq!(daemon.logins(), 1);
}

#[tokio::test]
async fn it_should_fail_with_a_decode_error_and_pass_the_payload_to_the_debug_log() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, client) = start_daemon_and_client().await;

    let payloads = Arc::new(Mutex::new(Vec::<String>::new()));
    let captured = payloads.clone();

    let mut client = client.with_debug_log(Arc::new(move |payload: &str| {
        captured.lock().unwrap().push(payload.to_string());
    }));

    daemon.push_reply("web.get_hosts", Reply::Raw("<html>Bad Gateway</html>".to_string()));

    let err = client.call(Method::GetHosts, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Decode { method: Method::GetHosts, .. }));
    assert_eq!(*payloads.lock().unwrap(), vec!["<html>Bad Gateway</html>".to_string()]);
}

#[tokio::test]
async fn it_should_count_the_bytes_of_every_response_body() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    let body = r#"{"id": 2, "result": null, "error": null}"#;

    daemon.push_reply("web.get_hosts", Reply::Raw(body.to_string()));

    assert_eq!(client.bytes_received(), 0);

    client.login().await.unwrap();

    let after_login = client.bytes_received();
    assert!(after_login > 0);

    client.call(Method::GetHosts, &[]).await.unwrap();

    assert_eq!(client.bytes_received(), after_login + body.len() as u64);
}

#[tokio::test]
async fn it_should_fail_with_a_transport_error_when_the_web_ui_is_not_reachable() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let address = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let url = format!("http://{address}").parse().unwrap();

    let mut client = Client::new(ephemeral_deluge(&url, PASSWORD)).unwrap();

    let err = client.call(Method::GetHosts, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Transport { method: Method::AuthLogin, .. }));
    assert_eq!(err.method(), Some(Method::AuthLogin));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn it_should_log_in_again_after_a_transport_error() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, _) = start_daemon_and_client().await;

    let mut config = ephemeral_deluge(&daemon.url(), PASSWORD);
    config.timeout = Duration::from_millis(200);

    let mut client = Client::new(config).unwrap();

    daemon.push_reply("web.get_hosts", Reply::delayed(Duration::from_secs(2), Reply::Result(Value::Null)));
    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));

    let err = client.call(Method::GetHosts, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Transport { method: Method::GetHosts, .. }));
    assert!(!client.is_authenticated());

    let response = client.call(Method::GetHosts, &[]).await.unwrap();

    assert_eq!(response.result, hosts());
    assert_eq!(daemon.logins(), 2);
}
