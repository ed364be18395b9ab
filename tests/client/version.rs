use std::sync::{Arc, Mutex};

use serde_json::json;
use torrust_deluge_client::bootstrap::logging;
use torrust_deluge_client::{Client, Error};
use torrust_deluge_client_test_helpers::configuration::{ephemeral, ephemeral_deluge, ephemeral_deluge_with_version};
use torrust_deluge_client_test_helpers::mock_daemon::{MockDaemon, Reply};
use tracing::level_filters::LevelFilter;

use super::start_daemon_and_client;
use crate::common::fixtures::{hosts, PASSWORD};
use crate::common::logging::{tracing_stderr_init, INIT};

#[tokio::test]
async fn it_should_discover_the_version_of_the_last_host_when_connecting() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = MockDaemon::start(PASSWORD).await;

    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));
    daemon.push_reply("web.get_host_status", Reply::Result(json!(["h1", "Online", "2.0.3"])));

    let client = Client::connect(ephemeral_deluge(&daemon.url(), PASSWORD)).await.unwrap();

    assert_eq!(client.version(), Some("2.0.3"));
    assert!(client.is_authenticated());

    let status_calls = daemon.calls_to("web.get_host_status");
    assert_eq!(status_calls.len(), 1);
    assert_eq!(status_calls[0].params, vec![json!("h1")]);
}

#[tokio::test]
async fn it_should_keep_every_host_known_by_the_web_ui() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));
    daemon.push_reply("web.get_host_status", Reply::Result(json!(["h1", "Online", "2.0.3"])));

    let version = client.discover_version().await.unwrap();

    assert_eq!(version, "2.0.3");

    let backends = client.backends();
    assert_eq!(backends.len(), 2);
    assert_eq!(backends["h0"].address, "127.0.0.1:58846");
    assert_eq!(backends["h1"].address, "10.0.0.1:58846");
    assert_eq!(backends["h1"].protocol, "tcp");
}

#[tokio::test]
async fn it_should_not_discover_the_version_when_it_is_pinned_in_the_configuration() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = MockDaemon::start(PASSWORD).await;

    let client = Client::connect(ephemeral_deluge_with_version(&daemon.url(), PASSWORD, "1.3.15"))
        .await
        .unwrap();

    assert_eq!(client.version(), Some("1.3.15"));
    assert_eq!(daemon.logins(), 1);
    assert!(daemon.calls_to("web.get_hosts").is_empty());
    assert!(daemon.calls_to("web.get_host_status").is_empty());
}

#[tokio::test]
async fn it_should_ask_for_the_status_of_an_empty_host_id_when_there_are_no_hosts() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::Result(json!([])));
    daemon.push_reply("web.get_host_status", Reply::Result(json!(["", "Offline", "2.1.1"])));

    let version = client.discover_version().await.unwrap();

    assert_eq!(version, "2.1.1");
    assert!(client.backends().is_empty());
    assert_eq!(daemon.calls_to("web.get_host_status")[0].params, vec![json!("")]);
}

#[tokio::test]
async fn it_should_fail_when_the_host_status_is_too_short() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, mut client) = start_daemon_and_client().await;

    daemon.push_reply("web.get_hosts", Reply::Result(hosts()));
    daemon.push_reply("web.get_host_status", Reply::Result(json!(["h1", "Online"])));

    let err = client.discover_version().await.unwrap_err();

    assert!(matches!(err, Error::InvalidVersion { .. }));
    assert!(err.to_string().starts_with("invalid data returned while checking version"));
    assert_eq!(err.method(), None);
    assert_eq!(client.version(), None);
}

#[tokio::test]
async fn it_should_fail_and_pass_the_payload_to_the_debug_log_when_a_host_entry_is_malformed() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let (daemon, client) = start_daemon_and_client().await;

    let payloads = Arc::new(Mutex::new(Vec::<String>::new()));
    let captured = payloads.clone();

    let mut client = client.with_debug_log(Arc::new(move |payload: &str| {
        captured.lock().unwrap().push(payload.to_string());
    }));

    daemon.push_reply("web.get_hosts", Reply::Result(json!([["h1", "10.0.0.1", "58846", "tcp"]])));

    let err = client.discover_version().await.unwrap_err();

    assert!(matches!(err, Error::InvalidVersion { .. }));
    assert!(daemon.calls_to("web.get_host_status").is_empty());

    let payloads = payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert!(payloads[0].contains("58846"));
}

#[tokio::test]
async fn it_should_discover_the_version_and_the_backend_of_a_web_ui_with_a_single_host() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = MockDaemon::start(PASSWORD).await;

    daemon.push_reply("web.get_hosts", Reply::Result(json!([["h1", "10.0.0.1", 8112, "tcp"]])));
    daemon.push_reply("web.get_host_status", Reply::Result(json!(["x", "y", "2.0.3"])));

    let config = ephemeral(&daemon.url(), PASSWORD);

    // Logging is off in the ephemeral configuration, so it does not replace the test subscriber.
    logging::setup(&config);

    let client = Client::connect(config.deluge).await.unwrap();

    assert_eq!(client.version(), Some("2.0.3"));

    let backends = client.backends();
    assert_eq!(backends.len(), 1);
    assert_eq!(backends["h1"].id, "h1");
    assert_eq!(backends["h1"].address, "10.0.0.1:8112");
    assert_eq!(backends["h1"].protocol, "tcp");

    assert_eq!(daemon.calls_to("web.get_host_status")[0].params, vec![json!("h1")]);
}
