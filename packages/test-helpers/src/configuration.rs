use std::time::Duration;

use torrust_deluge_client_configuration::{Configuration, Deluge, Threshold};
use url::Url;

/// Timeout used by the test clients. The mock daemon runs locally, so it can
/// be short.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(2);

/// This configuration is used for testing. It points to a web UI running on
/// the given URL, with logging disabled.
#[must_use]
pub fn ephemeral(url: &Url, password: &str) -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `Debug` for tests debugging
    config.deluge = ephemeral_deluge(url, password);

    config
}

/// The `[deluge]` section of the [`ephemeral`] configuration.
#[must_use]
pub fn ephemeral_deluge(url: &Url, password: &str) -> Deluge {
    Deluge {
        url: url.clone(),
        password: password.to_owned(),
        timeout: TEST_TIMEOUT,
        ..Default::default()
    }
}

/// Like [`ephemeral_deluge`] but with HTTP basic authentication credentials,
/// for web UIs behind a reverse proxy.
#[must_use]
pub fn ephemeral_deluge_with_http_credentials(url: &Url, password: &str, http_user: &str, http_pass: &str) -> Deluge {
    Deluge {
        http_user: http_user.to_owned(),
        http_pass: http_pass.to_owned(),
        ..ephemeral_deluge(url, password)
    }
}

/// Like [`ephemeral_deluge`] but with a pinned daemon version, which skips
/// the version discovery.
#[must_use]
pub fn ephemeral_deluge_with_version(url: &Url, password: &str, version: &str) -> Deluge {
    Deluge {
        version: Some(version.to_owned()),
        ..ephemeral_deluge(url, password)
    }
}
