//! Configuration data structures for the [Torrust Deluge Client](https://docs.rs/torrust-deluge-client).
//!
//! This module contains the configuration data structures for the client of
//! the [Deluge](https://deluge-torrent.org/) `BitTorrent` daemon web
//! interface.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default timeout for a whole HTTP round trip to the Deluge web UI:
/// connecting, sending the request and reading the full response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The default Deluge web UI URL. The daemon's web UI listens on port `8112`.
pub const DEFAULT_DELUGE_URL: &str = "http://localhost:8112";

// Environment variables

/// The whole `deluge-client.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "TORRUST_DELUGE_CLIENT_CONFIG_TOML";

/// The `deluge-client.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_DELUGE_CLIENT_CONFIG_TOML_PATH";

/// Prefix for the environment variables that override single options. For
/// example: `TORRUST_DELUGE_CLIENT_DELUGE__PASSWORD`.
pub const CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_DELUGE_CLIENT_";

/// Separator for nested options in environment variable names.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Deluge = v1::deluge::Deluge;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// It reads the configuration file content (or its path) from the
    /// environment, falling back to the given default path.
    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading extra configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading extra configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading extra configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to merge or extract the configuration from its sources.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: Box<figment::Error> },

    /// Unable to render the configuration as TOML.
    #[error("Failed encoding the configuration as TOML: {source}")]
    TomlEncoding { source: toml::ser::Error },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Box::new(err) }
    }
}
