//! Version `1` for [Torrust Deluge Client](https://docs.rs/torrust-deluge-client)
//! configuration data structures.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `deluge-client.toml` or from an environment variable with the same
//! content as the file. Single options can be overridden with environment
//! variables prefixed with `TORRUST_DELUGE_CLIENT_`, using `__` to separate
//! the section from the option:
//!
//! ```text
//! TORRUST_DELUGE_CLIENT_DELUGE__PASSWORD=deluge
//! ```
//!
//! When you run the client without providing the configuration via a file or
//! env var, the default configuration is used.
//!
//! ## Sections
//!
//! - [`Logging configuration`](crate::v1::logging::Logging)
//! - [`Deluge web UI configuration`](crate::v1::deluge::Deluge)
//!
//! ## Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [deluge]
//! url = "http://localhost:8112/"
//! password = ""
//! http_user = ""
//! http_pass = ""
//! timeout = 5
//! verify_ssl = true
//! ```
pub mod deluge;
pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::deluge::Deluge;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the client.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Connection parameters for the Deluge web UI.
    #[serde(default)]
    pub deluge: Deluge,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct. If the whole
    /// configuration in toml format is included in the `info.config_toml`
    /// string it has priority over the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration sources can't be merged or the
    /// result is not a valid configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::string(config_toml))
        } else {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let info = Info {
            config_toml: None,
            config_toml_path: path.to_string(),
        };

        Configuration::load(&info)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can't be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string(self).map_err(|source| Error::TomlEncoding { source })
    }
}
