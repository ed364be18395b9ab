//! A client for the [Deluge](https://deluge-torrent.org/) BitTorrent daemon,
//! through the JSON-RPC interface of its web UI.
//!
//! The client can:
//!
//! - Log in to the web UI and keep the session cookie.
//! - Call any RPC method, logging in again and retrying once when the
//!   session expired.
//! - Discover the daemon version and the hosts known by the web UI.
//! - List the torrents ("transfers") with the status layout of Deluge `1.x`,
//!   Deluge `2.x`, or a layout compatible with both.
//!
//! # Usage
//!
//! ```rust,no_run
//! use torrust_deluge_client::client::{Client, Schema};
//! use torrust_deluge_client_configuration::Deluge;
//!
//! # async fn run() -> Result<(), torrust_deluge_client::client::Error> {
//! let config = Deluge {
//!     password: "deluge".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut client = Client::connect(config).await?;
//!
//! println!("Deluge version: {:?}", client.version());
//!
//! let transfers = client.list_transfers(Schema::Compat).await?;
//!
//! println!("{} torrents", transfers.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The client only needs the `[deluge]` section of the
//! [configuration](torrust_deluge_client_configuration). It can be loaded
//! from a TOML file and overridden with environment variables:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [deluge]
//! url = "http://localhost:8112"
//! password = "deluge"
//! http_user = ""
//! http_pass = ""
//! timeout = 5
//! verify_ssl = true
//! ```
//!
//! # Logging
//!
//! The client emits [`tracing`] events. Applications can install their own
//! subscriber or use [`bootstrap::logging::setup`].
pub mod bootstrap;
pub mod client;

pub use client::{Client, Error};
