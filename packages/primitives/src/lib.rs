//! Primitive types for the [Torrust Deluge Client](https://docs.rs/torrust-deluge-client).
//!
//! This module contains the data structures returned by the
//! [Deluge](https://deluge-torrent.org/) web UI JSON-RPC API.
//!
//! - [`Backend`](crate::backend::Backend): one daemon host the web UI can
//!   connect to.
//! - [`TransferStatus`](crate::transfer::TransferStatus): the status of one
//!   torrent, in the layout compatible with Deluge `1.x` and `2.x`.
//! - [`FlexBool`](crate::flex_bool::FlexBool): a boolean the daemon sometimes
//!   sends as a string.
use std::collections::HashMap;

pub mod backend;
pub mod flex_bool;
pub mod transfer;

/// The torrent identifier used as key in the transfer lists. It's the
/// hex-encoded info-hash of the torrent.
pub type TorrentId = String;

/// Backends keyed by their host id.
pub type Backends = HashMap<String, backend::Backend>;
