//! Transfer lists decoded with the layout of a daemon generation.
use derive_more::Display;
use torrust_deluge_client_primitives::transfer::v1::TransferStatusV1;
use torrust_deluge_client_primitives::transfer::v2::TransferStatusV2;
use torrust_deluge_client_primitives::transfer::{TransferMap, TransferStatus};

/// The transfer status layout used to decode the transfer list.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Schema {
    /// Deluge `1.x`.
    #[display("legacy")]
    Legacy,
    /// Deluge `2.x`.
    #[display("current")]
    Current,
    /// Fields of both generations. It works with any daemon.
    #[default]
    #[display("compat")]
    Compat,
}

/// A transfer list keyed by torrent id.
#[derive(Debug, Clone, PartialEq)]
pub enum Transfers {
    Legacy(TransferMap<TransferStatusV1>),
    Current(TransferMap<TransferStatusV2>),
    Compat(TransferMap<TransferStatus>),
}

impl Transfers {
    #[must_use]
    pub fn schema(&self) -> Schema {
        match self {
            Transfers::Legacy(_) => Schema::Legacy,
            Transfers::Current(_) => Schema::Current,
            Transfers::Compat(_) => Schema::Compat,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Transfers::Legacy(transfers) => transfers.len(),
            Transfers::Current(transfers) => transfers.len(),
            Transfers::Compat(transfers) => transfers.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, torrent_id: &str) -> bool {
        match self {
            Transfers::Legacy(transfers) => transfers.contains_key(torrent_id),
            Transfers::Current(transfers) => transfers.contains_key(torrent_id),
            Transfers::Compat(transfers) => transfers.contains_key(torrent_id),
        }
    }

    /// The name of a torrent, whatever the layout is.
    #[must_use]
    pub fn name(&self, torrent_id: &str) -> Option<&str> {
        match self {
            Transfers::Legacy(transfers) => transfers.get(torrent_id).map(|status| status.name.as_str()),
            Transfers::Current(transfers) => transfers.get(torrent_id).map(|status| status.name.as_str()),
            Transfers::Compat(transfers) => transfers.get(torrent_id).map(|status| status.name.as_str()),
        }
    }
}
