//! Torrent ("transfer") status records returned by `core.get_torrents_status`.
//!
//! The daemon answers with an object keyed by torrent id (info-hash):
//!
//! ```json
//! {
//!   "9c38422213e30bff212b30c360d26f9a02136422": {
//!     "name": "ubuntu-24.04-desktop-amd64.iso",
//!     "state": "Seeding",
//!     "progress": 100.0,
//!     "move_completed": "true"
//!   }
//! }
//! ```
//!
//! The layout of each record changed between daemon generations. There is
//! one canonical record, [`TransferStatus`], which contains the fields of
//! both generations, and two projections that keep the exact layout of each
//! one:
//!
//! - [`TransferStatusV1`](crate::transfer::v1::TransferStatusV1): Deluge `1.x`.
//! - [`TransferStatusV2`](crate::transfer::v2::TransferStatusV2): Deluge `2.x`.
//!
//! Every field is optional in the payload. Missing fields, and fields sent
//! as `null`, take their default value.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use serde_with::{serde_as, DefaultOnNull};

use crate::flex_bool::FlexBool;
use crate::TorrentId;

pub mod v1;
pub mod v2;

/// Transfer statuses keyed by torrent id.
pub type TransferMap<T> = HashMap<TorrentId, T>;

/// Status of one torrent, compatible with Deluge `1.x` and `2.x`.
#[allow(clippy::struct_excessive_bools)]
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(default)]
pub struct TransferStatus {
    // Identity
    /// The torrent's info-hash.
    #[serde_as(as = "DefaultOnNull")]
    pub hash: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub comment: String,
    #[serde_as(as = "DefaultOnNull")]
    pub creator: String,
    #[serde_as(as = "DefaultOnNull")]
    pub owner: String,
    /// Only reported when the daemon runs the `Label` plugin.
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    #[serde_as(as = "DefaultOnNull")]
    pub private: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub shared: bool,

    // State
    /// `Downloading`, `Seeding`, `Paused`, `Checking`, `Queued`, `Error`, ...
    #[serde_as(as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(as = "DefaultOnNull")]
    pub message: String,
    /// Completion percentage, from `0.0` to `100.0`.
    #[serde_as(as = "DefaultOnNull")]
    pub progress: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub paused: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub is_seed: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub is_finished: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub is_auto_managed: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub auto_managed: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub compact: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub seed_mode: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub super_seeding: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub sequential_download: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub prioritize_first_last: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub prioritize_first_last_pieces: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub queue: i64,

    // Timing (seconds)
    #[serde_as(as = "DefaultOnNull")]
    pub active_time: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub seeding_time: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub finished_time: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub time_added: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub completed_time: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub last_seen_complete: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub time_since_download: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub time_since_upload: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub time_since_transfer: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub next_announce: f64,
    /// Estimated time to finish, in seconds. Integer or float depending on
    /// the daemon version.
    pub eta: Option<Number>,

    // Amounts (bytes) and rates (bytes per second)
    #[serde_as(as = "DefaultOnNull")]
    pub all_time_download: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub download_payload_rate: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub upload_payload_rate: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_done: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_payload_download: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_payload_upload: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_uploaded: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_wanted: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_remaining: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_size: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub distributed_copies: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub ratio: f64,

    // Limits
    #[serde_as(as = "DefaultOnNull")]
    pub max_connections: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_download_speed: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_upload_slots: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_upload_speed: f64,
    pub stop_at_ratio: FlexBool,
    #[serde_as(as = "DefaultOnNull")]
    pub stop_ratio: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub remove_at_ratio: bool,

    // Paths
    #[serde_as(as = "DefaultOnNull")]
    pub save_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub download_location: String,
    #[serde_as(as = "DefaultOnNull")]
    pub storage_mode: String,
    pub move_on_completed: FlexBool,
    #[serde_as(as = "DefaultOnNull")]
    pub move_on_completed_path: String,
    pub move_completed: FlexBool,
    #[serde_as(as = "DefaultOnNull")]
    pub move_completed_path: String,

    // Swarm
    #[serde_as(as = "DefaultOnNull")]
    pub num_peers: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub num_seeds: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_peers: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_seeds: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub seeds_peers_ratio: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub seed_rank: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub peers: Vec<Value>,

    // Trackers
    #[serde_as(as = "DefaultOnNull")]
    pub tracker: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tracker_host: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tracker_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub trackers: Vec<Tracker>,

    // Content
    #[serde_as(as = "DefaultOnNull")]
    pub num_files: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub num_pieces: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub piece_length: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub files: Vec<File>,
    #[serde_as(as = "DefaultOnNull")]
    pub orig_files: Vec<File>,
    #[serde_as(as = "DefaultOnNull")]
    pub file_priorities: Vec<i64>,
    #[serde_as(as = "DefaultOnNull")]
    pub file_progress: Vec<f64>,
    pub pieces: Value,
}

impl TransferStatus {
    /// The estimated time to finish in seconds, if the daemon reported it.
    #[must_use]
    pub fn eta_seconds(&self) -> Option<f64> {
        self.eta.as_ref().and_then(Number::as_f64)
    }

    /// Returns `true` if the torrent will be moved to
    /// [`move_completed_path`](Self::move_completed_path) (Deluge `2.x`) or
    /// [`move_on_completed_path`](Self::move_on_completed_path) (Deluge `1.x`)
    /// when it finishes.
    #[must_use]
    pub fn moves_when_completed(&self) -> bool {
        self.move_completed.is_true() || self.move_on_completed.is_true()
    }
}

/// One tracker of a torrent.
#[allow(clippy::struct_excessive_bools)]
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(default)]
pub struct Tracker {
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub trackerid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub message: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tier: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub source: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub fails: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub fail_limit: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub updating: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub start_sent: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub complete_sent: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub send_stats: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub verified: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub scrape_incomplete: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub scrape_complete: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub scrape_downloaded: f64,
    // Timestamps or `null`.
    pub next_announce: Value,
    pub min_announce: Value,
    #[serde_as(as = "DefaultOnNull")]
    pub endpoints: Vec<Value>,
    #[serde_as(as = "DefaultOnNull")]
    pub last_error: TrackerError,
}

/// The last error reported by a tracker.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct TrackerError {
    #[serde_as(as = "DefaultOnNull")]
    pub value: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub category: String,
}

/// One file of a torrent.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct File {
    #[serde_as(as = "DefaultOnNull")]
    pub index: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub size: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub offset: i64,
}

/// It truncates a number the daemon sends as a float in some versions to
/// the integer used by the older layout.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn whole(value: f64) -> i64 {
    value as i64
}
