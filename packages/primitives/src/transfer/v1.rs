//! Transfer status layout of the Deluge `1.x` web UI.
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{whole, File, Tracker, TransferStatus};
use crate::flex_bool::FlexBool;

/// Status of one torrent as reported by Deluge `1.x`.
///
/// It's decoded through the canonical [`TransferStatus`], so it tolerates
/// the same payloads. It's serialized with the `1.x` field names only.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(from = "TransferStatus")]
pub struct TransferStatusV1 {
    pub comment: String,
    pub active_time: i64,
    pub is_seed: bool,
    pub hash: String,
    pub upload_payload_rate: i64,
    pub move_completed_path: String,
    pub private: bool,
    pub total_payload_upload: i64,
    pub paused: bool,
    pub seed_rank: i64,
    pub seeding_time: i64,
    pub max_upload_slots: i64,
    pub prioritize_first_last: bool,
    pub distributed_copies: f64,
    pub download_payload_rate: i64,
    pub message: String,
    pub num_peers: i64,
    pub max_download_speed: i64,
    pub max_connections: i64,
    pub compact: bool,
    pub ratio: f64,
    pub total_peers: i64,
    pub total_size: i64,
    pub total_wanted: i64,
    pub state: String,
    pub file_priorities: Vec<i64>,
    pub label: String,
    pub max_upload_speed: i64,
    pub remove_at_ratio: bool,
    pub tracker: String,
    pub save_path: String,
    pub progress: f64,
    pub time_added: f64,
    pub tracker_host: String,
    pub total_uploaded: i64,
    pub files: Vec<File>,
    pub total_done: i64,
    pub num_pieces: i64,
    pub tracker_status: String,
    pub total_seeds: i64,
    pub move_on_completed: FlexBool,
    pub next_announce: i64,
    pub stop_at_ratio: bool,
    pub file_progress: Vec<f64>,
    pub move_completed: FlexBool,
    pub piece_length: i64,
    pub all_time_download: i64,
    pub move_on_completed_path: String,
    pub num_seeds: i64,
    pub peers: Vec<Value>,
    pub name: String,
    pub trackers: Vec<TrackerV1>,
    pub total_payload_download: i64,
    pub is_auto_managed: bool,
    pub seeds_peers_ratio: f64,
    pub queue: i64,
    pub num_files: i64,
    pub eta: Option<Number>,
    pub stop_ratio: f64,
    pub is_finished: bool,
}

/// One tracker of a torrent as reported by Deluge `1.x`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(from = "Tracker")]
pub struct TrackerV1 {
    pub min_announce: Value,
    pub next_announce: Value,
    pub send_stats: bool,
    pub verified: bool,
    pub complete_sent: bool,
    pub start_sent: bool,
    pub updating: bool,
    pub fails: i64,
    pub fail_limit: i64,
    pub source: i64,
    pub tier: i64,
    pub url: String,
}

impl From<Tracker> for TrackerV1 {
    fn from(tracker: Tracker) -> Self {
        Self {
            min_announce: tracker.min_announce,
            next_announce: tracker.next_announce,
            send_stats: tracker.send_stats,
            verified: tracker.verified,
            complete_sent: tracker.complete_sent,
            start_sent: tracker.start_sent,
            updating: tracker.updating,
            fails: tracker.fails,
            fail_limit: tracker.fail_limit,
            source: whole(tracker.source),
            tier: whole(tracker.tier),
            url: tracker.url,
        }
    }
}

impl From<TransferStatus> for TransferStatusV1 {
    fn from(status: TransferStatus) -> Self {
        Self {
            comment: status.comment,
            active_time: whole(status.active_time),
            is_seed: status.is_seed,
            hash: status.hash,
            upload_payload_rate: whole(status.upload_payload_rate),
            move_completed_path: status.move_completed_path,
            private: status.private,
            total_payload_upload: whole(status.total_payload_upload),
            paused: status.paused,
            seed_rank: status.seed_rank,
            seeding_time: whole(status.seeding_time),
            max_upload_slots: whole(status.max_upload_slots),
            prioritize_first_last: status.prioritize_first_last,
            distributed_copies: status.distributed_copies,
            download_payload_rate: whole(status.download_payload_rate),
            message: status.message,
            num_peers: status.num_peers,
            max_download_speed: whole(status.max_download_speed),
            max_connections: whole(status.max_connections),
            compact: status.compact,
            ratio: status.ratio,
            total_peers: status.total_peers,
            total_size: whole(status.total_size),
            total_wanted: whole(status.total_wanted),
            state: status.state,
            file_priorities: status.file_priorities,
            label: status.label,
            max_upload_speed: whole(status.max_upload_speed),
            remove_at_ratio: status.remove_at_ratio,
            tracker: status.tracker,
            save_path: status.save_path,
            progress: status.progress,
            time_added: status.time_added,
            tracker_host: status.tracker_host,
            total_uploaded: whole(status.total_uploaded),
            files: status.files,
            total_done: whole(status.total_done),
            num_pieces: whole(status.num_pieces),
            tracker_status: status.tracker_status,
            total_seeds: whole(status.total_seeds),
            move_on_completed: status.move_on_completed,
            next_announce: whole(status.next_announce),
            stop_at_ratio: status.stop_at_ratio.into(),
            file_progress: status.file_progress,
            move_completed: status.move_completed,
            piece_length: whole(status.piece_length),
            all_time_download: whole(status.all_time_download),
            move_on_completed_path: status.move_on_completed_path,
            num_seeds: status.num_seeds,
            peers: status.peers,
            name: status.name,
            trackers: status.trackers.into_iter().map(TrackerV1::from).collect(),
            total_payload_download: whole(status.total_payload_download),
            is_auto_managed: status.is_auto_managed,
            seeds_peers_ratio: status.seeds_peers_ratio,
            queue: status.queue,
            num_files: whole(status.num_files),
            eta: status.eta,
            stop_ratio: status.stop_ratio,
            is_finished: status.is_finished,
        }
    }
}
