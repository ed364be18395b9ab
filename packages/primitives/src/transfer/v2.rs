//! Transfer status layout of the Deluge `2.x` web UI.
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{File, Tracker, TransferStatus};
use crate::flex_bool::FlexBool;

/// Status of one torrent as reported by Deluge `2.x`.
///
/// It's the canonical [`TransferStatus`] without the fields removed in
/// `2.x` (`label` and `compact`).
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(from = "TransferStatus")]
pub struct TransferStatusV2 {
    pub active_time: f64,
    pub seeding_time: f64,
    pub finished_time: f64,
    pub all_time_download: f64,
    pub storage_mode: String,
    pub distributed_copies: f64,
    pub download_payload_rate: f64,
    pub file_priorities: Vec<i64>,
    pub hash: String,
    pub auto_managed: bool,
    pub is_auto_managed: bool,
    pub is_finished: bool,
    pub max_connections: f64,
    pub max_download_speed: f64,
    pub max_upload_slots: f64,
    pub max_upload_speed: f64,
    pub message: String,
    pub move_on_completed_path: String,
    pub move_on_completed: FlexBool,
    pub move_completed_path: String,
    pub move_completed: FlexBool,
    pub next_announce: f64,
    pub num_peers: i64,
    pub num_seeds: i64,
    pub owner: String,
    pub paused: bool,
    pub prioritize_first_last: bool,
    pub prioritize_first_last_pieces: bool,
    pub sequential_download: bool,
    pub progress: f64,
    pub shared: bool,
    pub remove_at_ratio: bool,
    pub save_path: String,
    pub download_location: String,
    pub seeds_peers_ratio: f64,
    pub seed_rank: i64,
    pub state: String,
    pub stop_at_ratio: FlexBool,
    pub stop_ratio: f64,
    pub time_added: f64,
    pub total_done: f64,
    pub total_payload_download: f64,
    pub total_payload_upload: f64,
    pub total_peers: i64,
    pub total_seeds: f64,
    pub total_uploaded: f64,
    pub total_wanted: f64,
    pub total_remaining: f64,
    pub tracker: String,
    pub tracker_host: String,
    pub trackers: Vec<Tracker>,
    pub tracker_status: String,
    pub upload_payload_rate: f64,
    pub comment: String,
    pub creator: String,
    pub num_files: f64,
    pub num_pieces: f64,
    pub piece_length: f64,
    pub private: bool,
    pub total_size: f64,
    pub eta: Option<Number>,
    pub file_progress: Vec<f64>,
    pub files: Vec<File>,
    pub orig_files: Vec<File>,
    pub is_seed: bool,
    pub peers: Vec<Value>,
    pub queue: i64,
    pub ratio: f64,
    pub completed_time: f64,
    pub last_seen_complete: f64,
    pub name: String,
    pub pieces: Value,
    pub seed_mode: bool,
    pub super_seeding: bool,
    pub time_since_download: f64,
    pub time_since_upload: f64,
    pub time_since_transfer: f64,
}

impl From<TransferStatus> for TransferStatusV2 {
    fn from(status: TransferStatus) -> Self {
        Self {
            active_time: status.active_time,
            seeding_time: status.seeding_time,
            finished_time: status.finished_time,
            all_time_download: status.all_time_download,
            storage_mode: status.storage_mode,
            distributed_copies: status.distributed_copies,
            download_payload_rate: status.download_payload_rate,
            file_priorities: status.file_priorities,
            hash: status.hash,
            auto_managed: status.auto_managed,
            is_auto_managed: status.is_auto_managed,
            is_finished: status.is_finished,
            max_connections: status.max_connections,
            max_download_speed: status.max_download_speed,
            max_upload_slots: status.max_upload_slots,
            max_upload_speed: status.max_upload_speed,
            message: status.message,
            move_on_completed_path: status.move_on_completed_path,
            move_on_completed: status.move_on_completed,
            move_completed_path: status.move_completed_path,
            move_completed: status.move_completed,
            next_announce: status.next_announce,
            num_peers: status.num_peers,
            num_seeds: status.num_seeds,
            owner: status.owner,
            paused: status.paused,
            prioritize_first_last: status.prioritize_first_last,
            prioritize_first_last_pieces: status.prioritize_first_last_pieces,
            sequential_download: status.sequential_download,
            progress: status.progress,
            shared: status.shared,
            remove_at_ratio: status.remove_at_ratio,
            save_path: status.save_path,
            download_location: status.download_location,
            seeds_peers_ratio: status.seeds_peers_ratio,
            seed_rank: status.seed_rank,
            state: status.state,
            stop_at_ratio: status.stop_at_ratio,
            stop_ratio: status.stop_ratio,
            time_added: status.time_added,
            total_done: status.total_done,
            total_payload_download: status.total_payload_download,
            total_payload_upload: status.total_payload_upload,
            total_peers: status.total_peers,
            total_seeds: status.total_seeds,
            total_uploaded: status.total_uploaded,
            total_wanted: status.total_wanted,
            total_remaining: status.total_remaining,
            tracker: status.tracker,
            tracker_host: status.tracker_host,
            trackers: status.trackers,
            tracker_status: status.tracker_status,
            upload_payload_rate: status.upload_payload_rate,
            comment: status.comment,
            creator: status.creator,
            num_files: status.num_files,
            num_pieces: status.num_pieces,
            piece_length: status.piece_length,
            private: status.private,
            total_size: status.total_size,
            eta: status.eta,
            file_progress: status.file_progress,
            files: status.files,
            orig_files: status.orig_files,
            is_seed: status.is_seed,
            peers: status.peers,
            queue: status.queue,
            ratio: status.ratio,
            completed_time: status.completed_time,
            last_seen_complete: status.last_seen_complete,
            name: status.name,
            pieces: status.pieces,
            seed_mode: status.seed_mode,
            super_seeding: status.super_seeding,
            time_since_download: status.time_since_download,
            time_since_upload: status.time_since_upload,
            time_since_transfer: status.time_since_transfer,
        }
    }
}
