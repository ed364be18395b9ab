//! Testing helpers for the Torrust Deluge client.
//!
//! - A fake Deluge web UI ([`mock_daemon`]) that answers the JSON-RPC calls
//!   with scripted replies and records the requests it receives.
//! - Ephemeral configurations pointing to it ([`configuration`]).
pub mod configuration;
pub mod mock_daemon;
pub mod random;
