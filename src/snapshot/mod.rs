//! Snapshot identity and storage.
//!
//! A snapshot is one HTTP response persisted as pretty-printed JSON under
//! `<root>/<host>_<digest>.json`. Saving the same method + URL again
//! replaces the previous file.

mod key;
mod record;
mod store;

pub use key::{DIGEST_PREFIX_LEN, SnapshotKey, derive_key};
pub use record::{Headers, SnapshotRecord, SnapshotSummary, parse_body};
pub use store::{DEFAULT_STORAGE_DIR, DeleteOutcome, SnapshotStore};
