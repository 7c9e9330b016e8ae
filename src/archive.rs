//! Archive data model and store.
//!
//! The archive is the authoritative ordered list of albums. Every mutation
//! re-serializes the full archive to the configured storage backend, and the
//! same JSON payload doubles as the export/import interchange format.

mod defaults;
mod model;
mod storage;
mod store;

pub use model::*;
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::{ArchiveError, ArchiveStore, export_filename};
