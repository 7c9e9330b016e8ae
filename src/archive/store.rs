use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::default_catalog;
use super::model::{Album, Archive};
use super::storage::StorageBackend;

/// Errors surfaced by archive persistence and import.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The payload was not a well-formed JSON array of albums. The archive
    /// in memory is left untouched when this is returned from an import.
    #[error("malformed archive payload: {0}")]
    Parse(#[from] serde_json::Error),
    /// The backend rejected a snapshot write. The in-memory archive keeps
    /// the mutation; only durability is lost.
    #[error("failed to persist archive: {0}")]
    Storage(#[from] std::io::Error),
}

/// The authoritative in-memory archive, synchronized to a storage backend
/// on every mutation.
pub struct ArchiveStore<B: StorageBackend> {
    backend: B,
    key: String,
    albums: Archive,
}

impl<B: StorageBackend> ArchiveStore<B> {
    /// Load the archive from `backend` under `key`.
    ///
    /// An absent or unparsable snapshot falls back to the built-in default
    /// catalog. The fallback is not written back to storage; the default
    /// only becomes durable on the next real mutation.
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let albums = match backend.get(&key) {
            Some(payload) => match serde_json::from_str::<Archive>(&payload) {
                Ok(albums) => {
                    info!(albums = albums.len(), "loaded persisted archive");
                    albums
                }
                Err(e) => {
                    warn!(%e, "persisted archive is unreadable, using default catalog");
                    default_catalog()
                }
            },
            None => {
                info!("no persisted archive, using default catalog");
                default_catalog()
            }
        };

        Self {
            backend,
            key,
            albums,
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Prepend a new album (most-recent-first display order) and persist.
    pub fn create(&mut self, album: Album) -> Result<(), ArchiveError> {
        self.albums.insert(0, album);
        self.persist()
    }

    /// Replace the album with matching id in place, keeping its position.
    /// Returns whether a matching album existed.
    pub fn update(&mut self, id: &str, album: Album) -> Result<bool, ArchiveError> {
        match self.albums.iter_mut().find(|a| a.id == id) {
            Some(slot) => {
                *slot = album;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the album with matching id, returning it when found.
    pub fn delete(&mut self, id: &str) -> Result<Option<Album>, ArchiveError> {
        match self.albums.iter().position(|a| a.id == id) {
            Some(pos) => {
                let removed = self.albums.remove(pos);
                self.persist()?;
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }

    /// Wholesale replace the archive with a parsed external payload.
    ///
    /// A malformed payload fails without mutating the existing archive.
    pub fn replace_all(&mut self, payload: &str) -> Result<(), ArchiveError> {
        let parsed: Archive = serde_json::from_str(payload)?;
        info!(albums = parsed.len(), "imported archive payload");
        self.albums = parsed;
        self.persist()
    }

    /// The interchange payload: a JSON array of albums.
    pub fn serialize(&self) -> Result<String, ArchiveError> {
        Ok(serde_json::to_string(&self.albums)?)
    }

    /// Pretty-printed payload for the download artifact.
    pub fn export_pretty(&self) -> Result<String, ArchiveError> {
        Ok(serde_json::to_string_pretty(&self.albums)?)
    }

    fn persist(&mut self) -> Result<(), ArchiveError> {
        let payload = serde_json::to_string(&self.albums)?;
        if let Err(e) = self.backend.set(&self.key, &payload) {
            warn!(%e, "archive snapshot write failed");
            return Err(e.into());
        }
        Ok(())
    }
}

/// Name for the export artifact: `archive_<ISO date>.json`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("archive_{}.json", date.format("%Y-%m-%d"))
}
