use std::time::Duration;

use tracing::info;

use crate::archive::{Album, ArchiveError, ArchiveStore, StorageBackend, Track};
use crate::config::Settings;
use crate::selection::{self, Selection};
use crate::session::{MediaHandle, PlaybackSession};

/// The main application model: archive, navigation and playback in one
/// place, with the invariants between them enforced here.
pub struct App<M: MediaHandle, B: StorageBackend> {
    pub store: ArchiveStore<B>,
    pub selection: Selection,
    pub session: PlaybackSession<M>,
    settings: Settings,
}

impl<M: MediaHandle, B: StorageBackend> App<M, B> {
    /// Create the app by loading the persisted archive from `backend`.
    pub fn new(backend: B, media: M, settings: Settings) -> Self {
        let store = ArchiveStore::load(backend, settings.storage.key.clone());
        let selection = Selection::new(Duration::from_millis(settings.navigation.guard_window_ms));
        let session = PlaybackSession::new(media, settings.playback.clone());

        Self {
            store,
            selection,
            session,
            settings,
        }
    }

    /// Open an album in the gallery. Unknown ids are ignored.
    pub fn open_album(&mut self, id: &str) -> bool {
        if self.store.album(id).is_none() {
            return false;
        }
        self.selection.select(Some(id));
        true
    }

    pub fn close_album(&mut self) {
        self.selection.select(None);
    }

    /// Open the album named by a `#album-<id>` fragment, if it exists in
    /// the archive; anything else is ignored.
    pub fn open_deep_link(&mut self, fragment: &str) -> bool {
        match selection::parse_marker(fragment) {
            Some(id) => {
                let id = id.to_string();
                self.open_album(&id)
            }
            None => false,
        }
    }

    /// Start playing a track. Membership is validated at set time: the
    /// track must belong to the album when the selection is made.
    pub fn play(&mut self, album_id: &str, track_id: &str) -> bool {
        let Some(album) = self.store.album(album_id) else {
            return false;
        };
        let Some(track) = album.track(track_id) else {
            return false;
        };
        let track = track.clone();

        self.selection.select(Some(album_id));
        self.session.load_track(album_id, &track, true);
        true
    }

    /// Create a new album (prepended, most-recent-first).
    pub fn create_album(&mut self, album: Album) -> Result<(), ArchiveError> {
        self.store.create(album)
    }

    /// Update an album in place. When the update drops the currently
    /// loaded track, the stale track selection is cleared and playback
    /// stops rather than continuing against a detached track.
    pub fn update_album(&mut self, id: &str, album: Album) -> Result<bool, ArchiveError> {
        let updated = self.store.update(id, album)?;
        if updated && self.session.current_album_id() == Some(id) {
            let track_survives = match self.session.current_track_id() {
                Some(track_id) => self
                    .store
                    .album(id)
                    .is_some_and(|a| a.has_track(track_id)),
                None => true,
            };
            if !track_survives {
                info!(album = id, "updated album dropped the playing track, stopping");
                self.session.stop();
            }
        }
        Ok(updated)
    }

    /// Delete an album. Deleting the open album clears the selection
    /// entirely and stops the active session, since its track belonged to
    /// that album.
    pub fn delete_album(&mut self, id: &str) -> Result<bool, ArchiveError> {
        let removed = self.store.delete(id)?;
        if removed.is_none() {
            return Ok(false);
        }

        if self.selection.current_album() == Some(id) {
            self.selection.select(None);
        }
        if self.session.current_album_id() == Some(id) {
            self.session.stop();
        }
        Ok(true)
    }

    /// Import an external payload, replacing the whole archive. A malformed
    /// payload leaves everything untouched. On success, navigation and
    /// playback that reference albums absent from the new archive are
    /// cleared.
    pub fn import(&mut self, payload: &str) -> Result<(), ArchiveError> {
        self.store.replace_all(payload)?;

        if let Some(open) = self.selection.current_album().map(str::to_string) {
            if self.store.album(&open).is_none() {
                self.selection.select(None);
            }
        }
        if let Some(playing) = self.session.current_album_id().map(str::to_string) {
            if self.store.album(&playing).is_none() {
                self.session.stop();
            }
        }
        Ok(())
    }

    /// Pretty-printed export payload for the download artifact.
    pub fn export_pretty(&self) -> Result<String, ArchiveError> {
        self.store.export_pretty()
    }

    /// Filename for today's export artifact.
    pub fn export_filename(&self) -> String {
        crate::archive::export_filename(chrono::Local::now().date_naive())
    }

    /// The tracks an album shows in the gallery: the first
    /// `gallery.collapsed_tracks` when collapsed, all of them when
    /// expanded, in original order throughout.
    pub fn visible_tracks<'a>(&self, album: &'a Album, expanded: bool) -> &'a [Track] {
        if expanded {
            &album.tracks
        } else {
            let shown = album.tracks.len().min(self.settings.gallery.collapsed_tracks);
            &album.tracks[..shown]
        }
    }

    /// Periodic host tick; drives the per-attempt playback watchdog.
    pub fn tick(&mut self) {
        self.session.check_attempt_timeout();
    }
}
