//! Open-album navigation state and the shareable location marker.
//!
//! Selecting an album publishes a `#album-<id>` marker so the open album can
//! be deep-linked or bookmarked. The marker observer and the selection
//! setter would feed back into each other, so programmatic selections arm a
//! short suppression window during which externally observed marker changes
//! are ignored.

use std::time::{Duration, Instant};

/// Location-fragment convention for deep links.
pub const MARKER_PREFIX: &str = "#album-";

/// Which album is open, plus the marker/guard bookkeeping.
pub struct Selection {
    current_album: Option<String>,
    marker: Option<String>,
    guard_until: Option<Instant>,
    guard_window: Duration,
}

impl Selection {
    /// `guard_window` is the suppression window after a programmatic
    /// selection; ~100ms in practice, zero disables the guard.
    pub fn new(guard_window: Duration) -> Self {
        Self {
            current_album: None,
            marker: None,
            guard_until: None,
            guard_window,
        }
    }

    pub fn current_album(&self) -> Option<&str> {
        self.current_album.as_deref()
    }

    /// The marker the host should publish, if any.
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// Set (or clear) the open album, updating the marker and arming the
    /// guard window.
    pub fn select(&mut self, album_id: Option<&str>) {
        match album_id {
            Some(id) => {
                self.current_album = Some(id.to_string());
                self.marker = Some(format!("{MARKER_PREFIX}{id}"));
            }
            None => {
                self.current_album = None;
                self.marker = None;
            }
        }
        self.guard_until = Some(Instant::now() + self.guard_window);
    }

    /// React to an externally observed marker change (e.g. the user
    /// navigated back). Returns whether the selection changed.
    ///
    /// Changes inside the guard window are echoes of our own `select` call
    /// and are suppressed. A guard timer firing late is harmless: the
    /// window simply lapses and later changes apply normally.
    pub fn on_marker_changed(&mut self, marker: Option<&str>) -> bool {
        if self.guard_active() {
            return false;
        }

        match marker {
            None => {
                if self.current_album.is_none() {
                    return false;
                }
                self.current_album = None;
                self.marker = None;
                true
            }
            Some(raw) => match parse_marker(raw) {
                Some(id) if self.current_album.as_deref() != Some(id) => {
                    self.current_album = Some(id.to_string());
                    self.marker = Some(raw.to_string());
                    true
                }
                _ => false,
            },
        }
    }

    fn guard_active(&self) -> bool {
        self.guard_until.is_some_and(|until| Instant::now() < until)
    }
}

/// Parse a `#album-<id>` fragment into the album id.
pub fn parse_marker(fragment: &str) -> Option<&str> {
    fragment
        .strip_prefix(MARKER_PREFIX)
        .filter(|id| !id.is_empty())
}
