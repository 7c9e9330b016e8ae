//! Archive model types: `Track`, `Album` and the `Archive` payload shape.
//!
//! Field names are serialized in camelCase so the payload matches the
//! interchange format used for export, import and persistence.

use serde::{Deserialize, Serialize};

/// Placeholder shown until a track's real duration is known.
pub const UNKNOWN_DURATION: &str = "--:--";

/// The full archive: an ordered list of albums, most recent first.
pub type Archive = Vec<Album>;

/// One audio track inside an album.
///
/// `id` is immutable once created. `original_title` preserves the name the
/// track was imported with and never changes, even when `title` is edited or
/// rewritten by the narrative assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub mp3_url: String,
    #[serde(default)]
    pub wav_url: String,
    #[serde(default = "unknown_duration")]
    pub duration: String,
    #[serde(default)]
    pub genre: String,
}

fn unknown_duration() -> String {
    UNKNOWN_DURATION.to_string()
}

impl Track {
    /// Create a track from a freshly imported reference.
    ///
    /// The secondary references start out duplicating `audio_url`; they can
    /// be pointed at alternate encodings later.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let audio_url = audio_url.into();
        Self {
            id: id.into(),
            original_title: title.clone(),
            title,
            mp3_url: audio_url.clone(),
            wav_url: audio_url.clone(),
            audio_url,
            duration: UNKNOWN_DURATION.to_string(),
            genre: String::new(),
        }
    }
}

/// One album in the archive. `tracks` order is play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn has_track(&self, track_id: &str) -> bool {
        self.track(track_id).is_some()
    }
}

/// An album being assembled in the authoring flow.
///
/// A zero-track album is a valid archive payload, but drafts may only be
/// submitted once they carry a title, a cover and at least one track; the
/// submit action stays disabled until then.
#[derive(Debug, Clone, Default)]
pub struct AlbumDraft {
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub release_date: String,
    pub tracks: Vec<Track>,
}

impl AlbumDraft {
    /// Which required fields are still missing, in display order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.cover_image.trim().is_empty() {
            missing.push("cover");
        }
        if self.tracks.is_empty() {
            missing.push("tracks");
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn the draft into an album with the given id.
    pub fn into_album(self, id: impl Into<String>) -> Album {
        Album {
            id: id.into(),
            title: self.title,
            description: self.description,
            story: String::new(),
            cover_image: self.cover_image,
            release_date: self.release_date,
            tracks: self.tracks,
        }
    }
}
