//! Boundary to the external narrative-assist collaborator.
//!
//! The collaborator suggests album narratives and cleans up raw track
//! titles. It may fail or be unavailable at any time; every application
//! helper here treats failure as "keep the existing value" and is never
//! fatal.

use thiserror::Error;
use tracing::{debug, warn};

use crate::archive::Album;

/// The collaborator was unavailable or refused the request.
#[derive(Debug, Error)]
#[error("narrative assist unavailable: {0}")]
pub struct AssistError(pub String);

/// Prompt-in/text-out remote collaborator.
pub trait NarrativeAssist {
    /// Suggest a narrative for an album from its title and description.
    fn album_story(&self, title: &str, description: &str) -> Result<String, AssistError>;

    /// Clean up raw track titles, best effort. The returned sequence must
    /// have the same length and order as `raw_titles`.
    fn clean_titles(
        &self,
        raw_titles: &[String],
        album_title: &str,
        album_description: &str,
    ) -> Result<Vec<String>, AssistError>;
}

/// Fill in `album.story` from the collaborator. Returns whether the story
/// changed; failures and empty suggestions keep the existing value.
pub fn apply_story(album: &mut Album, assist: &impl NarrativeAssist) -> bool {
    match assist.album_story(&album.title, &album.description) {
        Ok(story) if !story.trim().is_empty() => {
            album.story = story;
            true
        }
        Ok(_) => false,
        Err(e) => {
            debug!(%e, "keeping existing story");
            false
        }
    }
}

/// Rewrite track titles from the collaborator's cleaned versions.
///
/// Returns how many titles changed. A failure, an empty suggestion or a
/// response of the wrong shape keeps every existing title. `original_title`
/// is never touched.
pub fn apply_clean_titles(album: &mut Album, assist: &impl NarrativeAssist) -> usize {
    let raw: Vec<String> = album.tracks.iter().map(|t| t.title.clone()).collect();
    if raw.is_empty() {
        return 0;
    }

    let cleaned = match assist.clean_titles(&raw, &album.title, &album.description) {
        Ok(cleaned) => cleaned,
        Err(e) => {
            debug!(%e, "keeping existing titles");
            return 0;
        }
    };
    if cleaned.len() != raw.len() {
        warn!(
            expected = raw.len(),
            got = cleaned.len(),
            "cleaned titles have the wrong shape, keeping existing titles"
        );
        return 0;
    }

    let mut changed = 0;
    for (track, title) in album.tracks.iter_mut().zip(cleaned) {
        if !title.trim().is_empty() && title != track.title {
            track.title = title;
            changed += 1;
        }
    }
    changed
}
