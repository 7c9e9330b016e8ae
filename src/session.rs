//! Playback session: one track's lifecycle against an unreliable host.
//!
//! The session owns the retry cycle across fallback endpoints and reacts to
//! media-element lifecycle signals. The element itself is abstracted behind
//! [`MediaHandle`] so the machine is testable without a real audio backend.

mod machine;
mod media;

pub use machine::{PlaybackError, PlaybackSession, SessionState};
pub use media::{MediaEvent, MediaHandle, PlayRejected};

#[cfg(test)]
pub(crate) mod fake;
