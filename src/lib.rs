//! dacapo: a curator's album archive with a resilient playback engine.
//!
//! The crate models a client-side media catalog: albums of audio tracks are
//! assembled into an [`archive::ArchiveStore`], persisted as a single JSON
//! blob through an injectable [`archive::StorageBackend`], and played through
//! a [`session::PlaybackSession`] that resolves cloud share links into
//! fallback stream endpoints and retries across them when the remote host
//! misbehaves.
//!
//! The [`app::App`] model glues the store, the navigation state and the
//! playback session together and enforces the invariants between them
//! (deleting the open album clears the selection and stops playback, and so
//! on). Presentation and the real media element are left to the embedder;
//! the session only needs a [`session::MediaHandle`] implementation.

pub mod app;
pub mod archive;
pub mod assist;
pub mod config;
pub mod endpoints;
pub mod resolver;
pub mod selection;
pub mod session;

pub use app::App;
pub use archive::{Album, Archive, ArchiveError, ArchiveStore, Track};
pub use session::{MediaEvent, MediaHandle, PlaybackError, PlaybackSession, SessionState};
