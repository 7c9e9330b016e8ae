use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use crate::archive::Track;
use crate::config::PlaybackSettings;
use crate::endpoints;
use crate::resolver::{self, LOCAL_TRANSIENT_SCHEME};

use super::media::{MediaEvent, MediaHandle};

/// Where the session is in the current track's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No track loaded.
    Idle,
    /// Source assigned, not yet confirmed playable.
    Loading,
    /// Playable but stalled waiting for data.
    Buffering,
    Playing,
    Paused,
    /// Terminal: every recovery path inside the session is exhausted.
    Error(PlaybackError),
}

/// Terminal playback failures, each with its own remediation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// A local-transient reference outlived its session. The file has to be
    /// re-imported before it can play again.
    #[error("local audio reference expired; re-import the file to play it")]
    SourceExpired,
    /// The host blocked every endpoint. When the identifier is known,
    /// `repair_url` points at the original hosting page so the user can
    /// refresh access authorization by hand.
    #[error("stream request was blocked by the host")]
    Blocked { repair_url: Option<String> },
}

struct CurrentTrack {
    album_id: String,
    track_id: String,
    reference: String,
}

/// One retry cycle: the endpoint list for the current track's identifier.
/// Scoped to a single load lifecycle; a new `load_track` always rebuilds it.
struct RetryCycle {
    endpoints: Vec<String>,
    attempt: usize,
    share_page: String,
}

/// The playback state machine for the one currently loaded track.
pub struct PlaybackSession<M: MediaHandle> {
    media: M,
    state: SessionState,
    /// Whether the user wants playback running. A rejected `play()` leaves
    /// this set; plain events never flip it except natural end-of-track.
    want_play: bool,
    current: Option<CurrentTrack>,
    cycle: Option<RetryCycle>,
    /// When the in-flight endpoint attempt started, for the watchdog.
    attempt_started: Option<Instant>,
    settings: PlaybackSettings,
}

impl<M: MediaHandle> PlaybackSession<M> {
    pub fn new(media: M, settings: PlaybackSettings) -> Self {
        Self {
            media,
            state: SessionState::Idle,
            want_play: false,
            current: None,
            cycle: None,
            attempt_started: None,
            settings,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.want_play
    }

    pub fn current_album_id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.album_id.as_str())
    }

    pub fn current_track_id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.track_id.as_str())
    }

    /// Index of the endpoint currently being attempted, when a retry list
    /// exists.
    pub fn attempt_index(&self) -> Option<usize> {
        self.cycle.as_ref().map(|c| c.attempt)
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Load a new track, superseding whatever was in flight.
    ///
    /// Resets the attempt index, clears any error, resolves the reference
    /// and assigns either the first generated endpoint (retry list armed)
    /// or the raw reference (no fallback). Play is attempted immediately
    /// when `autoplay` is set.
    pub fn load_track(&mut self, album_id: &str, track: &Track, autoplay: bool) {
        self.want_play = autoplay;
        self.cycle = None;

        match resolver::resolve(&track.audio_url) {
            Some(id) => {
                let endpoints = endpoints::generate(&id, self.settings.nonce_len);
                self.media.assign_source(&endpoints[0]);
                self.cycle = Some(RetryCycle {
                    endpoints,
                    attempt: 0,
                    share_page: id.share_page_url(),
                });
            }
            None => {
                self.media.assign_source(&track.audio_url);
            }
        }

        self.current = Some(CurrentTrack {
            album_id: album_id.to_string(),
            track_id: track.id.to_string(),
            reference: track.audio_url.clone(),
        });
        self.state = SessionState::Loading;
        self.attempt_started = Some(Instant::now());
        self.media.load();

        if self.want_play {
            self.try_play();
        }
    }

    /// React to a lifecycle signal from the underlying element.
    pub fn handle_event(&mut self, event: MediaEvent) {
        if self.current.is_none() {
            // Late signals from a superseded load; latest assignment wins.
            return;
        }

        match event {
            MediaEvent::CanPlay => {
                self.attempt_started = None;
                if self.want_play {
                    self.try_play();
                } else if matches!(self.state, SessionState::Loading | SessionState::Buffering) {
                    self.state = SessionState::Paused;
                }
            }
            MediaEvent::Waiting => {
                if matches!(
                    self.state,
                    SessionState::Loading | SessionState::Playing | SessionState::Paused
                ) {
                    self.state = SessionState::Buffering;
                    self.attempt_started = Some(Instant::now());
                }
            }
            MediaEvent::Playing => {
                self.state = SessionState::Playing;
                self.attempt_started = None;
            }
            MediaEvent::Ended => {
                // Same path as a manual pause; no auto-advance here.
                self.want_play = false;
                self.state = SessionState::Paused;
            }
            MediaEvent::Error => self.stream_failure(),
        }
    }

    /// Toggle the desired-playing flag and command the element accordingly.
    pub fn toggle_play(&mut self) {
        if self.current.is_none() {
            return;
        }

        if self.want_play {
            self.want_play = false;
            self.media.pause();
            if matches!(self.state, SessionState::Playing | SessionState::Buffering) {
                self.state = SessionState::Paused;
            }
        } else {
            self.want_play = true;
            self.try_play();
        }
    }

    /// Playback progress as a percentage, clamped to `[0, 100]`.
    /// An unknown (non-finite or zero) duration yields 0, never NaN.
    pub fn progress(&self) -> f64 {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return 0.0;
        }
        (self.media.position() / duration * 100.0).clamp(0.0, 100.0)
    }

    /// Seek by setting progress directly; translates back to an absolute
    /// position through the same duration. No-op while duration is unknown.
    pub fn seek_to_progress(&mut self, percent: f64) {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        let position = percent.clamp(0.0, 100.0) / 100.0 * duration;
        self.media.seek(position);
    }

    /// Explicit stop: back to `Idle`, clearing track, retry state and the
    /// desired-playing flag.
    pub fn stop(&mut self) {
        self.media.pause();
        self.state = SessionState::Idle;
        self.want_play = false;
        self.current = None;
        self.cycle = None;
        self.attempt_started = None;
    }

    /// Watchdog for endpoints that hang without ever firing a signal.
    ///
    /// Called from the host's periodic tick; an attempt stuck in
    /// `Loading`/`Buffering` beyond `attempt_timeout_ms` is treated as a
    /// stream failure. A zero timeout disables the watchdog.
    pub fn check_attempt_timeout(&mut self) {
        if self.settings.attempt_timeout_ms == 0 {
            return;
        }
        if !matches!(self.state, SessionState::Loading | SessionState::Buffering) {
            return;
        }
        let Some(started) = self.attempt_started else {
            return;
        };

        if started.elapsed() >= Duration::from_millis(self.settings.attempt_timeout_ms) {
            debug!("endpoint attempt timed out");
            self.stream_failure();
        }
    }

    fn try_play(&mut self) {
        if self.media.play().is_err() {
            // Blocked by the platform (autoplay policy or similar). Not an
            // error state; the user can retry via the toggle.
            debug!("play attempt was rejected by the platform");
        }
    }

    fn stream_failure(&mut self) {
        if let Some(cycle) = self.cycle.as_mut() {
            if cycle.attempt + 1 < cycle.endpoints.len() {
                cycle.attempt += 1;
                let next = cycle.endpoints[cycle.attempt].clone();
                debug!(attempt = cycle.attempt, "stream failed, trying fallback endpoint");
                self.media.assign_source(&next);
                self.state = SessionState::Loading;
                self.attempt_started = Some(Instant::now());
                self.media.load();
                if self.want_play {
                    self.try_play();
                }
                return;
            }
        }

        let local = self
            .current
            .as_ref()
            .is_some_and(|c| c.reference.starts_with(LOCAL_TRANSIENT_SCHEME));
        let error = if local {
            PlaybackError::SourceExpired
        } else {
            PlaybackError::Blocked {
                repair_url: self.cycle.as_ref().map(|c| c.share_page.clone()),
            }
        };

        warn!(%error, "playback failed for good");
        self.want_play = false;
        self.attempt_started = None;
        self.state = SessionState::Error(error);
    }
}
