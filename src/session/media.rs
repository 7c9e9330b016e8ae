//! The capability surface the session needs from a playback element.

/// The platform refused to start playback (for example an autoplay policy).
/// Not an error state: the session swallows it and waits for an explicit
/// user-initiated retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRejected;

/// Lifecycle signals the host forwards from the underlying element into
/// [`PlaybackSession::handle_event`](super::PlaybackSession::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Enough data arrived to start playing.
    CanPlay,
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback actually started or resumed.
    Playing,
    /// The track played to its natural end.
    Ended,
    /// The current source failed to stream.
    Error,
}

/// Commands and queries against the shared playback element.
///
/// Positions and durations are in seconds; `duration` may be NaN or
/// infinite while (or if ever) the real duration is unknown.
pub trait MediaHandle {
    fn assign_source(&mut self, url: &str);
    fn load(&mut self);
    fn play(&mut self) -> Result<(), PlayRejected>;
    fn pause(&mut self);
    fn position(&self) -> f64;
    fn duration(&self) -> f64;
    fn seek(&mut self, position: f64);
}
