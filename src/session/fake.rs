//! Scriptable `MediaHandle` used by the session and app tests.

use super::media::{MediaHandle, PlayRejected};

#[derive(Debug, Default)]
pub(crate) struct FakeMedia {
    pub sources: Vec<String>,
    pub loads: usize,
    pub play_calls: usize,
    pub pause_calls: usize,
    /// How many upcoming `play()` calls get rejected (autoplay policy).
    pub reject_next_plays: usize,
    pub position: f64,
    pub duration: f64,
    pub seeks: Vec<f64>,
}

impl FakeMedia {
    /// Fresh element: nothing assigned, duration not yet known.
    pub fn new() -> Self {
        Self {
            duration: f64::NAN,
            ..Self::default()
        }
    }

    pub fn current_source(&self) -> Option<&str> {
        self.sources.last().map(String::as_str)
    }
}

impl MediaHandle for FakeMedia {
    fn assign_source(&mut self, url: &str) {
        self.sources.push(url.to_string());
    }

    fn load(&mut self) {
        self.loads += 1;
    }

    fn play(&mut self) -> Result<(), PlayRejected> {
        self.play_calls += 1;
        if self.reject_next_plays > 0 {
            self.reject_next_plays -= 1;
            return Err(PlayRejected);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek(&mut self, position: f64) {
        self.seeks.push(position);
    }
}
