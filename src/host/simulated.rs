use crate::foundation::core::HostTime;
use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::host::env::HostEnvironment;

/// Deterministic host with a scripted offset and a manual clock.
#[derive(Clone, Debug)]
pub struct SimulatedHost {
    offset: f64,
    viewport: f64,
    now: HostTime,
    min_page_height: Option<f64>,
    frames_requested: u64,
    frame_support: bool,
}

impl SimulatedHost {
    pub fn new(viewport: f64) -> Self {
        Self {
            offset: 0.0,
            viewport,
            now: HostTime::ZERO,
            min_page_height: None,
            frames_requested: 0,
            frame_support: true,
        }
    }

    /// A host that rejects frame requests, like a page without
    /// `requestAnimationFrame`.
    pub fn without_frame_callbacks(mut self) -> Self {
        self.frame_support = false;
        self
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.max(0.0);
    }

    pub fn advance(&mut self, ms: f64) {
        self.now = self.now.advance(ms);
    }

    pub fn set_time(&mut self, now: HostTime) {
        self.now = now;
    }

    pub fn min_page_height(&self) -> Option<f64> {
        self.min_page_height
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }
}

impl HostEnvironment for SimulatedHost {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn set_min_page_height(&mut self, height: f64) {
        self.min_page_height = Some(height);
    }

    fn now(&self) -> HostTime {
        self.now
    }

    fn request_frame(&mut self) -> ScrollyResult<()> {
        if !self.frame_support {
            return Err(ScrollyError::scheduler_start(
                "host does not provide frame callbacks",
            ));
        }
        self.frames_requested += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/simulated.rs"]
mod tests;
