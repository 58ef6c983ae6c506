use crate::direct::director::Director;
use crate::foundation::config::LoopConfig;
use crate::foundation::error::ScrollyError;
use crate::host::env::HostEnvironment;
use crate::scheduler::throttle::{Interval, Throttle};

/// Lifecycle of an [`AnimationLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, `start` not called yet.
    Idle,
    /// Following the scroll position on every frame.
    Running,
    /// The loop could not be entered; the page keeps its last render.
    Frozen,
}

/// Counters describing what the loop did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub redraws: u64,
    pub throttled: u64,
    pub flushes: u64,
    pub failed_flushes: u64,
}

/// Cooperative, frame-driven loop keeping a [`Director`] in sync with the
/// host's scroll position.
///
/// The host calls [`on_frame`](Self::on_frame) from its display-refresh
/// callback and [`poll_timers`](Self::poll_timers) from any periodic timer.
/// Nothing here blocks or spawns.
#[derive(Debug)]
pub struct AnimationLoop<H: HostEnvironment> {
    director: Director,
    host: H,
    state: LoopState,
    last_offset: f64,
    redraw: Throttle,
    flush: Interval,
    heartbeat: Option<Interval>,
    stats: LoopStats,
}

impl<H: HostEnvironment> AnimationLoop<H> {
    /// The redraw throttle and the timers start counting now.
    pub fn new(director: Director, host: H, timing: LoopConfig) -> Self {
        let now = host.now();
        Self {
            last_offset: host.scroll_offset(),
            redraw: Throttle::new(timing.redraw_interval_ms, now),
            flush: Interval::new(timing.flush_interval_ms, now),
            heartbeat: timing
                .heartbeat_interval_ms
                .map(|ms| Interval::new(ms, now)),
            director,
            host,
            state: LoopState::Idle,
            stats: LoopStats::default(),
        }
    }

    /// Size the page, render the current offset and enter the loop.
    ///
    /// If the first frame cannot be requested the failure is logged once and
    /// the loop stays [`LoopState::Frozen`]; the initial render remains.
    #[tracing::instrument(skip(self), fields(director = %self.director.name()))]
    pub fn start(&mut self) -> LoopState {
        if self.state != LoopState::Idle {
            return self.state;
        }

        let height = self.director.page_height(self.host.viewport_height());
        self.host.set_min_page_height(height);

        let offset = self.host.scroll_offset();
        self.last_offset = offset;
        self.director.draw_all(offset);

        self.state = match self.host.request_frame() {
            Ok(()) => LoopState::Running,
            Err(err) => {
                let err = match err {
                    ScrollyError::SchedulerStartFailure(_) => err,
                    other => ScrollyError::scheduler_start(other.to_string()),
                };
                tracing::error!(error = %err, "animation loop not started, rendering stays static");
                self.director.telemetry_mut().error(&err.to_string());
                LoopState::Frozen
            }
        };
        self.state
    }

    /// Display-refresh callback.
    pub fn on_frame(&mut self) {
        if self.state != LoopState::Running {
            return;
        }
        self.stats.frames += 1;

        let offset = self.host.scroll_offset();
        if offset != self.last_offset {
            self.last_offset = offset;
            self.scrolling(offset);
        }

        if let Err(err) = self.host.request_frame() {
            tracing::error!(error = %err, "frame request failed, animation loop frozen");
            self.director
                .telemetry_mut()
                .error(&format!("frame request failed: {err}"));
            self.state = LoopState::Frozen;
        }
    }

    /// Throttled redraw entry point. Returns whether a pass ran.
    ///
    /// There is no trailing redraw: `on_frame` has already stored a throttled
    /// offset as the last one seen, so if scrolling stops right after it the
    /// page keeps showing the previous pass until the offset changes again.
    /// Hosts that need the final position drawn can call
    /// [`Director::draw_all`] with [`AnimationLoop::last_offset`] once
    /// scrolling settles.
    pub fn scrolling(&mut self, offset: f64) -> bool {
        if self.redraw.try_acquire(self.host.now()) {
            self.director.draw_all(offset);
            self.stats.redraws += 1;
            true
        } else {
            self.stats.throttled += 1;
            tracing::trace!(offset, "redraw throttled");
            false
        }
    }

    /// Flush telemetry and emit heartbeats when their periods have elapsed.
    ///
    /// Runs in every state, including [`LoopState::Frozen`]. Send failures are
    /// dropped.
    pub fn poll_timers(&mut self) {
        let now = self.host.now();
        if let Some(heartbeat) = self.heartbeat.as_mut()
            && heartbeat.poll(now)
        {
            self.director.telemetry_mut().alive();
        }
        if self.flush.poll(now) {
            match self.director.telemetry_mut().send() {
                Ok(()) => self.stats.flushes += 1,
                Err(err) => {
                    self.stats.failed_flushes += 1;
                    tracing::debug!(error = %err, "telemetry flush failed");
                }
            }
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Offset seen by the most recent frame.
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn director_mut(&mut self) -> &mut Director {
        &mut self.director
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (Director, H) {
        (self.director, self.host)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/frame_loop.rs"]
mod tests;
