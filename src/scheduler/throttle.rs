use crate::foundation::core::HostTime;

/// Lets an action through only when strictly more than `interval_ms` has
/// passed since the last time it was let through.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last: HostTime,
}

impl Throttle {
    /// The window starts closed at `start`.
    pub fn new(interval_ms: f64, start: HostTime) -> Self {
        Self {
            interval_ms,
            last: start,
        }
    }

    pub fn try_acquire(&mut self, now: HostTime) -> bool {
        if now.millis_since(self.last) > self.interval_ms {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn last(&self) -> HostTime {
        self.last
    }
}

/// Fixed-period cooperative timer.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period_ms: f64,
    next: HostTime,
}

impl Interval {
    pub fn new(period_ms: f64, start: HostTime) -> Self {
        Self {
            period_ms,
            next: start.advance(period_ms),
        }
    }

    /// Whether the period elapsed; reschedules relative to `now` when it did.
    pub fn poll(&mut self, now: HostTime) -> bool {
        if now.millis_since(self.next) >= 0.0 {
            self.next = now.advance(self.period_ms);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/throttle.rs"]
mod tests;
