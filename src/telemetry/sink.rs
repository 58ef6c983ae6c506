use std::{cell::RefCell, rc::Rc};

use crate::foundation::error::ScrollyResult;

/// Receiver of reading telemetry.
///
/// Recording is infallible; only [`send`](TelemetrySink::send) touches the
/// outside world and its failures are never fatal to the caller.
pub trait TelemetrySink {
    /// An entity was drawn at `fraction` of its step while the reader was at
    /// `absolute_position` of the story.
    fn animation(&mut self, name: &str, fraction: f64, absolute_position: f64);
    fn error(&mut self, message: &str);
    /// Heartbeat marking the session as still open.
    fn alive(&mut self);
    /// Flush batched events, best effort, at most once.
    fn send(&mut self) -> ScrollyResult<()>;
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn animation(&mut self, _name: &str, _fraction: f64, _absolute_position: f64) {}

    fn error(&mut self, _message: &str) {}

    fn alive(&mut self) {}

    fn send(&mut self) -> ScrollyResult<()> {
        Ok(())
    }
}

// Lets the embedding page keep a handle on a sink the director also writes to.
impl<S: TelemetrySink + ?Sized> TelemetrySink for Rc<RefCell<S>> {
    fn animation(&mut self, name: &str, fraction: f64, absolute_position: f64) {
        self.borrow_mut().animation(name, fraction, absolute_position);
    }

    fn error(&mut self, message: &str) {
        self.borrow_mut().error(message);
    }

    fn alive(&mut self) {
        self.borrow_mut().alive();
    }

    fn send(&mut self) -> ScrollyResult<()> {
        self.borrow_mut().send()
    }
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for Box<S> {
    fn animation(&mut self, name: &str, fraction: f64, absolute_position: f64) {
        (**self).animation(name, fraction, absolute_position);
    }

    fn error(&mut self, message: &str) {
        (**self).error(message);
    }

    fn alive(&mut self) {
        (**self).alive();
    }

    fn send(&mut self) -> ScrollyResult<()> {
        (**self).send()
    }
}
