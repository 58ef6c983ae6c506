//! Scrollyteller drives scroll-linked visualizations.
//!
//! A page is divided into a [`Storyboard`] of steps, each a `(from, to]`
//! window of scroll offset bound to one [`Drawable`]. As the reader scrolls,
//! the [`Director`] classifies every step as before, during or after the
//! current offset, computes an eased progress fraction for the active step and
//! hands the pass to a [`RedrawStrategy`] that issues draw and hide calls.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: [`AnimationLoop::on_frame`] reads the offset from the
//!    [`HostEnvironment`] on every display refresh.
//! 2. **Throttle**: redraws run at most once per `redraw_interval_ms`.
//! 3. **Direct**: [`Director::draw_all`] recomputes phases and progress from
//!    scratch, so equal offsets give equal call sequences.
//! 4. **Draw**: [`Superposed`] shows one entity at a time, [`Juxtaposed`]
//!    keeps all of them visible and animates only the active one.
//! 5. **Report**: drawn steps are recorded on a [`TelemetrySink`], flushed on
//!    a fixed interval, best effort.
//!
//! Everything runs on one thread; the host owns the frame callbacks and
//! timers and calls into the loop.
#![forbid(unsafe_code)]

mod animation;
mod direct;
mod draw;
mod foundation;
mod host;
mod scheduler;
mod storyboard;
mod telemetry;

pub use animation::ease::{Ease, Easing};
pub use direct::director::Director;
pub use direct::juxtaposed::Juxtaposed;
pub use direct::stage::{RedrawStrategy, Stage, absolute_position, progress};
pub use direct::superposed::Superposed;
pub use draw::drawable::{Capability, Drawable, Interpolatable, SharedDrawable, shared};
pub use draw::trace::{DrawCall, DrawLog, DrawOp, TraceDrawable};
pub use foundation::config::{DirectorConfig, LoopConfig, StrategyKind};
pub use foundation::core::{HostTime, page_height};
pub use foundation::error::{ScrollyError, ScrollyResult};
pub use host::env::HostEnvironment;
pub use host::simulated::SimulatedHost;
pub use scheduler::frame_loop::{AnimationLoop, LoopState, LoopStats};
pub use scheduler::throttle::{Interval, Throttle};
pub use storyboard::builder::Storyboard;
pub use storyboard::file::{StepSpec, StoryFile};
pub use storyboard::step::{Phase, Step, StepDef};
pub use telemetry::batch::{
    BatchingTelemetry, DeliveryStats, EventBody, JsonLinesTransport, NullTransport, ReaderSession,
    TelemetryEvent, Transport,
};
pub use telemetry::sink::{NullTelemetry, TelemetrySink};
