use crate::animation::ease::Easing;
use crate::foundation::config::StrategyKind;
use crate::foundation::error::ScrollyResult;
use crate::storyboard::builder::Storyboard;
use crate::storyboard::step::{Phase, Step};
use crate::telemetry::sink::TelemetrySink;

/// Eased progress of `offset` within `step`.
///
/// Fails with `InvalidStepRange` when `step.to <= step.from`, and with
/// `OffsetOutOfRange` when `offset` precedes `step.from`.
pub fn progress(step: &Step, offset: f64, easing: &dyn Easing) -> ScrollyResult<f64> {
    step.raw_progress(offset).map(|p| easing.ease(p))
}

/// Offset normalized by story length, `0` for an empty story.
pub fn absolute_position(offset: f64, story_length: f64) -> f64 {
    if story_length > 0.0 {
        offset / story_length
    } else {
        0.0
    }
}

/// Everything a strategy may touch during one redraw pass.
///
/// Built fresh for every pass; nothing survives between passes.
pub struct Stage<'a> {
    offset: f64,
    absolute_position: f64,
    storyboard: &'a Storyboard,
    easing: &'a dyn Easing,
    telemetry: &'a mut dyn TelemetrySink,
}

impl<'a> Stage<'a> {
    pub fn new(
        offset: f64,
        storyboard: &'a Storyboard,
        easing: &'a dyn Easing,
        telemetry: &'a mut dyn TelemetrySink,
    ) -> Self {
        Self {
            offset,
            absolute_position: absolute_position(offset, storyboard.story_length()),
            storyboard,
            easing,
            telemetry,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn absolute_position(&self) -> f64 {
        self.absolute_position
    }

    pub fn steps(&self) -> &'a [Step] {
        self.storyboard.steps()
    }

    pub fn phase(&self, step: &Step) -> Phase {
        step.phase(self.offset)
    }

    /// Eased fraction for `step`, or `None` if the step cannot contribute to
    /// this pass. The failure is logged and reported; other steps carry on.
    pub fn fraction(&mut self, step: &Step) -> Option<f64> {
        match progress(step, self.offset, self.easing) {
            Ok(f) => Some(f),
            Err(err) => {
                let name = step.name();
                if err.is_step_local() {
                    tracing::warn!(step = %name, offset = self.offset, error = %err, "step skipped");
                } else {
                    tracing::error!(step = %name, offset = self.offset, error = %err, "step failed");
                }
                self.telemetry.error(&format!("{name}: {err}"));
                None
            }
        }
    }

    pub fn record_animation(&mut self, name: &str, fraction: f64) {
        self.telemetry
            .animation(name, fraction, self.absolute_position);
    }
}

/// Turns one pass over the storyboard into draw and hide calls.
pub trait RedrawStrategy {
    fn kind(&self) -> StrategyKind;
    fn draw_all(&self, stage: &mut Stage<'_>);
}

#[cfg(test)]
#[path = "../../tests/unit/direct/stage.rs"]
mod tests;
