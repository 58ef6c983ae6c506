use std::fmt;

use crate::animation::ease::{Ease, Easing};
use crate::direct::juxtaposed::Juxtaposed;
use crate::direct::stage::{self, RedrawStrategy, Stage};
use crate::direct::superposed::Superposed;
use crate::foundation::config::{DirectorConfig, StrategyKind};
use crate::foundation::core::page_height;
use crate::foundation::error::ScrollyResult;
use crate::storyboard::builder::Storyboard;
use crate::storyboard::step::{Phase, Step, StepDef};
use crate::telemetry::sink::TelemetrySink;

/// Maps scroll offsets onto the storyboard and hands each pass to a strategy.
///
/// The director keeps no animation state between passes: every call to
/// [`Director::draw_all`] recomputes classification and progress, so repeating
/// a pass at the same offset repeats the same draw and hide calls.
pub struct Director {
    name: String,
    storyboard: Storyboard,
    strategy: Box<dyn RedrawStrategy>,
    easing: Box<dyn Easing>,
    telemetry: Box<dyn TelemetrySink>,
    trailing_viewport_fraction: f64,
    passes: u64,
}

impl Director {
    pub fn new(
        name: impl Into<String>,
        storyboard: Storyboard,
        strategy: impl RedrawStrategy + 'static,
        telemetry: impl TelemetrySink + 'static,
    ) -> Self {
        let name = name.into();
        if !storyboard.is_sorted() {
            tracing::warn!(director = %name, "storyboard steps are not sorted by start offset");
        }
        if strategy.kind() == StrategyKind::Superposed {
            for (i, j) in storyboard.overlaps() {
                let steps = storyboard.steps();
                tracing::warn!(
                    director = %name,
                    first = %steps[i].name(),
                    second = %steps[j].name(),
                    "overlapping steps; both draw while active, later one on top"
                );
            }
        }
        Self {
            name,
            storyboard,
            strategy: Box::new(strategy),
            easing: Box::new(Ease::default()),
            telemetry: Box::new(telemetry),
            trailing_viewport_fraction: DirectorConfig::default().trailing_viewport_fraction,
            passes: 0,
        }
    }

    pub fn superposed(
        name: impl Into<String>,
        defs: impl IntoIterator<Item = StepDef>,
        telemetry: impl TelemetrySink + 'static,
    ) -> Self {
        Self::new(name, Storyboard::build(defs), Superposed, telemetry)
    }

    pub fn juxtaposed(
        name: impl Into<String>,
        defs: impl IntoIterator<Item = StepDef>,
        telemetry: impl TelemetrySink + 'static,
    ) -> Self {
        Self::new(name, Storyboard::build(defs), Juxtaposed, telemetry)
    }

    /// Build a director with the strategy, curve and page sizing from `cfg`.
    pub fn from_config(
        cfg: &DirectorConfig,
        defs: impl IntoIterator<Item = StepDef>,
        telemetry: impl TelemetrySink + 'static,
    ) -> ScrollyResult<Self> {
        cfg.validate()?;
        let director = match cfg.strategy {
            StrategyKind::Superposed => Self::superposed(cfg.name.clone(), defs, telemetry),
            StrategyKind::Juxtaposed => Self::juxtaposed(cfg.name.clone(), defs, telemetry),
        };
        Ok(director
            .with_easing(cfg.easing)
            .with_trailing_viewport_fraction(cfg.trailing_viewport_fraction))
    }

    /// Replace the progress curve; nothing else changes.
    pub fn with_easing(mut self, easing: impl Easing + 'static) -> Self {
        self.easing = Box::new(easing);
        self
    }

    pub fn with_trailing_viewport_fraction(mut self, fraction: f64) -> Self {
        self.trailing_viewport_fraction = fraction;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storyboard(&self) -> &Storyboard {
        &self.storyboard
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn story_length(&self) -> f64 {
        self.storyboard.story_length()
    }

    /// Minimum page height needed to scroll through the whole story.
    pub fn page_height(&self, viewport_height: f64) -> f64 {
        page_height(
            self.story_length(),
            viewport_height,
            self.trailing_viewport_fraction,
        )
    }

    pub fn absolute_position(&self, offset: f64) -> f64 {
        stage::absolute_position(offset, self.story_length())
    }

    /// Phase of every step at `offset`, in storyboard order.
    pub fn classify(&self, offset: f64) -> Vec<Phase> {
        self.storyboard.steps().iter().map(|s| s.phase(offset)).collect()
    }

    /// Eased progress of `offset` within `step`.
    pub fn progress(&self, step: &Step, offset: f64) -> ScrollyResult<f64> {
        stage::progress(step, offset, self.easing.as_ref())
    }

    /// Number of redraw passes performed so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn telemetry_mut(&mut self) -> &mut dyn TelemetrySink {
        self.telemetry.as_mut()
    }

    /// Run one redraw pass at `offset`.
    #[tracing::instrument(level = "debug", skip(self), fields(director = %self.name))]
    pub fn draw_all(&mut self, offset: f64) {
        self.passes += 1;
        let mut stage = Stage::new(
            offset,
            &self.storyboard,
            self.easing.as_ref(),
            self.telemetry.as_mut(),
        );
        self.strategy.draw_all(&mut stage);
    }
}

impl fmt::Display for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storyboard, f)
    }
}

impl fmt::Debug for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("name", &self.name)
            .field("strategy", &self.strategy.kind())
            .field("storyboard", &self.storyboard)
            .field("passes", &self.passes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/direct/director.rs"]
mod tests;
