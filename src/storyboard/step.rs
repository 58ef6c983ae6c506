use std::fmt;

use crate::draw::drawable::SharedDrawable;
use crate::foundation::error::{ScrollyError, ScrollyResult};

/// Raw step definition as supplied by the page author.
#[derive(Clone)]
pub struct StepDef {
    pub from: f64,
    pub to: f64,
    pub draw: SharedDrawable,
}

impl StepDef {
    pub fn new(from: f64, to: f64, draw: SharedDrawable) -> Self {
        Self { from, to, draw }
    }
}

/// Where an offset lies relative to a step's `(from, to]` window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// `offset <= from`
    Before,
    /// `from < offset <= to`
    During,
    /// `offset > to`
    After,
}

/// A scroll interval bound to one drawable.
#[derive(Clone)]
pub struct Step {
    pub from: f64,
    pub to: f64,
    pub draw: SharedDrawable,
}

impl Step {
    pub fn phase(&self, offset: f64) -> Phase {
        if offset <= self.from {
            Phase::Before
        } else if offset <= self.to {
            Phase::During
        } else {
            Phase::After
        }
    }

    pub fn name(&self) -> String {
        self.draw.borrow().name().to_string()
    }

    /// Scroll distance covered by the step.
    pub fn span(&self) -> f64 {
        self.to - self.from
    }

    /// Linear position of `offset` inside the step, before easing.
    ///
    /// Non-finite bounds count as an invalid range.
    pub fn raw_progress(&self, offset: f64) -> ScrollyResult<f64> {
        let size = self.span();
        if !self.from.is_finite() || !self.to.is_finite() || size <= 0.0 {
            return Err(ScrollyError::invalid_step_range(self.from, self.to));
        }
        let into = offset - self.from;
        if into < 0.0 {
            return Err(ScrollyError::offset_out_of_range(offset, self.from));
        }
        Ok(into / size)
    }

    /// Whether the `(from, to]` windows of both steps share any offset.
    pub fn overlaps(&self, other: &Step) -> bool {
        self.from < other.to && other.from < self.to
    }
}

impl From<StepDef> for Step {
    fn from(def: StepDef) -> Self {
        Self {
            from: def.from,
            to: def.to,
            draw: def.draw,
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("draw", &self.name())
            .finish()
    }
}

impl fmt::Debug for StepDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDef")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("draw", &self.draw.borrow().name())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/step.rs"]
mod tests;
