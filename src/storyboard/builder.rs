use std::fmt;

use crate::storyboard::step::{Step, StepDef};

/// Ordered, immutable sequence of steps forming the whole timeline.
#[derive(Clone, Debug, Default)]
pub struct Storyboard {
    steps: Vec<Step>,
}

impl Storyboard {
    /// Copy step definitions verbatim, in the given order.
    ///
    /// Ordering and overlap are not checked here.
    pub fn build<I>(defs: I) -> Self
    where
        I: IntoIterator<Item = StepDef>,
    {
        Self {
            steps: defs.into_iter().map(Step::from).collect(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Scroll length of the story: the start of the last step, never negative.
    pub fn story_length(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.from.max(0.0))
    }

    /// Index pairs `(i, j)` with `i < j` whose intervals intersect.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, a) in self.steps.iter().enumerate() {
            for (j, b) in self.steps.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    pub fn is_sorted(&self) -> bool {
        self.steps.windows(2).all(|w| w[0].from <= w[1].from)
    }
}

impl<'a> IntoIterator for &'a Storyboard {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Storyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}–{}: {}", step.from, step.to, step.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/builder.rs"]
mod tests;
