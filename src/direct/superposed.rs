use crate::direct::stage::{RedrawStrategy, Stage};
use crate::draw::drawable::Capability;
use crate::foundation::config::StrategyKind;
use crate::storyboard::step::Phase;

/// Shows at most one entity: the one whose step is active.
///
/// Steps are expected not to overlap. If they do, every active step is drawn
/// in storyboard order, so the last one ends up on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct Superposed;

impl RedrawStrategy for Superposed {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Superposed
    }

    fn draw_all(&self, stage: &mut Stage<'_>) {
        let steps = stage.steps();
        for step in steps {
            step.draw.borrow_mut().hide();
        }

        for step in steps {
            if stage.phase(step) != Phase::During {
                continue;
            }
            let Some(fraction) = stage.fraction(step) else {
                continue;
            };

            let mut drawable = step.draw.borrow_mut();
            stage.record_animation(drawable.name(), fraction);
            match drawable.capability() {
                Capability::Interpolatable(i) => i.at_position(fraction).draw(),
                Capability::Plain => drawable.draw(),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/direct/superposed.rs"]
mod tests;
