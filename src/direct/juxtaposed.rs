use crate::direct::stage::{RedrawStrategy, Stage};
use crate::draw::drawable::{Capability, Drawable};
use crate::foundation::config::StrategyKind;
use crate::storyboard::step::Phase;

/// Keeps every entity on screen as a filmstrip.
///
/// Past and upcoming steps rest in their settled state; only the active step
/// redraws its characters. Scenes are drawn while a step is still ahead and
/// are never redrawn during interpolation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Juxtaposed;

impl RedrawStrategy for Juxtaposed {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Juxtaposed
    }

    fn draw_all(&self, stage: &mut Stage<'_>) {
        for step in stage.steps() {
            match stage.phase(step) {
                Phase::After => {
                    let mut guard = step.draw.borrow_mut();
                    let drawable: &mut dyn Drawable = &mut *guard;
                    match drawable.capability() {
                        Capability::Interpolatable(i) => i.hide_characters(),
                        Capability::Plain => drawable.draw(),
                    }
                }
                Phase::Before => {
                    let mut guard = step.draw.borrow_mut();
                    if let Capability::Interpolatable(i) = guard.capability() {
                        i.hide_characters();
                        i.draw_scene();
                    }
                }
                Phase::During => {
                    let Some(fraction) = stage.fraction(step) else {
                        continue;
                    };
                    let mut guard = step.draw.borrow_mut();
                    stage.record_animation(guard.name(), fraction);
                    let drawable: &mut dyn Drawable = &mut *guard;
                    match drawable.capability() {
                        Capability::Interpolatable(i) => i.at_position(fraction).draw_characters(),
                        Capability::Plain => drawable.draw(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/direct/juxtaposed.rs"]
mod tests;
