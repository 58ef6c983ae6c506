use std::{cell::RefCell, rc::Rc};

/// What a drawable can do beyond a full draw and hide.
///
/// Returned by [`Drawable::capability`] so strategies never inspect concrete
/// entity types.
pub enum Capability<'a> {
    /// Only [`Drawable::draw`] and [`Drawable::hide`] are supported.
    Plain,
    /// The entity separates a static scene from animated characters.
    Interpolatable(&'a mut dyn Interpolatable),
}

impl std::fmt::Debug for Capability<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => f.write_str("Plain"),
            Self::Interpolatable(d) => f.debug_tuple("Interpolatable").field(&d.name()).finish(),
        }
    }
}

/// A visual entity owned by the rendering collaborator.
pub trait Drawable {
    /// Stable name used in dumps and telemetry.
    fn name(&self) -> &str;
    /// Render the entity in full.
    fn draw(&mut self);
    /// Remove the entity from view.
    fn hide(&mut self);
    /// Defaults to [`Capability::Plain`].
    fn capability(&mut self) -> Capability<'_> {
        Capability::Plain
    }
}

/// Extended capability for entities that animate between two states.
///
/// Implementers must keep the static scene invariant under [`at_position`]:
/// the juxtaposed strategy draws the scene once and only redraws characters
/// while a step is active.
///
/// [`at_position`]: Interpolatable::at_position
pub trait Interpolatable: Drawable {
    /// Render the static background (axes, frame, labels).
    fn draw_scene(&mut self);
    /// Render the dynamic foreground.
    fn draw_characters(&mut self);
    /// Remove the dynamic foreground.
    fn hide_characters(&mut self);
    /// A view of this entity configured for `fraction` of its transition.
    fn at_position(&self, fraction: f64) -> Box<dyn Interpolatable>;
}

/// Handle through which steps reference a collaborator-owned drawable.
pub type SharedDrawable = Rc<RefCell<dyn Drawable>>;

/// Wrap a drawable into a [`SharedDrawable`] handle.
pub fn shared<D: Drawable + 'static>(drawable: D) -> SharedDrawable {
    Rc::new(RefCell::new(drawable))
}
