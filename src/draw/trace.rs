use std::{cell::RefCell, fmt, rc::Rc};

use crate::draw::drawable::{Capability, Drawable, Interpolatable};

/// Operation recorded by a [`TraceDrawable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawOp {
    Draw,
    Hide,
    DrawScene,
    DrawCharacters,
    HideCharacters,
}

/// One recorded call on a drawable or one of its position views.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DrawCall {
    pub entity: String,
    pub op: DrawOp,
    /// Set when the call was made on an `at_position` view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction: Option<f64>,
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            DrawOp::Draw => "draw",
            DrawOp::Hide => "hide",
            DrawOp::DrawScene => "draw_scene",
            DrawOp::DrawCharacters => "draw_characters",
            DrawOp::HideCharacters => "hide_characters",
        };
        match self.fraction {
            Some(fr) => write!(f, "{op} {}@{fr:.4}", self.entity),
            None => write!(f, "{op} {}", self.entity),
        }
    }
}

/// Shared, append-only log of draw calls.
#[derive(Clone, Debug, Default)]
pub struct DrawLog(Rc<RefCell<Vec<DrawCall>>>);

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entity: &str, op: DrawOp, fraction: Option<f64>) {
        self.0.borrow_mut().push(DrawCall {
            entity: entity.to_string(),
            op,
            fraction,
        });
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.0.borrow().clone()
    }

    /// Drain all recorded calls.
    pub fn take(&self) -> Vec<DrawCall> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Whether `entity`'s characters are on screen after the recorded calls.
    pub fn characters_visible(&self, entity: &str) -> bool {
        self.0
            .borrow()
            .iter()
            .rev()
            .filter(|c| c.entity == entity)
            .find_map(|c| match c.op {
                DrawOp::Draw | DrawOp::DrawCharacters => Some(true),
                DrawOp::Hide | DrawOp::HideCharacters => Some(false),
                DrawOp::DrawScene => None,
            })
            .unwrap_or(false)
    }

    /// Whether the last full draw/hide for `entity` left it drawn.
    pub fn is_drawn(&self, entity: &str) -> bool {
        self.0
            .borrow()
            .iter()
            .rev()
            .filter(|c| c.entity == entity)
            .find_map(|c| match c.op {
                DrawOp::Draw => Some(true),
                DrawOp::Hide => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

/// A drawable that records every call into a [`DrawLog`] instead of rendering.
#[derive(Clone, Debug)]
pub struct TraceDrawable {
    name: String,
    interpolatable: bool,
    fraction: Option<f64>,
    log: DrawLog,
}

impl TraceDrawable {
    pub fn plain(name: impl Into<String>, log: &DrawLog) -> Self {
        Self {
            name: name.into(),
            interpolatable: false,
            fraction: None,
            log: log.clone(),
        }
    }

    pub fn interpolatable(name: impl Into<String>, log: &DrawLog) -> Self {
        Self {
            interpolatable: true,
            ..Self::plain(name, log)
        }
    }

    /// The fraction this instance was positioned at, if it is a view.
    pub fn fraction(&self) -> Option<f64> {
        self.fraction
    }
}

impl Drawable for TraceDrawable {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&mut self) {
        self.log.push(&self.name, DrawOp::Draw, self.fraction);
    }

    fn hide(&mut self) {
        self.log.push(&self.name, DrawOp::Hide, self.fraction);
    }

    fn capability(&mut self) -> Capability<'_> {
        if self.interpolatable {
            Capability::Interpolatable(self)
        } else {
            Capability::Plain
        }
    }
}

impl Interpolatable for TraceDrawable {
    fn draw_scene(&mut self) {
        self.log.push(&self.name, DrawOp::DrawScene, self.fraction);
    }

    fn draw_characters(&mut self) {
        self.log.push(&self.name, DrawOp::DrawCharacters, self.fraction);
    }

    fn hide_characters(&mut self) {
        self.log.push(&self.name, DrawOp::HideCharacters, self.fraction);
    }

    fn at_position(&self, fraction: f64) -> Box<dyn Interpolatable> {
        Box::new(Self {
            fraction: Some(fraction),
            ..self.clone()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/trace.rs"]
mod tests;
