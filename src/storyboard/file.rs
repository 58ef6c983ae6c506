use crate::draw::drawable::shared;
use crate::draw::trace::{DrawLog, TraceDrawable};
use crate::foundation::config::DirectorConfig;
use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::storyboard::step::StepDef;
use crate::telemetry::batch::ReaderSession;

/// Serialized form of one step, bound to a named trace entity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepSpec {
    pub from: f64,
    pub to: f64,
    pub name: String,
    #[serde(default)]
    pub interpolatable: bool,
}

/// A complete story as stored on disk: configuration, reader and steps.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryFile {
    pub config: DirectorConfig,
    pub reader: ReaderSession,
    pub steps: Vec<StepSpec>,
}

impl StoryFile {
    pub fn from_json(s: &str) -> ScrollyResult<Self> {
        let story: Self = serde_json::from_str(s)?;
        story.validate()?;
        Ok(story)
    }

    pub fn validate(&self) -> ScrollyResult<()> {
        self.config.validate()?;
        for (i, step) in self.steps.iter().enumerate() {
            if !step.from.is_finite() || !step.to.is_finite() {
                return Err(ScrollyError::validation(format!(
                    "step {i} ('{}') has a non-finite bound",
                    step.name
                )));
            }
            if step.name.is_empty() {
                return Err(ScrollyError::validation(format!("step {i} has no name")));
            }
        }
        Ok(())
    }

    /// Step definitions backed by [`TraceDrawable`]s writing into `log`.
    pub fn trace_defs(&self, log: &DrawLog) -> Vec<StepDef> {
        self.steps
            .iter()
            .map(|s| {
                let drawable = if s.interpolatable {
                    TraceDrawable::interpolatable(s.name.clone(), log)
                } else {
                    TraceDrawable::plain(s.name.clone(), log)
                };
                StepDef::new(s.from, s.to, shared(drawable))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/file.rs"]
mod tests;
