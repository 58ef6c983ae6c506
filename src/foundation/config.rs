use crate::animation::ease::Ease;
use crate::foundation::error::{ScrollyError, ScrollyResult};

/// Which visibility strategy a director uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// One entity visible at a time.
    #[default]
    Superposed,
    /// Every entity stays visible; only the active one animates.
    Juxtaposed,
}

/// Timing knobs of the animation loop, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoopConfig {
    /// A redraw only happens if strictly more than this has elapsed since the
    /// previous triggered redraw.
    pub redraw_interval_ms: f64,
    pub flush_interval_ms: f64,
    /// Heartbeats are off unless set.
    pub heartbeat_interval_ms: Option<f64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            redraw_interval_ms: 10.0,
            flush_interval_ms: 5_000.0,
            heartbeat_interval_ms: None,
        }
    }
}

/// Author-facing configuration of a director, loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectorConfig {
    pub name: String,
    pub strategy: StrategyKind,
    pub easing: Ease,
    /// Extra scroll room after the last step, in viewport heights.
    pub trailing_viewport_fraction: f64,
    pub timing: LoopConfig,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            name: "story".to_string(),
            strategy: StrategyKind::default(),
            easing: Ease::default(),
            trailing_viewport_fraction: 2.0 / 3.0,
            timing: LoopConfig::default(),
        }
    }
}

impl DirectorConfig {
    pub fn from_json(s: &str) -> ScrollyResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ScrollyResult<()> {
        if !self.easing.is_well_formed() {
            return Err(ScrollyError::validation(format!(
                "easing {:?} is not anchored at 0 and 1",
                self.easing
            )));
        }
        non_negative("trailing_viewport_fraction", self.trailing_viewport_fraction)?;
        non_negative("redraw_interval_ms", self.timing.redraw_interval_ms)?;
        non_negative("flush_interval_ms", self.timing.flush_interval_ms)?;
        if let Some(hb) = self.timing.heartbeat_interval_ms {
            non_negative("heartbeat_interval_ms", hb)?;
            if hb == 0.0 {
                return Err(ScrollyError::validation("heartbeat_interval_ms must be > 0"));
            }
        }
        if self.timing.flush_interval_ms == 0.0 {
            return Err(ScrollyError::validation("flush_interval_ms must be > 0"));
        }
        Ok(())
    }
}

fn non_negative(field: &str, v: f64) -> ScrollyResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ScrollyError::validation(format!(
            "{field} must be a finite, non-negative number (got {v})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
