/// Convenience result type used across the crate.
pub type ScrollyResult<T> = Result<T, ScrollyError>;

/// Top-level error taxonomy used by director, loop and telemetry APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollyError {
    /// A step whose end does not lie strictly after its start.
    #[error("invalid step range: end {to} is not after start {from}")]
    InvalidStepRange {
        /// Step start offset.
        from: f64,
        /// Step end offset.
        to: f64,
    },

    /// Progress was requested for an offset that precedes the step start.
    #[error("offset {offset} precedes step start {from}")]
    OffsetOutOfRange {
        /// Sampled scroll offset.
        offset: f64,
        /// Step start offset.
        from: f64,
    },

    /// Entering the animation loop failed; the visualization stays static.
    #[error("scheduler start failure: {0}")]
    SchedulerStartFailure(String),

    /// A telemetry batch could not be delivered and was dropped.
    #[error("telemetry send failure: {0}")]
    TelemetrySendFailure(String),

    /// Invalid user-provided configuration or storyboard data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollyError {
    /// Build a [`ScrollyError::InvalidStepRange`] value.
    pub fn invalid_step_range(from: f64, to: f64) -> Self {
        Self::InvalidStepRange { from, to }
    }

    /// Build a [`ScrollyError::OffsetOutOfRange`] value.
    pub fn offset_out_of_range(offset: f64, from: f64) -> Self {
        Self::OffsetOutOfRange { offset, from }
    }

    /// Build a [`ScrollyError::SchedulerStartFailure`] value.
    pub fn scheduler_start(msg: impl Into<String>) -> Self {
        Self::SchedulerStartFailure(msg.into())
    }

    /// Build a [`ScrollyError::TelemetrySendFailure`] value.
    pub fn telemetry_send(msg: impl Into<String>) -> Self {
        Self::TelemetrySendFailure(msg.into())
    }

    /// Build a [`ScrollyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether the error belongs to a single step and must not abort a pass.
    pub fn is_step_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidStepRange { .. } | Self::OffsetOutOfRange { .. }
        )
    }
}

impl From<serde_json::Error> for ScrollyError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
