/// A host clock reading in milliseconds, as delivered by frame callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct HostTime(pub f64);

impl HostTime {
    pub const ZERO: Self = Self(0.0);

    pub fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Signed milliseconds elapsed from `earlier` to `self`.
    pub fn millis_since(self, earlier: HostTime) -> f64 {
        self.0 - earlier.0
    }

    pub fn advance(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

/// Minimum scrollable page height for a story of `story_length` pixels.
///
/// A trailing buffer of `trailing_fraction` viewports lets the reader dwell on
/// the final step.
pub fn page_height(story_length: f64, viewport_height: f64, trailing_fraction: f64) -> f64 {
    if story_length < 0.0 {
        viewport_height
    } else {
        story_length + viewport_height + viewport_height * trailing_fraction
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
