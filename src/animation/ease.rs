/// Named easing curves mapping linear progress in `[0, 1]` onto `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// Symmetric polynomial ease-in-out with a configurable exponent.
    InOutPoly { exponent: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Self::InOutCubic
    }
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutPoly { exponent } => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2.powf(exponent) / 2.0
                } else {
                    (2.0 - (2.0 - t2).powf(exponent)) / 2.0
                }
            }
        }
    }

    /// Variants with a parameter are only usable when it keeps the curve
    /// anchored at both endpoints.
    pub fn is_well_formed(self) -> bool {
        match self {
            Self::InOutPoly { exponent } => exponent.is_finite() && exponent > 0.0,
            _ => true,
        }
    }
}

/// Pluggable progress curve used by the director.
///
/// Implementations must map `0` to `0` and `1` to `1` and should be monotonic
/// non-decreasing in between.
pub trait Easing {
    fn ease(&self, x: f64) -> f64;
}

impl Easing for Ease {
    fn ease(&self, x: f64) -> f64 {
        self.apply(x)
    }
}

impl<F> Easing for F
where
    F: Fn(f64) -> f64,
{
    fn ease(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
