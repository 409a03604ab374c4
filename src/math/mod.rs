pub mod polygon_2d;

use std::str::FromStr;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// The two-decimal value of π used by legacy ellipse area output.
#[allow(clippy::approx_constant)]
pub const LEGACY_PI: f64 = 3.14;

/// Which value of π an ellipse uses for its area.
///
/// `Legacy` reproduces output produced with a hardcoded `3.14`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PiApproximation {
    #[default]
    Exact,
    Legacy,
}

impl PiApproximation {
    /// Returns the numeric value of π for this approximation.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Exact => std::f64::consts::PI,
            Self::Legacy => LEGACY_PI,
        }
    }
}

impl FromStr for PiApproximation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown pi approximation `{other}`")),
        }
    }
}
