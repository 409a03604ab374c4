use crate::error::{ensure_positive, Result};
use crate::geometry::FrameRect;
use crate::math::{PiApproximation, Point2};

use super::Shape;

/// An axis-aligned ellipse.
///
/// Defined by a center and its horizontal and vertical radii.
/// The area is `pi * radius_hor * radius_ver`, where the value of `pi`
/// is selected by [`PiApproximation`] (exact unless set otherwise).
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    radius_hor: f64,
    radius_ver: f64,
    center: Point2,
    pi: PiApproximation,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `radius_hor` - Radius along the X axis (must be positive)
    /// * `radius_ver` - Radius along the Y axis (must be positive)
    /// * `center` - Center of the ellipse
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either radius is not positive.
    pub fn new(radius_hor: f64, radius_ver: f64, center: Point2) -> Result<Self> {
        ensure_positive("horizontal radius", radius_hor)?;
        ensure_positive("vertical radius", radius_ver)?;
        Ok(Self {
            radius_hor,
            radius_ver,
            center,
            pi: PiApproximation::default(),
        })
    }

    /// Selects the value of pi used by [`Shape::area`].
    #[must_use]
    pub fn with_pi(mut self, pi: PiApproximation) -> Self {
        self.pi = pi;
        self
    }

    /// Returns the horizontal radius.
    #[must_use]
    pub fn radius_hor(&self) -> f64 {
        self.radius_hor
    }

    /// Returns the vertical radius.
    #[must_use]
    pub fn radius_ver(&self) -> f64 {
        self.radius_ver
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the pi approximation used for the area.
    #[must_use]
    pub fn pi(&self) -> PiApproximation {
        self.pi
    }
}

impl Shape for Ellipse {
    fn area(&self) -> f64 {
        self.pi.value() * self.radius_hor * self.radius_ver
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(self.radius_hor * 2.0, self.radius_ver * 2.0, self.center)
    }

    fn move_to(&mut self, p: Point2) {
        self.center = p;
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    fn scale(&mut self, k: f64) {
        self.radius_hor *= k;
        self.radius_ver *= k;
    }
}
