use crate::error::{ensure_positive, Result};
use crate::geometry::FrameRect;
use crate::math::Point2;

use super::Shape;

/// An axis-aligned rectangle given by its size and center.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    center: Point2,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `width` or `height` is not positive.
    pub fn new(width: f64, height: f64, center: Point2) -> Result<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        Ok(Self {
            width,
            height,
            center,
        })
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(self.width, self.height, self.center)
    }

    fn move_to(&mut self, p: Point2) {
        self.center = p;
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    fn scale(&mut self, k: f64) {
        self.width *= k;
        self.height *= k;
    }
}
