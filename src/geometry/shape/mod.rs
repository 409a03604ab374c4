mod ellipse;
mod polygon;
mod rectangle;

pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use crate::geometry::FrameRect;
use crate::math::Point2;

/// An ordered, owning collection of shapes.
pub type ShapeList = Vec<Box<dyn Shape>>;

/// Common behavior of every planar shape.
pub trait Shape: std::fmt::Debug {
    /// Returns the area enclosed by the shape.
    fn area(&self) -> f64;

    /// Returns the axis-aligned rectangle framing the shape.
    fn frame_rect(&self) -> FrameRect;

    /// Moves the shape so that its reference point lands on `p`.
    ///
    /// The reference point is the center for rectangles and ellipses
    /// and the centroid for polygons.
    fn move_to(&mut self, p: Point2);

    /// Translates the shape by `(dx, dy)`.
    fn move_by(&mut self, dx: f64, dy: f64);

    /// Scales the shape uniformly by `k` about its own reference point.
    ///
    /// `k` is not validated here; callers pass positive factors.
    fn scale(&mut self, k: f64);
}
