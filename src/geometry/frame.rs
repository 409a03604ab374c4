use crate::math::Point2;

/// An axis-aligned rectangle given by its size and the position of its center.
///
/// `pos` is always the center, never a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub width: f64,
    pub height: f64,
    pub pos: Point2,
}

impl FrameRect {
    /// Creates a frame rectangle centered at `pos`.
    #[must_use]
    pub fn new(width: f64, height: f64, pos: Point2) -> Self {
        Self { width, height, pos }
    }

    /// Creates the frame rectangle spanning from `min` to `max`.
    #[must_use]
    pub fn from_extents(min: Point2, max: Point2) -> Self {
        Self {
            width: max.x - min.x,
            height: max.y - min.y,
            pos: Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
        }
    }

    /// Returns the smallest frame rectangle containing every point,
    /// or `None` if there are no points.
    #[must_use]
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_extents(min, max))
    }

    /// Returns the lower-left corner.
    #[must_use]
    pub fn min_corner(&self) -> Point2 {
        Point2::new(self.pos.x - self.width / 2.0, self.pos.y - self.height / 2.0)
    }

    /// Returns the upper-right corner.
    #[must_use]
    pub fn max_corner(&self) -> Point2 {
        Point2::new(self.pos.x + self.width / 2.0, self.pos.y + self.height / 2.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn corners_round_trip() {
        let r = FrameRect::new(4.0, 2.0, Point2::new(1.0, -1.0));
        let back = FrameRect::from_extents(r.min_corner(), r.max_corner());
        assert!((back.width - 4.0).abs() < TOLERANCE);
        assert!((back.height - 2.0).abs() < TOLERANCE);
        assert!((back.pos - r.pos).norm() < TOLERANCE);
    }

    #[test]
    fn enclosing_uses_midpoint() {
        let r = FrameRect::enclosing([
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 6.0),
            Point2::new(0.0, 3.0),
        ])
        .unwrap();
        assert!((r.width - 4.0).abs() < TOLERANCE);
        assert!((r.height - 6.0).abs() < TOLERANCE);
        assert!((r.pos - Point2::new(2.0, 3.0)).norm() < TOLERANCE);
    }

    #[test]
    fn enclosing_single_point_is_empty_rect() {
        let r = FrameRect::enclosing([Point2::new(3.0, 5.0)]).unwrap();
        assert!(r.width.abs() < TOLERANCE);
        assert!(r.height.abs() < TOLERANCE);
        assert!((r.pos - Point2::new(3.0, 5.0)).norm() < TOLERANCE);
    }

    #[test]
    fn enclosing_nothing() {
        assert!(FrameRect::enclosing(std::iter::empty()).is_none());
    }
}
