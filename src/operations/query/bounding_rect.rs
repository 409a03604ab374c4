use tracing::debug;

use crate::error::{InvalidArgument, Result};
use crate::geometry::{FrameRect, Shape};
use crate::operations::ensure_not_empty;

/// Computes the frame rectangle enclosing a whole collection of shapes.
pub struct BoundingRect<'a> {
    shapes: &'a [Box<dyn Shape>],
}

impl<'a> BoundingRect<'a> {
    /// Creates a new `BoundingRect` query.
    #[must_use]
    pub fn new(shapes: &'a [Box<dyn Shape>]) -> Self {
        Self { shapes }
    }

    /// Executes the query.
    ///
    /// The result spans the min/max corners of every shape's own frame
    /// rectangle and is positioned at the midpoint of those extents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the collection is empty.
    pub fn execute(&self) -> Result<FrameRect> {
        ensure_not_empty(self.shapes)?;
        let corners = self.shapes.iter().flat_map(|s| {
            let f = s.frame_rect();
            [f.min_corner(), f.max_corner()]
        });
        let rect = FrameRect::enclosing(corners).ok_or(InvalidArgument::EmptyCollection)?;
        debug!(
            count = self.shapes.len(),
            width = rect.width,
            height = rect.height,
            "computed bounding rectangle"
        );
        Ok(rect)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FiguraError;
    use crate::geometry::{Ellipse, Polygon, ShapeList};
    use crate::math::{Point2, TOLERANCE};
    use crate::operations::fixtures::demo_shapes;

    fn assert_frame_eq(a: FrameRect, b: FrameRect) {
        assert!((a.width - b.width).abs() < TOLERANCE, "{a:?} != {b:?}");
        assert!((a.height - b.height).abs() < TOLERANCE, "{a:?} != {b:?}");
        assert!((a.pos - b.pos).norm() < TOLERANCE, "{a:?} != {b:?}");
    }

    #[test]
    fn demo_bounds() {
        // x: ellipse -5 .. rectangle 11, y: rectangle -4 .. polygon 6
        let shapes = demo_shapes();
        let rect = BoundingRect::new(&shapes).execute().unwrap();
        assert_frame_eq(rect, FrameRect::new(16.0, 10.0, Point2::new(3.0, 1.0)));
    }

    #[test]
    fn single_shape_is_its_own_frame() {
        for shape in demo_shapes() {
            let expected = shape.frame_rect();
            let shapes: ShapeList = vec![shape];
            let rect = BoundingRect::new(&shapes).execute().unwrap();
            assert_frame_eq(rect, expected);
        }
    }

    #[test]
    fn nested_shape_does_not_grow_bounds() {
        let shapes: ShapeList = vec![
            Box::new(Ellipse::new(10.0, 10.0, Point2::origin()).unwrap()),
            Box::new(
                Polygon::new(&[
                    Point2::new(-1.0, -1.0),
                    Point2::new(1.0, -1.0),
                    Point2::new(0.0, 1.0),
                ])
                .unwrap(),
            ),
        ];
        let rect = BoundingRect::new(&shapes).execute().unwrap();
        assert_frame_eq(rect, FrameRect::new(20.0, 20.0, Point2::origin()));
    }

    #[test]
    fn empty_collection_fails() {
        let shapes: ShapeList = Vec::new();
        let r = BoundingRect::new(&shapes).execute();
        assert!(matches!(
            r,
            Err(FiguraError::InvalidArgument(InvalidArgument::EmptyCollection))
        ));
    }
}
