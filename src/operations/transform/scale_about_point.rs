use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::Shape;
use crate::math::Point2;
use crate::operations::ensure_not_empty;

/// Scales a collection of shapes about a shared pivot point.
///
/// Each shape's frame center is pushed away from (or pulled toward) the
/// pivot by `(pos - pivot) * (factor - 1)`, then the shape is scaled by
/// `factor` about its own reference point.
pub struct ScaleAboutPoint {
    pivot: Point2,
    factor: f64,
}

impl ScaleAboutPoint {
    /// Creates a new `ScaleAboutPoint` operation.
    #[must_use]
    pub fn new(pivot: Point2, factor: f64) -> Self {
        Self { pivot, factor }
    }

    /// Executes the scaling, modifying every shape in-place, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the collection is empty. No shape is
    /// touched in that case.
    pub fn execute(&self, shapes: &mut [Box<dyn Shape>]) -> Result<()> {
        ensure_not_empty(shapes)?;
        debug!(
            count = shapes.len(),
            pivot_x = self.pivot.x,
            pivot_y = self.pivot.y,
            factor = self.factor,
            "scaling shapes about point"
        );

        for (index, shape) in shapes.iter_mut().enumerate() {
            let d = (shape.frame_rect().pos - self.pivot) * (self.factor - 1.0);
            shape.move_by(d.x, d.y);
            shape.scale(self.factor);
            trace!(index, dx = d.x, dy = d.y, "scaled shape");
        }

        Ok(())
    }
}
