use tracing::debug;

use crate::error::Result;
use crate::geometry::Shape;
use crate::operations::ensure_not_empty;

/// Computes the summed area of a collection of shapes.
pub struct TotalArea<'a> {
    shapes: &'a [Box<dyn Shape>],
}

impl<'a> TotalArea<'a> {
    /// Creates a new `TotalArea` query.
    #[must_use]
    pub fn new(shapes: &'a [Box<dyn Shape>]) -> Self {
        Self { shapes }
    }

    /// Executes the query, returning the sum of every shape's area.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the collection is empty.
    pub fn execute(&self) -> Result<f64> {
        ensure_not_empty(self.shapes)?;
        let total: f64 = self.shapes.iter().map(|s| s.area()).sum();
        debug!(count = self.shapes.len(), total, "computed total area");
        Ok(total)
    }
}
