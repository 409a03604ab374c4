pub mod query;
pub mod transform;

use crate::error::{InvalidArgument, Result};
use crate::geometry::Shape;

/// Fails with [`InvalidArgument::EmptyCollection`] if there are no shapes.
fn ensure_not_empty(shapes: &[Box<dyn Shape>]) -> Result<()> {
    if shapes.is_empty() {
        return Err(InvalidArgument::EmptyCollection.into());
    }
    Ok(())
}
