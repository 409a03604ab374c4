//! Plain-text reports of shape metrics.

use std::io::Write;

use crate::error::Result;
use crate::geometry::{FrameRect, Shape};
use crate::operations::query::{BoundingRect, TotalArea};

/// Writes the per-shape metrics followed by the collection totals.
///
/// Totals are computed before anything is written, so an empty collection
/// fails without producing partial output.
///
/// # Errors
///
/// Returns `InvalidArgument` if the collection is empty, or `Io` if writing
/// to `out` fails.
pub fn write_report<W: Write>(out: &mut W, shapes: &[Box<dyn Shape>]) -> Result<()> {
    let total = TotalArea::new(shapes).execute()?;
    let frame = BoundingRect::new(shapes).execute()?;

    for (index, shape) in shapes.iter().enumerate() {
        let f = shape.frame_rect();
        writeln!(out, "Figure {index}:")?;
        writeln!(out, "\tArea: {}", shape.area())?;
        writeln!(out, "\tFrame rectangle:")?;
        write_frame(out, &f, "\t\t")?;
    }
    writeln!(out, "SumArea: {total}")?;
    writeln!(out, "Generic frame:")?;
    write_frame(out, &frame, "\t")?;
    Ok(())
}

fn write_frame<W: Write>(out: &mut W, f: &FrameRect, indent: &str) -> std::io::Result<()> {
    writeln!(out, "{indent}Width: {}", f.width)?;
    writeln!(out, "{indent}Height: {}", f.height)?;
    writeln!(out, "{indent}Center: x = {} y = {}", f.pos.x, f.pos.y)
}
