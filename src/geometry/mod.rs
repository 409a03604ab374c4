pub mod frame;
pub mod shape;

pub use frame::FrameRect;
pub use shape::{Ellipse, Polygon, Rectangle, Shape, ShapeList};
