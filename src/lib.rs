pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod report;

pub use error::{FiguraError, InvalidArgument, Result};
