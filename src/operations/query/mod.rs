mod bounding_rect;
mod total_area;

pub use bounding_rect::BoundingRect;
pub use total_area::TotalArea;
