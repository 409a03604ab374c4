use crate::error::{InvalidArgument, Result};
use crate::geometry::FrameRect;
use crate::math::polygon_2d::{polygon_area, polygon_centroid};
use crate::math::Point2;

use super::Shape;

/// A simple polygon given by its vertices in edge order.
///
/// The centroid is computed once from the initial vertices and then
/// carried along by every transform; it is never re-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
    centroid: Point2,
}

impl Polygon {
    /// Minimum number of vertices of a polygon.
    pub const MIN_VERTICES: usize = 3;

    /// Creates a polygon by copying `points`.
    ///
    /// Collinear input is accepted; its centroid then has non-finite
    /// components.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if fewer than three points are given, or
    /// `Allocation` if the vertex buffer cannot be reserved.
    pub fn new(points: &[Point2]) -> Result<Self> {
        if points.len() < Self::MIN_VERTICES {
            return Err(InvalidArgument::TooFewVertices {
                count: points.len(),
            }
            .into());
        }

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(points.len())?;
        vertices.extend_from_slice(points);

        let centroid = polygon_centroid(&vertices);
        Ok(Self { vertices, centroid })
    }

    /// Returns the vertices in edge order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the cached centroid.
    #[must_use]
    pub fn centroid(&self) -> &Point2 {
        &self.centroid
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    fn frame_rect(&self) -> FrameRect {
        // At least three vertices exist by construction.
        FrameRect::enclosing(self.vertices.iter().copied())
            .unwrap_or_else(|| FrameRect::new(0.0, 0.0, self.centroid))
    }

    fn move_to(&mut self, p: Point2) {
        let d = p - self.centroid;
        self.move_by(d.x, d.y);
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            v.x += dx;
            v.y += dy;
        }
        self.centroid.x += dx;
        self.centroid.y += dy;
    }

    fn scale(&mut self, k: f64) {
        let c = self.centroid;
        for v in &mut self.vertices {
            *v = c + (*v - c) * k;
        }
    }
}
