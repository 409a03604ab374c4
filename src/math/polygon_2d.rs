use super::Point2;

/// Cross term `a.x * b.y - b.x * a.y` of two consecutive vertices.
fn cross_term(a: &Point2, b: &Point2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Iterates over the closing edges `(v[i], v[i + 1])`, wrapping `v[n]` to `v[0]`.
fn cyclic_edges(points: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    points.iter().zip(points.iter().cycle().skip(1))
}

/// Computes twice the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
/// Returns zero for fewer than three points.
#[must_use]
pub fn signed_double_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    cyclic_edges(points).map(|(a, b)| cross_term(a, b)).sum()
}

/// Computes the unsigned area of a polygon, independent of vertex orientation.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    (signed_double_area(points) * 0.5).abs()
}

/// Computes the centroid of a polygon.
///
/// `C = Σ (v[i] + v[i+1]) * t_i / (6 * |A / 2|)` where `t_i` is the signed
/// cross term of edge `i` and `A` is the signed double area. The numerator
/// keeps the sign of each `t_i`; only the denominator uses the magnitude.
///
/// Zero-area input (collinear or coincident points) is not guarded: the
/// result then has NaN or infinite components.
#[must_use]
pub fn polygon_centroid(points: &[Point2]) -> Point2 {
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (a, b) in cyclic_edges(points) {
        let t = cross_term(a, b);
        area += t;
        cx += (a.x + b.x) * t;
        cy += (a.y + b.y) * t;
    }
    let denom = 6.0 * (area * 0.5).abs();
    Point2::new(cx / denom, cy / denom)
}
