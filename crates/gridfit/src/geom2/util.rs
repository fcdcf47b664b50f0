//! Distance helpers and point-set moments.

use super::types::Point;

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Squared Euclidean distance; use for comparisons to skip the square root.
#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

/// Mean position of `points`, or `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}
