//! Inner/outer bounding circles of a highlighted point set.

use crate::geom2::{distance, Circle, Point};

/// Concentric circles enclosing a rasterized band.
///
/// Invariant: `inner.radius() <= outer.radius()`; both share one center.
/// `inner` may have radius 0 (a highlighted point on the center) and is then
/// not `is_valid()`, but it is still a correct bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBounds {
    pub inner: Circle,
    pub outer: Circle,
}

/// `None` iff `highlighted` is empty.
pub fn compute_bounds(center: Point, highlighted: &[Point]) -> Option<RingBounds> {
    let mut dists = highlighted.iter().map(|&p| distance(center, p));
    let first = dists.next()?;
    let (min_d, max_d) = dists.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(RingBounds {
        inner: Circle::new(center, min_d),
        outer: Circle::new(center, max_d),
    })
}
