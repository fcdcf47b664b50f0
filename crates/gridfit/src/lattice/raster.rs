//! Threshold rasterization of a circle onto the lattice.
//!
//! A lattice point is highlighted iff `| |p - c| - r | <= threshold`.
//!
//! Threshold
//! - On a unit lattice the farthest any continuous point can be from its
//!   nearest lattice point is the cell-center-to-corner distance
//!   `sqrt(0.5² + 0.5²) = 1/√2`. Every point of the circle therefore has a
//!   lattice point within `1/√2`, so this threshold leaves no gaps while
//!   keeping the band as thin as possible.
//!
//! Invalid circles (see `Circle::is_valid`) leave all flags untouched.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::geom2::Circle;

use super::{Lattice, LatticePoint};

/// Max distance from any point in the plane to the nearest unit-lattice point.
pub const MAX_LATTICE_GAP: f64 = FRAC_1_SQRT_2;

/// Rasterizer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterCfg {
    pub threshold: f64,
}

impl Default for RasterCfg {
    fn default() -> Self {
        Self {
            threshold: MAX_LATTICE_GAP,
        }
    }
}

/// Classify every point in `points` against `circle`.
pub fn rasterize_circle(points: &mut [LatticePoint], circle: Circle, threshold: f64) {
    if !circle.is_valid() {
        return;
    }
    let mut hits = 0usize;
    for p in points.iter_mut() {
        p.highlighted = circle.is_near_boundary(p.position, threshold);
        hits += usize::from(p.highlighted);
    }
    tracing::debug!(
        scanned = points.len(),
        hits,
        radius = circle.radius(),
        "rasterize_circle"
    );
}

/// Same classification as `rasterize_circle`, scanning only the box
/// `[c - (r + t), c + (r + t)]` clamped to the lattice. Points outside the box
/// cannot be within `t` of the boundary and are cleared.
pub fn rasterize_circle_bounded(lattice: &mut Lattice, circle: Circle, threshold: f64) {
    if !circle.is_valid() {
        return;
    }
    let size = lattice.size();
    let reach = circle.radius() + threshold;
    let c = circle.center();
    let rows = index_range(c.y - reach, c.y + reach, size);
    let cols = index_range(c.x - reach, c.x + reach, size);

    let mut scanned = 0usize;
    let mut hits = 0usize;
    for (i, p) in lattice.points_mut().iter_mut().enumerate() {
        let (row, col) = (i / size, i % size);
        let inside = match (&rows, &cols) {
            (Some(r), Some(cc)) => r.contains(&row) && cc.contains(&col),
            _ => false,
        };
        if inside {
            scanned += 1;
            p.highlighted = circle.is_near_boundary(p.position, threshold);
            hits += usize::from(p.highlighted);
        } else {
            p.highlighted = false;
        }
    }
    tracing::debug!(scanned, hits, radius = circle.radius(), "rasterize_circle_bounded");
}

/// Lattice indices covering `[lo, hi]`, or `None` if the interval misses the lattice.
fn index_range(lo: f64, hi: f64, size: usize) -> Option<std::ops::RangeInclusive<usize>> {
    if size == 0 {
        return None;
    }
    let max = (size - 1) as f64;
    let lo = lo.floor().max(0.0);
    let hi = hi.ceil().min(max);
    if !(lo <= hi) {
        return None;
    }
    Some(lo as usize..=hi as usize)
}
