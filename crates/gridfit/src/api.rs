//! Curated surface for rendering layers and tools.
//!
//! These are the entry points a UI calls: rasterize a circle into a lattice,
//! read back its bounds, and fit shapes to a point selection. Coordinates are
//! lattice units; convert with `GridTransform` at the edge.

pub use crate::fit::{fit_circle, fit_ellipse, FitError, FitResult};
pub use crate::geom2::{
    centroid, distance, distance_squared, Aff2, Circle, Ellipse, GridTransform, Point,
};
pub use crate::lattice::{
    compute_bounds, rasterize_circle, rasterize_circle_bounded, Lattice, LatticePoint, RasterCfg,
    RingBounds, MAX_LATTICE_GAP,
};
pub use crate::sample::{
    sample_circle, sample_ellipse, sampled_ellipse, CircleSampleCfg, EllipseSampleCfg,
    ReplayToken,
};

/// Rasterize `circle` into `lattice` with the default threshold and return the
/// inner/outer bounds of the highlighted band around the circle's center.
///
/// Returns `None` when nothing is highlighted, including for an invalid
/// circle on a lattice with no prior highlights.
pub fn rasterize_with_bounds(lattice: &mut Lattice, circle: Circle) -> Option<RingBounds> {
    rasterize_circle_bounded(lattice, circle, RasterCfg::default().threshold);
    lattice.bounds(circle.center())
}

/// Toggle the lattice point nearest a canvas click. Returns the toggled
/// `(row, col)`, or `None` for a click that lands off the lattice.
pub fn toggle_at(
    lattice: &mut Lattice,
    tf: &GridTransform,
    canvas: Point,
) -> Option<(usize, usize)> {
    let (row, col) = tf.nearest_index(canvas, lattice.size())?;
    lattice.toggle(row, col);
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_select_points_for_fitting() {
        let tf = GridTransform::fit_canvas(10, 400.0, 300.0, 20.0).unwrap();
        let mut l = Lattice::new(10);
        let picks = [(1, 4), (4, 1), (7, 4), (4, 7)];
        for &(row, col) in &picks {
            let click =
                tf.grid_to_canvas(Point::new(col as f64, row as f64)) + Point::new(3.0, -2.0);
            assert_eq!(toggle_at(&mut l, &tf, click), Some((row, col)));
        }
        assert_eq!(toggle_at(&mut l, &tf, Point::new(1.0, 1.0)), None);
        assert_eq!(l.highlighted_count(), 4);

        let c = fit_circle(&l.highlighted_points()).unwrap();
        assert!((c.center() - Point::new(4.0, 4.0)).norm() < 1e-9);
        assert!((c.radius() - 3.0).abs() < 1e-9);

        // A second click on the same point clears it.
        let again = tf.grid_to_canvas(Point::new(4.0, 1.0));
        assert_eq!(toggle_at(&mut l, &tf, again), Some((1, 4)));
        assert_eq!(l.highlighted_count(), 3);
    }

    #[test]
    fn rasterize_with_bounds_brackets_radius() {
        let mut l = Lattice::new(20);
        let b = rasterize_with_bounds(&mut l, Circle::from_xyr(9.3, 10.1, 6.2)).unwrap();
        assert!(b.inner.radius() <= 6.2 && 6.2 <= b.outer.radius());
        assert!(l.highlighted_count() > 0);
    }

    #[test]
    fn rasterize_with_bounds_empty_for_invalid_circle() {
        let mut l = Lattice::new(20);
        assert!(rasterize_with_bounds(&mut l, Circle::from_xyr(3.0, 3.0, 0.0)).is_none());
    }
}
