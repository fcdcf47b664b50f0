//! Square lattice with per-point highlight flags.
//!
//! Purpose
//! - Hold the logical state of a `size × size` unit-spaced lattice: positions
//!   and one boolean flag per point. No pixel geometry lives here; callers map
//!   to the screen with `geom2::GridTransform`.
//! - Host the threshold rasterizer (`raster`) and the bound calculator
//!   (`bounds`), which mutate or read only these flags.
//!
//! Invariants
//! - Points are stored row-major; point `(row, col)` sits at `(col, row)`.
//! - Flags persist until `reset_highlights` or the next rasterization.
//!
//! Code cross-refs: `raster::{rasterize_circle, rasterize_circle_bounded}`,
//! `bounds::compute_bounds`

pub mod bounds;
pub mod raster;

pub use bounds::{compute_bounds, RingBounds};
pub use raster::{rasterize_circle, rasterize_circle_bounded, RasterCfg, MAX_LATTICE_GAP};

use crate::geom2::Point;

/// A lattice position plus its highlight/selection flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticePoint {
    pub position: Point,
    pub highlighted: bool,
}

impl LatticePoint {
    #[inline]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            highlighted: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    size: usize,
    points: Vec<LatticePoint>,
}

impl Lattice {
    /// All points start unhighlighted.
    pub fn new(size: usize) -> Self {
        let mut points = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                points.push(LatticePoint::new(Point::new(col as f64, row as f64)));
            }
        }
        Self { size, points }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
    #[inline]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }
    #[inline]
    pub fn points_mut(&mut self) -> &mut [LatticePoint] {
        &mut self.points
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&LatticePoint> {
        self.index(row, col).map(|i| &self.points[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut LatticePoint> {
        let i = self.index(row, col)?;
        Some(&mut self.points[i])
    }

    /// Flip one flag; out-of-range indices are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some(p) = self.get_mut(row, col) {
            p.highlighted = !p.highlighted;
        }
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|p| p.highlighted)
    }

    pub fn reset_highlights(&mut self) {
        for p in &mut self.points {
            p.highlighted = false;
        }
    }

    /// Positions of highlighted points in row-major order.
    pub fn highlighted_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .filter(|p| p.highlighted)
            .map(|p| p.position)
            .collect()
    }

    pub fn highlighted_count(&self) -> usize {
        self.points.iter().filter(|p| p.highlighted).count()
    }

    /// Inner/outer bounding circles of the highlighted set around `center`.
    pub fn bounds(&self, center: Point) -> Option<RingBounds> {
        compute_bounds(center, &self.highlighted_points())
    }
}
