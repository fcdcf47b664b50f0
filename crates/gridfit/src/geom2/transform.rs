//! Canvas ↔ lattice coordinate transform.
//!
//! A uniform scale plus offset: `canvas = origin + spacing · grid`. The map is
//! bijective for any finite `spacing > 0`; round trips lose nothing beyond
//! floating-point rounding. Rendering layers own a `GridTransform` and convert
//! at the boundary, so everything in `lattice` and `fit` works in grid units.

use nalgebra::Matrix2;

use super::types::{Affine2, Circle, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    spacing: f64,
    origin: Point,
}

impl GridTransform {
    /// `None` unless `spacing` is finite and positive and `origin` is finite.
    pub fn new(spacing: f64, origin: Point) -> Option<Self> {
        if !(spacing.is_finite() && spacing > 0.0) || !origin.iter().all(|v| v.is_finite()) {
            return None;
        }
        Some(Self { spacing, origin })
    }

    /// Fit a `grid_size × grid_size` lattice into a canvas with `padding` on
    /// every side, using the smaller dimension and centering the grid.
    pub fn fit_canvas(grid_size: usize, width: f64, height: f64, padding: f64) -> Option<Self> {
        if grid_size < 2 {
            return None;
        }
        let avail_w = width - 2.0 * padding;
        let avail_h = height - 2.0 * padding;
        let span = avail_w.min(avail_h);
        if !(span > 0.0) {
            return None;
        }
        let cells = (grid_size - 1) as f64;
        let spacing = span / cells;
        let origin = Point::new(
            padding + (avail_w - spacing * cells) / 2.0,
            padding + (avail_h - spacing * cells) / 2.0,
        );
        Self::new(spacing, origin)
    }

    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }
    #[inline]
    pub fn canvas_to_grid(&self, canvas: Point) -> Point {
        (canvas - self.origin) / self.spacing
    }
    #[inline]
    pub fn grid_to_canvas(&self, grid: Point) -> Point {
        self.origin + grid * self.spacing
    }
    #[inline]
    pub fn canvas_distance_to_grid(&self, d: f64) -> f64 {
        d / self.spacing
    }
    #[inline]
    pub fn grid_distance_to_canvas(&self, d: f64) -> f64 {
        d * self.spacing
    }
    /// `(row, col)` of the lattice point nearest `canvas` on a `size × size`
    /// lattice, or `None` when that point is off the lattice.
    pub fn nearest_index(&self, canvas: Point, size: usize) -> Option<(usize, usize)> {
        let g = self.canvas_to_grid(canvas);
        let (row, col) = (g.y.round(), g.x.round());
        let on_lattice = |v: f64| v >= 0.0 && v < size as f64;
        (on_lattice(row) && on_lattice(col)).then(|| (row as usize, col as usize))
    }
    pub fn circle_to_grid(&self, c: &Circle) -> Circle {
        Circle::new(
            self.canvas_to_grid(c.center()),
            self.canvas_distance_to_grid(c.radius()),
        )
    }
    pub fn circle_to_canvas(&self, c: &Circle) -> Circle {
        Circle::new(
            self.grid_to_canvas(c.center()),
            self.grid_distance_to_canvas(c.radius()),
        )
    }

    /// The canvas → grid direction as a transform of its own.
    pub fn inverse(&self) -> Self {
        Self {
            spacing: 1.0 / self.spacing,
            origin: -self.origin / self.spacing,
        }
    }

    /// Grid → canvas as a general affine map.
    pub fn as_affine(&self) -> Affine2 {
        Affine2 {
            m: Matrix2::identity() * self.spacing,
            t: self.origin,
        }
    }
}
