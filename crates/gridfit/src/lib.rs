//! Lattice rasterization and best-fit circles/ellipses in the plane.
//!
//! Layout
//! - `geom2`: points, circles, ellipses, distances, the canvas↔grid transform.
//! - `lattice`: square unit lattice with highlight flags, the threshold
//!   rasterizer and the inner/outer bound calculator.
//! - `fit`: Pratt circle fit and covariance ellipse estimate.
//! - `sample`: seeded point samplers used by tests, benches and the CLI.
//!
//! Everything is synchronous and allocation-light. Fitters are pure; the
//! rasterizer mutates only the lattice it is handed.

pub mod api;
pub mod fit;
pub mod geom2;
pub mod lattice;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Aff2, Circle, Ellipse, GridTransform, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fit::{fit_circle, fit_ellipse, FitError, FitResult};
    pub use crate::geom2::{distance, distance_squared, Circle, Ellipse, GridTransform, Point};
    pub use crate::lattice::{
        compute_bounds, rasterize_circle, rasterize_circle_bounded, Lattice, LatticePoint,
        RasterCfg, RingBounds, MAX_LATTICE_GAP,
    };
    pub use nalgebra::Vector2 as Vec2;
}
