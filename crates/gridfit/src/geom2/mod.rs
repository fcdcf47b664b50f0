//! Planar primitives shared by the lattice and the fitters.
//!
//! Purpose
//! - Provide small `Copy` value types (`Point`, `Circle`, `Ellipse`) and pure,
//!   total distance helpers. Nothing here fails or panics.
//! - Keep the display mapping (`GridTransform`) out of the algorithms: callers
//!   convert canvas input to grid units before rasterizing or fitting.
//!
//! Conventions
//! - Lattice space has unit spacing; lattice point `(row, col)` sits at
//!   `Point::new(col, row)`.
//! - Angles are radians, counterclockwise from +x.
//!
//! Code cross-refs: `crate::lattice`, `crate::fit`

mod transform;
mod types;
mod util;

pub use transform::GridTransform;
pub use types::{Affine2 as Aff2, Circle, Ellipse, Point};
pub use util::{centroid, distance, distance_squared};

#[cfg(test)]
mod tests;
