//! Best-fit circles and ellipses for scattered point sets.
//!
//! Purpose
//! - `fit_circle`: Pratt algebraic fit, Newton-refined root, mean-distance radius.
//! - `fit_ellipse`: covariance/PCA two-sigma envelope.
//!
//! Both are pure, O(n), and recompute from scratch on every call. Degenerate
//! input (too few points, collinear sets, overflow, absurd sizes) returns a
//! `FitError` instead of panicking.
//!
//! A direct least-squares conic solve (generalized eigenproblem under the
//! ellipse constraint) is intentionally absent: the covariance estimate is the
//! defined behavior of `fit_ellipse`.
//!
//! Code cross-refs: `crate::geom2::{Circle, Ellipse}`, `cfg` (tolerances)

mod cfg;
mod circle;
mod ellipse;
mod error;

pub use circle::fit_circle;
pub use ellipse::fit_ellipse;
pub use error::{FitError, FitResult};
