//! Fixed numeric tolerances for the fitters (internal).
//!
//! Policy
//! - These values decide where a fit flips between a result and `FitError`;
//!   they are constants, not knobs. Changing one changes observable behavior.

/// Minimum points for a circle fit.
pub(crate) const MIN_CIRCLE_POINTS: usize = 3;
/// Minimum points for an ellipse fit.
pub(crate) const MIN_ELLIPSE_POINTS: usize = 5;
/// Newton-Raphson iteration cap for the Pratt root.
pub(crate) const NEWTON_MAX_ITER: usize = 20;
/// Relative step size at which Newton-Raphson stops.
pub(crate) const NEWTON_REL_TOL: f64 = 1e-12;
/// Residual seed for the first Newton step (any larger residual diverges).
pub(crate) const NEWTON_RESIDUAL_SEED: f64 = 1e20;
/// `|DET|` below this means the point set is collinear.
pub(crate) const CIRCLE_DET_EPS: f64 = 1e-10;
/// `|Sxx·Syy - Sxy²|` (unnormalized sums) below this means collinear.
pub(crate) const ELLIPSE_COLLINEAR_EPS: f64 = 1e-6;
/// Largest accepted radius / semi-axis.
pub(crate) const MAX_MAGNITUDE: f64 = 1e4;
/// Semi-axis = this many standard deviations along each principal axis.
pub(crate) const ELLIPSE_STD_SCALE: f64 = 2.0;
