//! Pratt algebraic circle fit with Newton-Raphson root refinement.
//!
//! Model
//! - Center the points on their centroid and form the mean moments
//!   `Mxx, Myy, Mxy, Mxz, Myz, Mzz` with `z = x² + y²`.
//! - The Pratt-constrained algebraic fit reduces to the smallest non-negative
//!   root of `P(x) = A0 + A1 x + A2 x² + 4 x⁴`, found by Newton from `x = 0`.
//! - The center follows in closed form from that root; the radius is the mean
//!   Euclidean distance from the center to the input points, not the
//!   algebraic radius.
//!
//! Code cross-refs: `cfg` (tolerances), `FitError`

use crate::geom2::{centroid, distance, Circle, Point};

use super::cfg::{
    CIRCLE_DET_EPS, MAX_MAGNITUDE, MIN_CIRCLE_POINTS, NEWTON_MAX_ITER, NEWTON_REL_TOL,
    NEWTON_RESIDUAL_SEED,
};
use super::error::{FitError, FitResult};

/// Centered mean moments of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Moments {
    pub mxx: f64,
    pub myy: f64,
    pub mxy: f64,
    pub mxz: f64,
    pub myz: f64,
    pub mzz: f64,
}

impl Moments {
    /// Moments of `points - origin`, averaged over the point count.
    pub fn centered(points: &[Point], origin: Point) -> Self {
        let mut m = Moments::default();
        for p in points {
            let d = p - origin;
            let z = d.norm_squared();
            m.mxx += d.x * d.x;
            m.myy += d.y * d.y;
            m.mxy += d.x * d.y;
            m.mxz += d.x * z;
            m.myz += d.y * z;
            m.mzz += z * z;
        }
        let n = points.len() as f64;
        Moments {
            mxx: m.mxx / n,
            myy: m.myy / n,
            mxy: m.mxy / n,
            mxz: m.mxz / n,
            myz: m.myz / n,
            mzz: m.mzz / n,
        }
    }
    #[inline]
    pub fn mz(&self) -> f64 {
        self.mxx + self.myy
    }
    #[inline]
    pub fn cov_xy(&self) -> f64 {
        self.mxx * self.myy - self.mxy * self.mxy
    }
    #[inline]
    pub fn var_z(&self) -> f64 {
        self.mzz - self.mz() * self.mz()
    }
}

/// `P(x) = a0 + a1 x + a2 x² + 4 x⁴`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PrattPoly {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl PrattPoly {
    pub fn from_moments(m: &Moments) -> Self {
        let mz = m.mz();
        let cov = m.cov_xy();
        let var_z = m.var_z();
        Self {
            a0: m.mxz * (m.mxz * m.myy - m.myz * m.mxy) + m.myz * (m.myz * m.mxx - m.mxz * m.mxy)
                - var_z * cov,
            a1: var_z * mz + 4.0 * cov * mz - m.mxz * m.mxz - m.myz * m.myz,
            a2: 4.0 * cov - 3.0 * mz * mz - m.mzz,
        }
    }
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.a0 + x * (self.a1 + x * (self.a2 + 4.0 * x * x))
    }
    #[inline]
    pub fn derivative(&self, x: f64) -> f64 {
        self.a1 + x * (2.0 * self.a2 + 16.0 * x * x)
    }
}

/// Why the Newton search for the Pratt root stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NewtonStop {
    Converged,
    ExactRoot,
    Diverged,
    UndefinedStep,
    NegativeIterate,
    IterationLimit,
}

impl NewtonStop {
    /// Whether the search produced a usable root rather than a fallback.
    #[inline]
    pub fn found_root(self) -> bool {
        matches!(self, NewtonStop::Converged | NewtonStop::ExactRoot)
    }
}

/// Newton-Raphson from `x = 0` for the Pratt root.
///
/// Falls back to `0.0` when the residual grows, the step is undefined, or the
/// iteration cap is hit without convergence. A negative iterate is clamped
/// to `0.0` and ends the search.
pub(crate) fn pratt_root(poly: &PrattPoly) -> f64 {
    let (x, stop) = pratt_newton(poly);
    if !stop.found_root() {
        tracing::trace!(?stop, "pratt newton fallback x=0");
    }
    x
}

/// Same search as [`pratt_root`], also reporting which rule ended it.
pub(crate) fn pratt_newton(poly: &PrattPoly) -> (f64, NewtonStop) {
    let mut x = 0.0f64;
    let mut y_prev = NEWTON_RESIDUAL_SEED;
    for iter in 0..NEWTON_MAX_ITER {
        let y = poly.eval(x);
        if y.abs() > y_prev.abs() {
            tracing::trace!(iter, y, y_prev, "pratt newton diverging");
            return (0.0, NewtonStop::Diverged);
        }
        if y == 0.0 {
            return (x, NewtonStop::ExactRoot);
        }
        y_prev = y;
        let dy = poly.derivative(x);
        let x_new = x - y / dy;
        if !x_new.is_finite() {
            return (0.0, NewtonStop::UndefinedStep);
        }
        if x_new < 0.0 {
            return (0.0, NewtonStop::NegativeIterate);
        }
        if (x_new - x).abs() <= NEWTON_REL_TOL * x_new.abs() {
            tracing::trace!(iter, x = x_new, "pratt newton converged");
            return (x_new, NewtonStop::Converged);
        }
        x = x_new;
    }
    (0.0, NewtonStop::IterationLimit)
}

/// Best-fit circle through `points` (at least 3).
pub fn fit_circle(points: &[Point]) -> FitResult<Circle> {
    let n = points.len();
    let origin = match centroid(points) {
        Some(c) if n >= MIN_CIRCLE_POINTS => c,
        _ => {
            return Err(FitError::TooFewPoints {
                needed: MIN_CIRCLE_POINTS,
                got: n,
            })
        }
    };
    let m = Moments::centered(points, origin);
    let x = pratt_root(&PrattPoly::from_moments(&m));

    let det = x * x - x * m.mz() + m.cov_xy();
    if !det.is_finite() {
        return Err(FitError::NonFinite);
    }
    if det.abs() < CIRCLE_DET_EPS {
        tracing::debug!(det, n, "fit_circle: collinear");
        return Err(FitError::Collinear);
    }
    let center = origin
        + Point::new(
            (m.mxz * (m.myy - x) - m.myz * m.mxy) / det / 2.0,
            (m.myz * (m.mxx - x) - m.mxz * m.mxy) / det / 2.0,
        );
    let radius = points.iter().map(|&p| distance(center, p)).sum::<f64>() / n as f64;

    if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
        return Err(FitError::NonFinite);
    }
    if radius <= 0.0 || radius > MAX_MAGNITUDE {
        tracing::debug!(radius, "fit_circle: radius out of range");
        return Err(FitError::OutOfRange { value: radius });
    }
    Ok(Circle::new(center, radius))
}
