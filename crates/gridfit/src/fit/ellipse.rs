//! Covariance (PCA) ellipse estimate.
//!
//! The ellipse is centered on the centroid, oriented along the principal axes
//! of the 2×2 covariance matrix, and sized to two standard deviations along
//! each axis. This is a moment envelope, not an orthogonal-distance conic fit:
//! for points spread evenly along an ellipse with semi-axes `(a, b)` it returns
//! `(√2·a, √2·b)` with the correct center, orientation and axis ratio.

use crate::geom2::{centroid, Ellipse, Point};

use super::cfg::{ELLIPSE_COLLINEAR_EPS, ELLIPSE_STD_SCALE, MAX_MAGNITUDE, MIN_ELLIPSE_POINTS};
use super::error::{FitError, FitResult};

/// Best-fit ellipse for `points` (at least 5).
pub fn fit_ellipse(points: &[Point]) -> FitResult<Ellipse> {
    let n = points.len();
    let mean = match centroid(points) {
        Some(c) if n >= MIN_ELLIPSE_POINTS => c,
        _ => {
            return Err(FitError::TooFewPoints {
                needed: MIN_ELLIPSE_POINTS,
                got: n,
            })
        }
    };

    let (mut sxx, mut syy, mut sxy) = (0.0f64, 0.0f64, 0.0f64);
    for p in points {
        let d = p - mean;
        sxx += d.x * d.x;
        syy += d.y * d.y;
        sxy += d.x * d.y;
    }
    let det = sxx * syy - sxy * sxy;
    if !det.is_finite() {
        return Err(FitError::NonFinite);
    }
    if det.abs() < ELLIPSE_COLLINEAR_EPS {
        tracing::debug!(det, n, "fit_ellipse: collinear");
        return Err(FitError::Collinear);
    }

    let nf = n as f64;
    let (mxx, myy, mxy) = (sxx / nf, syy / nf, sxy / nf);
    let theta = 0.5 * (2.0 * mxy).atan2(mxx - myy);
    let (sin_t, cos_t) = theta.sin_cos();
    let var1 = mxx * cos_t * cos_t + myy * sin_t * sin_t + 2.0 * mxy * cos_t * sin_t;
    let var2 = mxx * sin_t * sin_t + myy * cos_t * cos_t - 2.0 * mxy * cos_t * sin_t;
    let a = ELLIPSE_STD_SCALE * var1.abs().sqrt();
    let b = ELLIPSE_STD_SCALE * var2.abs().sqrt();

    if a.is_nan() || b.is_nan() || theta.is_nan() {
        return Err(FitError::NonFinite);
    }
    for axis in [a, b] {
        if axis <= 0.0 || axis > MAX_MAGNITUDE {
            tracing::debug!(a, b, "fit_ellipse: axis out of range");
            return Err(FitError::OutOfRange { value: axis });
        }
    }
    Ok(Ellipse::canonical(mean, a, b, theta))
}
