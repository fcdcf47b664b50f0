//! Value types for planar shapes and maps.
//!
//! - `Point`: alias for `Vector2<f64>`; no identity beyond its value.
//! - `Circle`: center + radius, valid iff `radius > 0` and finite.
//! - `Ellipse`: canonical form with `a >= b > 0` and angle in `[0, 2π)`.
//! - `Affine2`: general 2D affine map, used to hand `GridTransform` to
//!   renderers that batch-map points.
//!
//! Code cross-refs: `util::{distance, distance_squared}`, `transform::GridTransform`

use nalgebra::{Matrix2, Vector2};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::util::distance;

/// A point in the plane. Callers transform before/after use.
pub type Point = Vector2<f64>;

/// Circle `{ p : |p - center| = radius }`.
///
/// Constructed freely; invalid circles (radius `<= 0` or non-finite values)
/// are representable so that callers can pass raw UI input through the
/// rasterizer, which ignores them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
    #[inline]
    pub fn from_xyr(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(Point::new(cx, cy), radius)
    }
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0 && self.radius.is_finite() && self.center.iter().all(|v| v.is_finite())
    }
    /// Unsigned distance from `p` to the boundary: `| |p - c| - r |`.
    #[inline]
    pub fn distance_from_boundary(&self, p: Point) -> f64 {
        (distance(self.center, p) - self.radius).abs()
    }
    #[inline]
    pub fn is_near_boundary(&self, p: Point, threshold: f64) -> bool {
        self.distance_from_boundary(p) <= threshold
    }
}

/// Rotated ellipse in canonical form.
///
/// Invariants (for values produced by `Ellipse::canonical`):
/// - `semi_major >= semi_minor`.
/// - `angle` is the direction of the major axis, normalized to `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    center: Point,
    semi_major: f64,
    semi_minor: f64,
    angle: f64,
}

impl Ellipse {
    /// Canonicalize raw axes: if `b > a`, swap them and rotate by +π/2.
    pub fn canonical(center: Point, a: f64, b: f64, angle: f64) -> Self {
        let (a, b, angle) = if b > a {
            (b, a, angle + FRAC_PI_2)
        } else {
            (a, b, angle)
        };
        Self {
            center,
            semi_major: a,
            semi_minor: b,
            angle: normalize_angle(angle),
        }
    }
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }
    #[inline]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }
    /// Major-axis direction in radians, in `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn is_valid(&self) -> bool {
        let finite = self.center.iter().all(|v| v.is_finite())
            && self.semi_major.is_finite()
            && self.semi_minor.is_finite()
            && self.angle.is_finite();
        finite && self.semi_minor > 0.0 && self.semi_major >= self.semi_minor
    }
    /// Unit vectors along the major and minor axes.
    pub fn axis_directions(&self) -> (Vector2<f64>, Vector2<f64>) {
        let (s, c) = self.angle.sin_cos();
        (Vector2::new(c, s), Vector2::new(-s, c))
    }
    /// Boundary point at parameter `t` (radians): `c + a cos t · u + b sin t · v`.
    pub fn point_at(&self, t: f64) -> Point {
        let (u, v) = self.axis_directions();
        self.center + u * (self.semi_major * t.cos()) + v * (self.semi_minor * t.sin())
    }
}

/// Map any finite angle into `[0, 2π)`.
#[inline]
pub(crate) fn normalize_angle(theta: f64) -> f64 {
    let r = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
}
