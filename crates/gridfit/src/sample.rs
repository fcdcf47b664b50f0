//! Seeded point samplers on circles and ellipses.
//!
//! Purpose
//! - Reproducible fitting inputs for tests, benches and the CLI `sample`
//!   command.
//!
//! Model
//! - `count` evenly spaced parameters over `arc` (circle) or a full turn
//!   (ellipse); each point is pushed along its radial direction by a uniform
//!   offset in `[-noise, noise]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::geom2::{Ellipse, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CircleSampleCfg {
    pub center: Point,
    pub radius: f64,
    pub count: usize,
    /// Max radial offset; `0` samples exactly on the circle.
    pub noise: f64,
    /// Swept angle in radians starting at +x; `TAU` for a full circle.
    pub arc: f64,
}

impl Default for CircleSampleCfg {
    fn default() -> Self {
        Self {
            center: Point::zeros(),
            radius: 1.0,
            count: 32,
            noise: 0.0,
            arc: TAU,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EllipseSampleCfg {
    pub center: Point,
    pub a: f64,
    pub b: f64,
    /// Rotation of the `a` axis, radians.
    pub angle: f64,
    pub count: usize,
    pub noise: f64,
}

impl Default for EllipseSampleCfg {
    fn default() -> Self {
        Self {
            center: Point::zeros(),
            a: 2.0,
            b: 1.0,
            angle: 0.0,
            count: 32,
            noise: 0.0,
        }
    }
}

#[inline]
fn jitter(rng: &mut StdRng, noise: f64) -> f64 {
    if noise > 0.0 {
        rng.gen_range(-noise..=noise)
    } else {
        0.0
    }
}

pub fn sample_circle(cfg: CircleSampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count;
    (0..n)
        .map(|k| {
            let t = cfg.arc * k as f64 / n as f64;
            let r = cfg.radius + jitter(&mut rng, cfg.noise);
            cfg.center + Point::new(t.cos(), t.sin()) * r
        })
        .collect()
}

pub fn sample_ellipse(cfg: EllipseSampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    // Sample on the raw axes so `a < b` stays as given.
    let (s, c) = cfg.angle.sin_cos();
    let (u, v) = (Point::new(c, s), Point::new(-s, c));
    let n = cfg.count;
    (0..n)
        .map(|k| {
            let t = TAU * k as f64 / n as f64;
            let on = u * (cfg.a * t.cos()) + v * (cfg.b * t.sin());
            let dir = on.try_normalize(1e-12).unwrap_or(u);
            cfg.center + on + dir * jitter(&mut rng, cfg.noise)
        })
        .collect()
}

/// The ellipse `sample_ellipse` draws from, in canonical form.
pub fn sampled_ellipse(cfg: &EllipseSampleCfg) -> Ellipse {
    Ellipse::canonical(cfg.center, cfg.a, cfg.b, cfg.angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::distance;
    use nalgebra::vector;

    #[test]
    fn replay_token_is_deterministic() {
        let cfg = CircleSampleCfg {
            noise: 0.3,
            ..Default::default()
        };
        let tok = ReplayToken { seed: 5, index: 9 };
        assert_eq!(sample_circle(cfg, tok), sample_circle(cfg, tok));
        let other = ReplayToken { seed: 5, index: 10 };
        assert_ne!(sample_circle(cfg, tok), sample_circle(cfg, other));
    }

    #[test]
    fn noiseless_circle_samples_lie_on_circle() {
        let cfg = CircleSampleCfg {
            center: vector![5.0, 5.0],
            radius: 3.0,
            count: 10,
            ..Default::default()
        };
        let pts = sample_circle(cfg, ReplayToken { seed: 0, index: 0 });
        assert_eq!(pts.len(), 10);
        for p in pts {
            assert!((distance(p, cfg.center) - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn noise_stays_within_band() {
        let cfg = EllipseSampleCfg {
            center: vector![1.0, 2.0],
            a: 4.0,
            b: 2.0,
            angle: 0.5,
            count: 64,
            noise: 0.25,
        };
        let e = sampled_ellipse(&cfg);
        let pts = sample_ellipse(cfg, ReplayToken { seed: 1, index: 0 });
        for (k, p) in pts.iter().enumerate() {
            let t = TAU * k as f64 / 64.0;
            assert!(distance(*p, e.point_at(t)) <= 0.25 + 1e-12);
        }
    }
}
