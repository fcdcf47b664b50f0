use super::types::normalize_angle;
use super::*;
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI, TAU};

#[test]
fn distances_axis_aligned_and_diagonal() {
    let a = vector![1.0, 2.0];
    let b = vector![4.0, 6.0];
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    assert!((distance_squared(a, b) - 25.0).abs() < 1e-12);
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn centroid_empty_and_nonempty() {
    assert!(centroid(&[]).is_none());
    let pts = [vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 4.0], vector![0.0, 4.0]];
    let c = centroid(&pts).unwrap();
    assert!((c - vector![1.0, 2.0]).norm() < 1e-12);
}

#[test]
fn circle_validity_and_boundary_distance() {
    assert!(Circle::from_xyr(0.0, 0.0, 1.0).is_valid());
    assert!(!Circle::from_xyr(0.0, 0.0, 0.0).is_valid());
    assert!(!Circle::from_xyr(0.0, 0.0, -2.0).is_valid());
    assert!(!Circle::from_xyr(f64::NAN, 0.0, 1.0).is_valid());
    assert!(!Circle::from_xyr(0.0, 0.0, f64::INFINITY).is_valid());

    let c = Circle::from_xyr(1.0, 1.0, 2.0);
    // inside and outside are both unsigned
    assert!((c.distance_from_boundary(vector![1.0, 1.0]) - 2.0).abs() < 1e-12);
    assert!((c.distance_from_boundary(vector![1.0, 5.0]) - 2.0).abs() < 1e-12);
    assert!(c.is_near_boundary(vector![3.5, 1.0], 0.5));
    assert!(!c.is_near_boundary(vector![3.6, 1.0], 0.5));
}

#[test]
fn ellipse_canonical_swaps_axes_and_normalizes_angle() {
    let e = Ellipse::canonical(vector![0.0, 0.0], 2.0, 4.0, FRAC_PI_6);
    assert_eq!(e.semi_major(), 4.0);
    assert_eq!(e.semi_minor(), 2.0);
    assert!((e.angle() - (FRAC_PI_6 + FRAC_PI_2)).abs() < 1e-12);
    assert!(e.is_valid());

    let neg = Ellipse::canonical(vector![0.0, 0.0], 3.0, 1.0, -FRAC_PI_6);
    assert!((neg.angle() - (TAU - FRAC_PI_6)).abs() < 1e-12);

    let big = Ellipse::canonical(vector![0.0, 0.0], 3.0, 1.0, 5.0 * PI);
    assert!((big.angle() - PI).abs() < 1e-9);
    assert!((0.0..TAU).contains(&normalize_angle(-1e-18)));
}

#[test]
fn ellipse_boundary_points_follow_axes() {
    let e = Ellipse::canonical(vector![1.0, -1.0], 4.0, 2.0, FRAC_PI_2);
    // major axis points along +y
    let p0 = e.point_at(0.0);
    assert!((p0 - vector![1.0, 3.0]).norm() < 1e-12);
    let p1 = e.point_at(FRAC_PI_2);
    assert!((p1 - vector![-1.0, -1.0]).norm() < 1e-12);
    assert!(!Ellipse::canonical(vector![0.0, 0.0], 1.0, 0.0, 0.0).is_valid());
}

#[test]
fn grid_transform_fit_canvas_matches_padding_layout() {
    // 20x20 grid in an 800x800 canvas with 50px padding: spacing 700/19.
    let tf = GridTransform::fit_canvas(20, 800.0, 800.0, 50.0).unwrap();
    assert!((tf.spacing() - 700.0 / 19.0).abs() < 1e-12);
    assert!((tf.origin() - vector![50.0, 50.0]).norm() < 1e-12);
    let last = tf.grid_to_canvas(vector![19.0, 19.0]);
    assert!((last - vector![750.0, 750.0]).norm() < 1e-9);

    // Non-square canvas centers the grid along the longer dimension.
    let wide = GridTransform::fit_canvas(11, 1000.0, 600.0, 50.0).unwrap();
    assert!((wide.spacing() - 50.0).abs() < 1e-12);
    assert!((wide.origin() - vector![250.0, 50.0]).norm() < 1e-12);

    assert!(GridTransform::fit_canvas(1, 800.0, 800.0, 50.0).is_none());
    assert!(GridTransform::fit_canvas(20, 80.0, 800.0, 50.0).is_none());
    assert!(GridTransform::new(0.0, vector![0.0, 0.0]).is_none());
    assert!(GridTransform::new(f64::NAN, vector![0.0, 0.0]).is_none());
}

#[test]
fn grid_transform_round_trips() {
    let tf = GridTransform::new(36.842, vector![53.5, 47.25]).unwrap();
    for p in [vector![0.0, 0.0], vector![3.25, 17.5], vector![-4.0, 123.0]] {
        let back = tf.canvas_to_grid(tf.grid_to_canvas(p));
        assert!((back - p).norm() < 1e-9);
        let inv = tf.inverse().grid_to_canvas(tf.grid_to_canvas(p));
        assert!((inv - p).norm() < 1e-9);
    }
    let c = Circle::from_xyr(5.0, 5.0, 3.0);
    let round = tf.circle_to_grid(&tf.circle_to_canvas(&c));
    assert!((round.center() - c.center()).norm() < 1e-9);
    assert!((round.radius() - c.radius()).abs() < 1e-9);
    assert!((tf.canvas_distance_to_grid(tf.grid_distance_to_canvas(2.5)) - 2.5).abs() < 1e-12);
}

#[test]
fn grid_transform_affine_view_agrees() {
    let tf = GridTransform::new(2.0, vector![10.0, -5.0]).unwrap();
    let aff = tf.as_affine();
    let p = vector![1.5, 4.0];
    assert!((aff.apply(p) - tf.grid_to_canvas(p)).norm() < 1e-12);
    let inv = aff.inverse().unwrap();
    assert!((inv.apply(aff.apply(p)) - p).norm() < 1e-12);
    let back = tf.inverse().as_affine();
    assert!((back.apply(vector![13.0, 3.0]) - inv.apply(vector![13.0, 3.0])).norm() < 1e-12);
}

#[test]
fn nearest_index_rounds_and_bounds_checks() {
    // 20×20 lattice on 800×800 with 50px padding: 700/19 px between points.
    let tf = GridTransform::fit_canvas(20, 800.0, 800.0, 50.0).unwrap();
    assert_eq!(tf.nearest_index(vector![50.0, 50.0], 20), Some((0, 0)));
    assert_eq!(tf.nearest_index(vector![750.0, 750.0], 20), Some((19, 19)));
    // Row follows canvas y, column follows canvas x.
    let p = tf.grid_to_canvas(vector![7.0, 2.0]) + vector![0.4, -0.4] * tf.spacing();
    assert_eq!(tf.nearest_index(p, 20), Some((2, 7)));
    // Just under half a cell outside the first point still snaps to it.
    assert_eq!(tf.nearest_index(vector![50.0 - 0.45 * tf.spacing(), 60.0], 20), Some((0, 0)));
    assert_eq!(tf.nearest_index(vector![10.0, 400.0], 20), None);
    assert_eq!(tf.nearest_index(vector![400.0, 790.0], 20), None);
    assert_eq!(tf.nearest_index(vector![f64::NAN, 400.0], 20), None);
    assert_eq!(tf.nearest_index(vector![400.0, 400.0], 0), None);
}
