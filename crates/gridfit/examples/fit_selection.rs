//! Fit a circle and an ellipse to noisy seeded samples and print both.
//!
//! Run: `cargo run -p gridfit --example fit_selection`

use gridfit::prelude::*;
use gridfit::sample::{sample_ellipse, EllipseSampleCfg, ReplayToken};

fn main() {
    let cfg = EllipseSampleCfg {
        center: Point::new(9.5, 9.5),
        a: 7.0,
        b: 4.0,
        angle: 30f64.to_radians(),
        count: 24,
        noise: 0.3,
    };
    let points = sample_ellipse(cfg, ReplayToken { seed: 2024, index: 0 });
    println!("{} points", points.len());

    match fit_circle(&points) {
        Ok(c) => println!(
            "circle:  center=({:.3}, {:.3}) r={:.3}",
            c.center().x,
            c.center().y,
            c.radius()
        ),
        Err(e) => println!("circle:  {e}"),
    }
    match fit_ellipse(&points) {
        Ok(e) => println!(
            "ellipse: center=({:.3}, {:.3}) a={:.3} b={:.3} angle={:.1}°",
            e.center().x,
            e.center().y,
            e.semi_major(),
            e.semi_minor(),
            e.angle().to_degrees()
        ),
        Err(e) => println!("ellipse: {e}"),
    }

    // Fewer than five points cannot define an ellipse.
    if let Err(e) = fit_ellipse(&points[..4]) {
        println!("ellipse from 4 points: {e}");
    }
}
