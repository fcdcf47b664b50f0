//! Rasterize a circle dragged on an 800×800 canvas onto a 20×20 lattice.
//!
//! Mirrors what a UI does on mouse-up: convert the drag to lattice units,
//! rasterize with the default threshold, then report the bounding ring and
//! where the highlighted points sit on the canvas. A final click toggles one
//! point by hand.
//!
//! Run: `cargo run -p gridfit --example rasterize_demo`

use gridfit::api::{
    rasterize_circle_bounded, toggle_at, GridTransform, Lattice, Point, RasterCfg,
};
use gridfit::geom2::distance;
use gridfit::Circle;

fn main() {
    let Some(tf) = GridTransform::fit_canvas(20, 800.0, 800.0, 50.0) else {
        eprintln!("canvas too small for the lattice");
        return;
    };
    let drag_start = Point::new(400.0, 380.0);
    let drag_end = Point::new(610.0, 420.0);

    let center = tf.canvas_to_grid(drag_start);
    let radius = distance(center, tf.canvas_to_grid(drag_end));
    let circle = Circle::new(center, radius);

    let mut lattice = Lattice::new(20);
    rasterize_circle_bounded(&mut lattice, circle, RasterCfg::default().threshold);

    for row in 0..lattice.size() {
        let line: String = (0..lattice.size())
            .map(|col| if lattice.is_highlighted(row, col) { "# " } else { ". " })
            .collect();
        println!("{}", line.trim_end());
    }
    println!(
        "circle: center=({:.3}, {:.3}) r={:.3} (canvas r={:.1}px)",
        center.x,
        center.y,
        radius,
        tf.grid_distance_to_canvas(radius)
    );
    match lattice.bounds(center) {
        Some(b) => println!(
            "bounds: inner r={:.3}, outer r={:.3}, {} points",
            b.inner.radius(),
            b.outer.radius(),
            lattice.highlighted_count()
        ),
        None => println!("bounds: none (no highlighted points)"),
    }

    let to_canvas = tf.as_affine();
    let pixels: Vec<String> = lattice
        .highlighted_points()
        .iter()
        .take(4)
        .map(|&p| {
            let c = to_canvas.apply(p);
            format!("({:.0}, {:.0})", c.x, c.y)
        })
        .collect();
    println!("first highlighted pixels: {}", pixels.join(" "));

    let click = Point::new(402.0, 398.0);
    match toggle_at(&mut lattice, &tf, click) {
        Some((row, col)) => println!(
            "click at ({:.0}, {:.0}) toggled ({row}, {col}); {} points selected",
            click.x,
            click.y,
            lattice.highlighted_count()
        ),
        None => println!("click missed the lattice"),
    }
}
