use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gridfit::api::{
    fit_circle, fit_ellipse, rasterize_circle_bounded, sample_circle, sample_ellipse, Circle,
    CircleSampleCfg, Ellipse, EllipseSampleCfg, FitError, Lattice, Point, RasterCfg, ReplayToken,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::{write_with_sidecar, Payload};

#[derive(Parser)]
#[command(name = "gridfit")]
#[command(about = "Rasterize circles onto a lattice and fit circles/ellipses to points")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Highlight lattice points near a circle and report the inner/outer bounds
    Rasterize {
        #[arg(long, allow_hyphen_values = true)]
        cx: f64,
        #[arg(long, allow_hyphen_values = true)]
        cy: f64,
        #[arg(long)]
        radius: f64,
        /// Lattice points per side
        #[arg(long, default_value_t = 20)]
        size: usize,
        /// Band half-width; defaults to the lattice cell half-diagonal
        #[arg(long)]
        threshold: Option<f64>,
        /// Draw the lattice to stderr
        #[arg(long)]
        ascii: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fit a circle to points from a csv/parquet/json file
    FitCircle {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fit an ellipse to points from a csv/parquet/json file
    FitEllipse {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit seeded sample points on a circle or ellipse as JSON
    Sample {
        #[arg(value_enum)]
        shape: Shape,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        cx: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        cy: f64,
        /// Radius (circle) or first semi-axis (ellipse)
        #[arg(long, default_value_t = 1.0)]
        a: f64,
        /// Second semi-axis (ellipse only)
        #[arg(long, default_value_t = 0.5)]
        b: f64,
        /// Rotation in radians (ellipse only)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0.0)]
        noise: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Circle,
    Ellipse,
}

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cmd.action {
        Action::Rasterize {
            cx,
            cy,
            radius,
            size,
            threshold,
            ascii,
            out,
        } => {
            let threshold = threshold.unwrap_or(RasterCfg::default().threshold);
            let circle = Circle::from_xyr(cx, cy, radius);
            let (doc, lattice) = rasterize(circle, size, threshold);
            if ascii {
                eprint!("{}", render_ascii(&lattice, circle));
            }
            let params = json!({"cx": cx, "cy": cy, "radius": radius, "size": size, "threshold": threshold});
            emit(&doc, out, Payload::new("rasterize", params))?;
            Ok(ExitCode::SUCCESS)
        }
        Action::FitCircle { input, out } => {
            let points = input::read_points(&input)?;
            let doc = fit_doc(fit_circle(&points).map(|c| circle_json(&c)), points.len());
            finish_fit(doc, out, Payload::new("fit-circle", json!({"input": input})))
        }
        Action::FitEllipse { input, out } => {
            let points = input::read_points(&input)?;
            let doc = fit_doc(fit_ellipse(&points).map(|e| ellipse_json(&e)), points.len());
            finish_fit(doc, out, Payload::new("fit-ellipse", json!({"input": input})))
        }
        Action::Sample {
            shape,
            cx,
            cy,
            a,
            b,
            angle,
            count,
            noise,
            seed,
            out,
        } => {
            let tok = ReplayToken { seed, index: 0 };
            let center = Point::new(cx, cy);
            let points = match shape {
                Shape::Circle => sample_circle(
                    CircleSampleCfg {
                        center,
                        radius: a,
                        count,
                        noise,
                        ..Default::default()
                    },
                    tok,
                ),
                Shape::Ellipse => sample_ellipse(
                    EllipseSampleCfg {
                        center,
                        a,
                        b,
                        angle,
                        count,
                        noise,
                    },
                    tok,
                ),
            };
            tracing::info!(?shape, count = points.len(), seed, "sample");
            let params = json!({
                "shape": format!("{shape:?}").to_lowercase(),
                "cx": cx, "cy": cy, "a": a, "b": b, "angle": angle,
                "count": count, "noise": noise, "seed": seed
            });
            emit(&input::points_to_json(&points), out, Payload::new("sample", params))?;
            Ok(ExitCode::SUCCESS)
        }
        Action::Report => {
            let obj = json!({
                "code_rev": provenance::current_git_rev(),
                "gridfit_version": gridfit::VERSION,
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print `doc` to stdout, and write it with a provenance sidecar when `out` is set.
fn emit(doc: &Value, out: Option<PathBuf>, payload: Payload) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(doc)?);
    if let Some(out) = out {
        write_with_sidecar(&out, doc, payload)?;
    }
    Ok(())
}

fn finish_fit(doc: Value, out: Option<PathBuf>, payload: Payload) -> Result<ExitCode> {
    let ok = doc.get("error").is_none();
    emit(&doc, out, payload)?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn rasterize(circle: Circle, size: usize, threshold: f64) -> (Value, Lattice) {
    let mut lattice = Lattice::new(size);
    rasterize_circle_bounded(&mut lattice, circle, threshold);
    let highlighted = lattice.highlighted_points();
    tracing::info!(
        highlighted = highlighted.len(),
        valid = circle.is_valid(),
        "rasterize"
    );
    let bounds = lattice.bounds(circle.center()).map(|b| {
        json!({
            "inner": circle_json(&b.inner),
            "outer": circle_json(&b.outer),
        })
    });
    let doc = json!({
        "circle": circle_json(&circle),
        "threshold": threshold,
        "highlighted": input::points_to_json(&highlighted),
        "bounds": bounds,
    });
    (doc, lattice)
}

/// One line per row; `#` highlighted, `.` not, `+` the lattice point nearest the center.
fn render_ascii(lattice: &Lattice, circle: Circle) -> String {
    let c = circle.center();
    let (crow, ccol) = (c.y.round(), c.x.round());
    let mut s = String::with_capacity(lattice.size() * (lattice.size() * 2 + 1));
    for row in 0..lattice.size() {
        for col in 0..lattice.size() {
            let mark = if lattice.is_highlighted(row, col) {
                '#'
            } else if row as f64 == crow && col as f64 == ccol {
                '+'
            } else {
                '.'
            };
            s.push(mark);
            s.push(' ');
        }
        s.pop();
        s.push('\n');
    }
    s
}

fn fit_doc(result: Result<Value, FitError>, n: usize) -> Value {
    match result {
        Ok(mut v) => {
            v["points"] = json!(n);
            v
        }
        Err(e) => {
            tracing::warn!(error = %e, n, "fit rejected");
            json!({ "error": e.to_string(), "kind": error_kind(&e), "points": n })
        }
    }
}

fn error_kind(e: &FitError) -> &'static str {
    match e {
        FitError::TooFewPoints { .. } => "too_few_points",
        FitError::Collinear => "collinear",
        FitError::NonFinite => "non_finite",
        FitError::OutOfRange { .. } => "out_of_range",
    }
}

fn circle_json(c: &Circle) -> Value {
    json!({
        "center": [c.center().x, c.center().y],
        "radius": c.radius(),
    })
}

fn ellipse_json(e: &Ellipse) -> Value {
    json!({
        "center": [e.center().x, e.center().y],
        "semi_major": e.semi_major(),
        "semi_minor": e.semi_minor(),
        "angle": e.angle(),
        "angle_deg": e.angle().to_degrees(),
    })
}
