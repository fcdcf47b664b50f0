//! Point-set readers for fitting commands.
//!
//! - `.csv` / `.parquet`: columns `x` and `y` (any numeric type), read with polars.
//! - `.json`: either `[[x, y], ...]` or `{"points": [[x, y], ...]}`.

use anyhow::{bail, Context, Result};
use gridfit::Point;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoints {
    Bare(Vec<[f64; 2]>),
    Wrapped { points: Vec<[f64; 2]> },
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let points = match ext.as_str() {
        "json" => read_json(path)?,
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            read_frame(lf)?
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            read_frame(lf)?
        }
        other => bail!("unsupported input extension {other:?} (expected csv, parquet or json)"),
    };
    tracing::info!(count = points.len(), path = %path.display(), "points_loaded");
    Ok(points)
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: JsonPoints = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as a point list", path.display()))?;
    let raw = match parsed {
        JsonPoints::Bare(p) | JsonPoints::Wrapped { points: p } => p,
    };
    Ok(raw.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

fn read_frame(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .context("selecting x/y columns")?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        }
    }
    Ok(out)
}

/// JSON form of a point list, matching what `read_points` accepts.
pub fn points_to_json(points: &[Point]) -> serde_json::Value {
    serde_json::Value::Array(
        points
            .iter()
            .map(|p| serde_json::json!([p.x, p.y]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_bare_and_wrapped_json() {
        let dir = tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        fs::write(&bare, "[[0, 1], [2.5, -3]]").unwrap();
        let pts = read_points(&bare).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 1.0), Point::new(2.5, -3.0)]);

        let wrapped = dir.path().join("wrapped.json");
        fs::write(&wrapped, r#"{"points": [[1, 1], [2, 2], [3, 5]]}"#).unwrap();
        assert_eq!(read_points(&wrapped).unwrap().len(), 3);
    }

    #[test]
    fn reads_csv_with_integer_columns() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("pts.csv");
        fs::write(&csv, "x,y\n1,2\n3,4\n5,6\n").unwrap();
        let pts = read_points(&csv).unwrap();
        assert_eq!(pts[2], Point::new(5.0, 6.0));
    }

    #[test]
    fn json_round_trip_through_writer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rt.json");
        let pts = vec![Point::new(0.25, 4.0), Point::new(-1.0, 7.5)];
        fs::write(&path, serde_json::to_vec(&points_to_json(&pts)).unwrap()).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn rejects_unknown_extension_and_bad_json() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("pts.txt");
        fs::write(&txt, "1 2").unwrap();
        assert!(read_points(&txt).is_err());
        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"pts": 3}"#).unwrap();
        assert!(read_points(&bad).is_err());
    }
}
