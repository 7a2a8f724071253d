//! Point-set CSV I/O (columns `x`, `y`) through polars.

use anyhow::{anyhow, Context, Result};
use dchull::Point2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("{}: row {row} is missing a coordinate", path.display())),
        })
        .collect()
}

pub fn write_points(path: &Path, pts: &[Point2]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
