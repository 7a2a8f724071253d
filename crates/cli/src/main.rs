use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::geom2::gift_wrap;
use dchull::geom2::rand::{draw_points, PointCloud, ReplayToken};
use dchull::{compute_hull_with, HullCfg, Point2};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

mod narrate;
mod points;
mod provenance;

use narrate::Narrator;
use provenance::{provenance_doc, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a CSV point set (columns x,y) and write it as JSON
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Log every tangent merge
        #[arg(long)]
        narrate: bool,
        /// Pause after each narrated merge (animation speed)
        #[arg(long, default_value_t = 0)]
        pause_ms: u64,
        /// Orientation tolerance for tangent search and cleanup
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Write a reproducible random point set as CSV
    Random {
        #[arg(long, value_enum, default_value_t = Cloud::Uniform)]
        cloud: Cloud,
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Compare the hull against gift wrapping; fails on mismatch
    Check {
        #[arg(long)]
        input: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Cloud {
    Uniform,
    Disk,
    Circle,
    Collinear,
    Clustered,
    Lattice,
}

impl Cloud {
    fn point_cloud(self) -> PointCloud {
        match self {
            Cloud::Uniform => PointCloud::UniformSquare { half: 1.0 },
            Cloud::Disk => PointCloud::UniformDisk { radius: 1.0 },
            Cloud::Circle => PointCloud::OnCircle { radius: 1.0 },
            Cloud::Collinear => PointCloud::Collinear {
                run: 1,
                rise: 2,
                reach: 1000,
            },
            Cloud::Clustered => PointCloud::Clustered {
                clusters: 4,
                spread: 0.1,
            },
            Cloud::Lattice => PointCloud::Lattice { side: 32 },
        }
    }
}

/// JSON body written by `cli hull`.
#[derive(Debug, Serialize)]
struct HullReport {
    input_points: usize,
    vertices: Vec<[f64; 2]>,
    edges: Vec<[[f64; 2]; 2]>,
    area: f64,
    perimeter: f64,
    merges: usize,
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            narrate,
            pause_ms,
            eps,
        } => hull(input, out, narrate, pause_ms, eps),
        Action::Random {
            cloud,
            n,
            seed,
            out,
        } => random(cloud, n, seed, out),
        Action::Check { input } => check(input),
        Action::Report => report(),
    }
}

fn hull(input: String, out: String, narrate: bool, pause_ms: u64, eps: f64) -> Result<()> {
    tracing::info!(input, out, narrate, pause_ms, eps, "hull");
    let pts = points::read_points(Path::new(&input))?;
    let cfg = HullCfg {
        eps_orient: eps,
        ..HullCfg::default()
    };
    let mut narrator = Narrator::new(narrate, Duration::from_millis(pause_ms));
    let report = hull_report(&pts, &cfg, &mut narrator)?;

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;
    write_sidecar(
        out_path,
        Payload::new(
            "hull",
            serde_json::json!({
                "input": input,
                "eps": eps,
                "narrate": narrate,
                "pause_ms": pause_ms
            }),
        ),
    )?;
    Ok(())
}

fn hull_report(pts: &[Point2], cfg: &HullCfg, narrator: &mut Narrator) -> Result<HullReport> {
    let t0 = Instant::now();
    let hull = compute_hull_with(pts, cfg, Some(&mut *narrator))?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        vertices = hull.len(),
        merges = narrator.merges,
        elapsed_ms,
        "hull_done"
    );
    Ok(HullReport {
        input_points: pts.len(),
        vertices: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
        edges: hull
            .edges()
            .iter()
            .map(|e| [[e.from.x, e.from.y], [e.to.x, e.to.y]])
            .collect(),
        area: hull.area(),
        perimeter: hull.perimeter(),
        merges: narrator.merges,
        elapsed_ms,
    })
}

fn random(cloud: Cloud, n: usize, seed: u64, out: String) -> Result<()> {
    tracing::info!(?cloud, n, seed, out, "random");
    let pts = draw_points(cloud.point_cloud(), n, ReplayToken::new(seed));
    let out_path = Path::new(&out);
    points::write_points(out_path, &pts)?;
    write_sidecar(
        out_path,
        Payload::new(
            "random",
            serde_json::json!({
                "cloud": format!("{cloud:?}"),
                "n": n,
                "seed": seed
            }),
        ),
    )?;
    Ok(())
}

fn check(input: String) -> Result<()> {
    let pts = points::read_points(Path::new(&input))?;
    let mismatch = check_points(&pts)?;
    if let Some((ours, reference)) = mismatch {
        bail!("hull mismatch: {ours} vertices vs {reference} from gift wrapping");
    }
    tracing::info!(input, points = pts.len(), "check_ok");
    Ok(())
}

/// `Some((ours, reference))` vertex counts when the two hulls differ.
fn check_points(pts: &[Point2]) -> Result<Option<(usize, usize)>> {
    let hull = compute_hull_with(pts, &HullCfg::default(), None)?;
    let reference = gift_wrap(pts);
    if hull.vertices() == reference.as_slice() {
        Ok(None)
    } else {
        Ok(Some((hull.len(), reference.len())))
    }
}

fn report() -> Result<()> {
    let doc = provenance_doc(&Payload::new("report", serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn hull_report_for_square_with_center() {
        let pts: Vec<Point2> = [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)]
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect();
        let mut narrator = Narrator::default();
        let report = hull_report(&pts, &HullCfg::default(), &mut narrator).unwrap();
        assert_eq!(
            report.vertices,
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]
        );
        assert_eq!(report.edges.len(), 4);
        assert_eq!(report.edges[3], [[0.0, 2.0], [0.0, 0.0]]);
        assert!((report.area - 4.0).abs() < 1e-12);
        assert!(report.merges >= 1);
        assert_eq!(report.input_points, 5);
    }

    #[test]
    fn csv_points_feed_the_hull() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        std::fs::write(&path, "x,y\n0,0\n3,0\n1,1\n0,3\n").unwrap();
        let pts = points::read_points(&path).unwrap();
        assert_eq!(pts.len(), 4);
        let mut narrator = Narrator::default();
        let report = hull_report(&pts, &HullCfg::default(), &mut narrator).unwrap();
        assert_eq!(report.vertices, vec![[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]]);
    }

    #[test]
    fn random_lattice_passes_check() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lattice.csv");
        let pts = draw_points(Cloud::Lattice.point_cloud(), 500, ReplayToken::new(3));
        points::write_points(&path, &pts).unwrap();
        let back = points::read_points(&path).unwrap();
        assert_eq!(back.len(), 500);
        assert_eq!(check_points(&back).unwrap(), None);
    }

    #[test]
    fn empty_point_set_is_an_error() {
        let mut narrator = Narrator::default();
        let err = hull_report(&[], &HullCfg::default(), &mut narrator).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
