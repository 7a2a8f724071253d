//! Random point clouds in 2D (replay tokens, degenerate families included).
//!
//! Purpose
//! - Provide small, deterministic samplers for hull inputs used by tests,
//!   benches and the CLI. Every draw is reproducible from `(seed, index)`.
//!
//! Model
//! - Continuous families (square, disk, circle, clusters) exercise the
//!   generic path; integer families (collinear, lattice) produce exact
//!   duplicates and exactly collinear triples.
//!
//! References
//! - Code cross-refs: `hull::compute_hull`, `util::gift_wrap`

use super::types::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point-cloud family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointCloud {
    /// Uniform in `[-half, half]²`.
    UniformSquare { half: f64 },
    /// Uniform in the disk of the given radius (area-uniform).
    UniformDisk { radius: f64 },
    /// On the circle of the given radius; almost every point is a hull vertex.
    OnCircle { radius: f64 },
    /// Integer multiples `k·(run, rise)` with `|k| <= reach`; exactly collinear.
    Collinear { run: i32, rise: i32, reach: i32 },
    /// Uniform disks of radius `spread` around `clusters` centers in `[-1, 1]²`.
    Clustered { clusters: usize, spread: f64 },
    /// Integer points in `[0, side]²`; duplicates likely once `n` is large.
    Lattice { side: u32 },
}

impl Default for PointCloud {
    fn default() -> Self {
        PointCloud::UniformSquare { half: 1.0 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Draw `n` points from `cloud`.
pub fn draw_points(cloud: PointCloud, n: usize, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    match cloud {
        PointCloud::UniformSquare { half } => {
            let h = half.abs().max(f64::MIN_POSITIVE);
            (0..n)
                .map(|_| Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
                .collect()
        }
        PointCloud::UniformDisk { radius } => (0..n)
            .map(|_| {
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                polar(r, rng.gen::<f64>() * std::f64::consts::TAU)
            })
            .collect(),
        PointCloud::OnCircle { radius } => (0..n)
            .map(|_| polar(radius.abs(), rng.gen::<f64>() * std::f64::consts::TAU))
            .collect(),
        PointCloud::Collinear { run, rise, reach } => {
            let reach = i64::from(reach).abs().max(1);
            (0..n)
                .map(|_| {
                    let k = rng.gen_range(-reach..=reach) as f64;
                    Point2::new(k * run as f64, k * rise as f64)
                })
                .collect()
        }
        PointCloud::Clustered { clusters, spread } => {
            let centers: Vec<Point2> = (0..clusters.max(1))
                .map(|_| Point2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)))
                .collect();
            (0..n)
                .map(|_| {
                    let c = centers[rng.gen_range(0..centers.len())];
                    let r = spread.abs() * rng.gen::<f64>().sqrt();
                    c + polar(r, rng.gen::<f64>() * std::f64::consts::TAU)
                })
                .collect()
        }
        PointCloud::Lattice { side } => (0..n)
            .map(|_| {
                Point2::new(
                    rng.gen_range(0..=side) as f64,
                    rng.gen_range(0..=side) as f64,
                )
            })
            .collect(),
    }
}

#[inline]
fn polar(r: f64, theta: f64) -> Point2 {
    Point2::new(r * theta.cos(), r * theta.sin())
}
