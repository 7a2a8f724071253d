//! Hull value types and the builder configuration.
//!
//! - `HullCfg`: tolerance and (optional) parallel split threshold.
//! - `Hull`: strictly convex vertex cycle, CCW, lexicographic minimum first.
//! - `Tangent`, `Bridges`: index pairs produced by one merge.
//! - `Edge`: one boundary segment as reported to callers.

use crate::geom2::{lex_cmp, orient, Point2};

use super::error::HullError;
use super::report::hull_edges;

/// Hull builder configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Orientation tolerance: a neighbour is adopted during tangent search
    /// only when its turn exceeds `eps_orient`, and merged vertices whose
    /// turn is at most `eps_orient` are dropped.
    pub eps_orient: f64,
    /// With the `parallel` feature, sub-problems of at least this many points
    /// solve their halves concurrently. Ignored when an observer is attached.
    pub parallel_cutoff: Option<usize>,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_orient: 0.0,
            parallel_cutoff: None,
        }
    }
}

impl HullCfg {
    pub fn validate(&self) -> Result<(), HullError> {
        if !self.eps_orient.is_finite() {
            return Err(HullError::config("eps_orient must be finite"));
        }
        if self.eps_orient < 0.0 {
            return Err(HullError::config("eps_orient must be >= 0"));
        }
        if self.parallel_cutoff == Some(0) {
            return Err(HullError::config("parallel_cutoff must be > 0"));
        }
        Ok(())
    }
}

/// A tangent pair: `left` indexes the left hull, `right` the right hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: usize,
    pub right: usize,
}

/// Upper and lower tangent of one merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridges {
    pub upper: Tangent,
    pub lower: Tangent,
}

/// Directed boundary segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Point2,
    pub to: Point2,
}

impl Edge {
    #[inline]
    pub fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.to - self.from).norm()
    }

    /// Zero-length self-edge (reported for single-point hulls).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// Convex hull of a finite point set.
///
/// Invariants:
/// - Vertices are distinct and listed counter-clockwise (y-up frame).
/// - With 3 or more vertices every turn is strictly left (no collinear vertex).
/// - The lexicographically smallest vertex comes first.
/// - 1 vertex: a point; 2 vertices: a segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Point2>,
}

impl Hull {
    /// Wrap a CCW cycle, rotating it so that the lexicographic minimum leads.
    pub(crate) fn from_ccw(mut vertices: Vec<Point2>) -> Self {
        let start = vertices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| lex_cmp(a, b))
            .map(|(k, _)| k)
            .unwrap_or(0);
        vertices.rotate_left(start);
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges including the closing edge; see [`hull_edges`].
    pub fn edges(&self) -> Vec<Edge> {
        hull_edges(&self.vertices)
    }

    /// Enclosed area (shoelace); zero for points and segments.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let p0 = self.vertices[0];
        let twice: f64 = (1..n - 1)
            .map(|k| orient(p0, self.vertices[k], self.vertices[k + 1]))
            .sum();
        0.5 * twice
    }

    /// Boundary length. A segment counts both directions.
    pub fn perimeter(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.edges().iter().map(Edge::length).sum()
    }

    /// Closed containment with distance tolerance `eps`.
    pub fn contains(&self, p: Point2, eps: f64) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => (p - self.vertices[0]).norm() <= eps,
            2 => on_segment(self.vertices[0], self.vertices[1], p, eps),
            n => (0..n).all(|k| {
                let a = self.vertices[k];
                let b = self.vertices[(k + 1) % n];
                orient(a, b, p) >= -eps * (b - a).norm()
            }),
        }
    }

    /// Every consecutive triple turns strictly counter-clockwise.
    pub fn is_strictly_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|k| {
            orient(
                self.vertices[k],
                self.vertices[(k + 1) % n],
                self.vertices[(k + 2) % n],
            ) > 0.0
        })
    }

    /// Same cycle up to the choice of start vertex.
    pub fn same_cycle(&self, other: &Hull) -> bool {
        same_cycle(&self.vertices, &other.vertices)
    }
}

pub(crate) fn same_cycle(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|k| a[k] == b[(k + shift) % n]))
}

fn on_segment(a: Point2, b: Point2, p: Point2, eps: f64) -> bool {
    let ab = b - a;
    let len = ab.norm();
    if len == 0.0 {
        return (p - a).norm() <= eps;
    }
    let along = (p - a).dot(&ab);
    orient(a, b, p).abs() <= eps * len
        && along >= -eps * len
        && along <= ab.norm_squared() + eps * len
}
