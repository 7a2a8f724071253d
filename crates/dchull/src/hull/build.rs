//! Recursive hull builder and the top-level entry points.

use crate::geom2::{sort_points, Point2};

use super::error::HullError;
use super::merge::merge_hulls;
use super::observer::{MergeObserver, MergeStep, NoopObserver};
use super::types::{Hull, HullCfg};

/// Convex hull of `points` with the default configuration and no observer.
///
/// Pre: `points` is non-empty with finite coordinates.
/// Post: strictly convex CCW hull, lexicographically smallest vertex first.
pub fn compute_hull(points: &[Point2]) -> Result<Hull, HullError> {
    compute_hull_with(points, &HullCfg::default(), None)
}

/// Convex hull of `points`, notifying `observer` after every tangent merge.
pub fn compute_hull_with(
    points: &[Point2],
    cfg: &HullCfg,
    observer: Option<&mut dyn MergeObserver>,
) -> Result<Hull, HullError> {
    cfg.validate()?;
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let sorted = sort_points(points);
    let hull = hull_of_sorted(&sorted, cfg, observer);
    tracing::debug!(input = points.len(), hull = hull.len(), "compute_hull");
    Ok(hull)
}

/// Recursive hull builder on lexicographically sorted input.
///
/// Repeated points are collapsed before recursing, so both halves of every
/// merge are disjoint.
///
/// Panics if `sorted` is empty; `compute_hull_with` rejects that case first.
pub fn hull_of_sorted(
    sorted: &[Point2],
    cfg: &HullCfg,
    observer: Option<&mut dyn MergeObserver>,
) -> Hull {
    assert!(!sorted.is_empty(), "hull_of_sorted needs at least one point");
    let mut distinct = sorted.to_vec();
    distinct.dedup();
    tracing::debug!(sorted = sorted.len(), distinct = distinct.len(), "hull_of_sorted");
    let eps = cfg.eps_orient;
    let vertices = match (observer, cfg.parallel_cutoff) {
        (Some(obs), _) => build(&distinct, 0, eps, obs),
        #[cfg(feature = "parallel")]
        (None, Some(cutoff)) => build_par(&distinct, 0, eps, cutoff),
        _ => build(&distinct, 0, eps, &mut NoopObserver),
    };
    Hull::from_ccw(vertices)
}

fn build(points: &[Point2], depth: usize, eps: f64, observer: &mut dyn MergeObserver) -> Vec<Point2> {
    if points.len() == 1 {
        return points.to_vec();
    }
    let mid = points.len() / 2;
    let left = build(&points[..mid], depth + 1, eps, observer);
    let right = build(&points[mid..], depth + 1, eps, observer);
    let merged = merge_hulls(&left, &right, eps);
    if let Some(bridges) = merged.bridges {
        tracing::trace!(
            depth,
            left = left.len(),
            right = right.len(),
            merged = merged.vertices.len(),
            ?bridges,
            "merge"
        );
        observer.on_merge(&MergeStep {
            depth,
            left: &left,
            right: &right,
            upper: bridges.upper,
            lower: bridges.lower,
            merged: &merged.vertices,
        });
    }
    merged.vertices
}

#[cfg(feature = "parallel")]
fn build_par(points: &[Point2], depth: usize, eps: f64, cutoff: usize) -> Vec<Point2> {
    if points.len() < cutoff.max(2) {
        return build(points, depth, eps, &mut NoopObserver);
    }
    let mid = points.len() / 2;
    // join returns only after both halves are done; the merge reads finished hulls.
    let (left, right) = rayon::join(
        || build_par(&points[..mid], depth + 1, eps, cutoff),
        || build_par(&points[mid..], depth + 1, eps, cutoff),
    );
    merge_hulls(&left, &right, eps).vertices
}
