//! Merge of two adjacent sub-hulls: tangents, stitch, cleanup.
//!
//! Inputs are CCW hulls of two lexicographically separated, duplicate-free
//! point sets (every left point < every right point). The output is the
//! strictly convex CCW hull of their union.

use std::cmp::Ordering;

use crate::geom2::{lex_extreme, orient, Point2};

use super::tangent::{lower_tangent, upper_tangent};
use super::types::{Bridges, Tangent};

/// Result of one merge.
#[derive(Clone, Debug, PartialEq)]
pub struct Merged {
    pub vertices: Vec<Point2>,
    /// `None` for the single-point/single-point join, which needs no search.
    pub bridges: Option<Bridges>,
}

/// Merge `left` and `right` into one hull.
pub fn merge_hulls(left: &[Point2], right: &[Point2], eps: f64) -> Merged {
    if left.len() == 1 && right.len() == 1 {
        let vertices = if left[0] == right[0] {
            vec![left[0]]
        } else {
            vec![left[0], right[0]]
        };
        return Merged {
            vertices,
            bridges: None,
        };
    }
    let upper = upper_tangent(left, right, eps);
    let lower = lower_tangent(left, right, eps);
    let vertices = if upper == lower {
        // One line supports both hulls from both sides: everything is collinear.
        collinear_extremes(left, right)
    } else {
        prune_collinear(stitch(left, right, upper, lower), eps)
    };
    Merged {
        vertices,
        bridges: Some(Bridges { upper, lower }),
    }
}

/// Left outer chain `upper.left ..= lower.left`, then right outer chain
/// `lower.right ..= upper.right`, both walked forward.
pub(crate) fn stitch(left: &[Point2], right: &[Point2], upper: Tangent, lower: Tangent) -> Vec<Point2> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut k = upper.left;
    loop {
        out.push(left[k]);
        if k == lower.left {
            break;
        }
        k = (k + 1) % left.len();
    }
    let mut k = lower.right;
    loop {
        out.push(right[k]);
        if k == upper.right {
            break;
        }
        k = (k + 1) % right.len();
    }
    out
}

fn collinear_extremes(left: &[Point2], right: &[Point2]) -> Vec<Point2> {
    let lo = left[lex_extreme(left, Ordering::Less)];
    let hi = right[lex_extreme(right, Ordering::Greater)];
    if lo == hi {
        vec![lo]
    } else {
        vec![lo, hi]
    }
}

/// Drop vertices whose turn is at most `eps` (collinear, repeated, or
/// numerically reflex) from a weakly convex CCW cycle.
pub(crate) fn prune_collinear(cycle: Vec<Point2>, eps: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(cycle.len());
    for p in cycle {
        while out.len() >= 2 && orient(out[out.len() - 2], out[out.len() - 1], p) <= eps {
            out.pop();
        }
        out.push(p);
    }
    // The seam (last, first) was never tested.
    let mut start = 0;
    while out.len() - start >= 3 {
        let n = out.len();
        if orient(out[n - 2], out[n - 1], out[start]) <= eps {
            out.pop();
        } else if orient(out[n - 1], out[start], out[start + 1]) <= eps {
            start += 1;
        } else {
            break;
        }
    }
    out.drain(..start);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn two_points_join_or_collapse() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0];
        let m = merge_hulls(&[a], &[b], 0.0);
        assert_eq!(m.vertices, vec![a, b]);
        assert!(m.bridges.is_none());
        assert_eq!(merge_hulls(&[a], &[a], 0.0).vertices, vec![a]);
    }

    #[test]
    fn merge_drops_point_on_base() {
        // left: (0,0)-(1,0); right: (1,1)-(2,0)
        let left = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        let right = vec![vector![1.0, 1.0], vector![2.0, 0.0]];
        let m = merge_hulls(&left, &right, 0.0);
        let b = m.bridges.expect("tangent merge");
        assert_eq!(b.upper, Tangent { left: 0, right: 0 });
        assert_eq!(b.lower, Tangent { left: 1, right: 1 });
        assert_eq!(
            m.vertices,
            vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 1.0]]
        );
    }

    #[test]
    fn collinear_merge_keeps_extremes() {
        let left = vec![vector![0.0, 0.0], vector![0.0, 1.0]];
        let right = vec![vector![0.0, 2.0], vector![0.0, 3.0]];
        let m = merge_hulls(&left, &right, 0.0);
        assert_eq!(m.vertices, vec![vector![0.0, 0.0], vector![0.0, 3.0]]);
        let b = m.bridges.expect("tangent merge");
        assert_eq!(b.upper, b.lower);
    }

    #[test]
    fn prune_handles_the_seam() {
        // (0,2) sits on the closing edge (0,3) -> (0,0).
        let cycle = vec![
            vector![0.0, 2.0],
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 3.0],
        ];
        assert_eq!(
            prune_collinear(cycle, 0.0),
            vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 3.0]]
        );
    }

    #[test]
    fn stitch_walks_outer_chains() {
        let left = vec![vector![0.0, 0.0], vector![0.0, 1.0]];
        let right = vec![vector![1.0, 0.0], vector![1.0, 1.0]];
        let upper = Tangent { left: 1, right: 1 };
        let lower = Tangent { left: 0, right: 0 };
        assert_eq!(
            stitch(&left, &right, upper, lower),
            vec![
                vector![0.0, 1.0],
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0]
            ]
        );
    }
}
