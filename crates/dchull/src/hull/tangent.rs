//! Upper and lower tangent search between two x-separated convex hulls.
//!
//! Both searches start from the anchors (lexicographic max of the left hull,
//! lexicographic min of the right hull) and alternate a left walk and a right
//! walk, each adopting the immediate neighbour only while it lies strictly
//! beyond the current line. Ties are no improvement.
//!
//! Walk directions for CCW hulls:
//! - upper: left endpoint steps forward (CCW), right endpoint steps backward;
//! - lower: left endpoint steps backward, right endpoint steps forward.

use std::cmp::Ordering;

use crate::geom2::{lex_extreme, orient, Point2};

use super::types::Tangent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Upper,
    Lower,
}

type Step = fn(usize, usize) -> usize;

#[inline]
fn forward(i: usize, n: usize) -> usize {
    (i + 1) % n
}

#[inline]
fn backward(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Tangent with both hulls on or right of the directed line `left → right`.
pub fn upper_tangent(left: &[Point2], right: &[Point2], eps: f64) -> Tangent {
    walk(left, right, eps, Side::Upper)
}

/// Tangent with both hulls on or left of the directed line `left → right`.
pub fn lower_tangent(left: &[Point2], right: &[Point2], eps: f64) -> Tangent {
    walk(left, right, eps, Side::Lower)
}

fn walk(left: &[Point2], right: &[Point2], eps: f64, side: Side) -> Tangent {
    assert!(
        !left.is_empty() && !right.is_empty(),
        "tangent search needs two non-empty hulls"
    );
    let (nl, nr) = (left.len(), right.len());
    let (sign, step_left, step_right): (f64, Step, Step) = match side {
        Side::Upper => (1.0, forward as Step, backward as Step),
        Side::Lower => (-1.0, backward as Step, forward as Step),
    };
    let beyond = |a: Point2, b: Point2, c: Point2| sign * orient(a, b, c) > eps;

    let mut i = lex_extreme(left, Ordering::Greater);
    let mut j = lex_extreme(right, Ordering::Less);
    // On convex inputs each endpoint advances less than one full turn.
    let mut budget = nl + nr;
    let mut moved = true;
    while moved {
        moved = false;
        loop {
            let cand = step_left(i, nl);
            if cand == i || !beyond(left[i], right[j], left[cand]) {
                break;
            }
            if budget == 0 {
                tracing::warn!(?side, nl, nr, i, j, "tangent search budget exhausted");
                return Tangent { left: i, right: j };
            }
            budget -= 1;
            i = cand;
            moved = true;
            tracing::trace!(?side, i, j, "adopt left");
        }
        loop {
            let cand = step_right(j, nr);
            if cand == j || !beyond(left[i], right[j], right[cand]) {
                break;
            }
            if budget == 0 {
                tracing::warn!(?side, nl, nr, i, j, "tangent search budget exhausted");
                return Tangent { left: i, right: j };
            }
            budget -= 1;
            j = cand;
            moved = true;
            tracing::trace!(?side, i, j, "adopt right");
        }
    }
    Tangent { left: i, right: j }
}
