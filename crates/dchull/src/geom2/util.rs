use std::cmp::Ordering;

use super::types::{lex_cmp, orient, Point2};

/// Preprocessor: the same points, sorted non-decreasing by `x`, ties by `y`.
///
/// Duplicates are kept; the hull builder collapses them after sorting.
/// Signed zeros are normalised to `+0.0` so equal points end up adjacent.
pub fn sort_points(points: &[Point2]) -> Vec<Point2> {
    let mut pts: Vec<Point2> = points.iter().map(|p| p.map(|c| c + 0.0)).collect();
    pts.sort_by(lex_cmp);
    pts
}

#[inline]
fn sorted_distinct(points: &[Point2]) -> Vec<Point2> {
    let mut pts = sort_points(points);
    pts.dedup();
    pts
}

/// Andrew’s monotone chain convex hull.
///
/// Returns the strictly convex hull in CCW order starting at the
/// lexicographically smallest point. Collinear inputs yield the two extremes.
/// Reference answer for the divide-and-conquer builder in tests and benches.
pub fn monotone_chain(points: &[Point2]) -> Vec<Point2> {
    let pts = sorted_distinct(points);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && orient(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && orient(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Jarvis march (gift wrapping), O(n·h).
///
/// Same output convention as [`monotone_chain`]: strict, CCW, starting at the
/// lexicographically smallest point. Used as an independent reference.
pub fn gift_wrap(points: &[Point2]) -> Vec<Point2> {
    let pts = sorted_distinct(points);
    if pts.len() < 3 {
        return pts;
    }
    let start = pts[0];
    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);
        let mut next = pts[1];
        for &p in &pts {
            if p == current {
                continue;
            }
            if next == current {
                next = p;
                continue;
            }
            let o = orient(current, next, p);
            let farther = (p - current).norm_squared() > (next - current).norm_squared();
            if o < 0.0 || (o == 0.0 && farther) {
                next = p;
            }
        }
        current = next;
        if current == start || hull.len() >= pts.len() {
            break;
        }
    }
    hull
}

/// Index of the lexicographic extreme of `pts` in direction `want` (first wins).
pub(crate) fn lex_extreme(pts: &[Point2], want: Ordering) -> usize {
    let mut best = 0;
    for (k, p) in pts.iter().enumerate().skip(1) {
        if lex_cmp(p, &pts[best]) == want {
            best = k;
        }
    }
    best
}
