//! Point type and the orientation predicate.
//!
//! - `Point2`: a plain `nalgebra::Vector2<f64>`; points are `Copy` values.
//! - `orient`: signed doubled triangle area. Every geometric decision in the
//!   hull builder goes through this one function, never through slopes.
//! - `lex_cmp`: the total `(x, y)` order used by the preprocessor and the
//!   merge anchors.
//!
//! References
//! - Code cross-refs: `hull::tangent`, `util::{sort_points, gift_wrap}`

use nalgebra::Vector2;
use std::cmp::Ordering;

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Twice the signed area of the triangle `(a, b, c)`, i.e. `(b - a) × (c - a)`.
///
/// Positive iff `c` lies strictly left of the directed line `a → b`.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Classify `orient(a, b, c)` with a symmetric tolerance band `[-eps, eps]`.
#[inline]
pub fn orientation_eps(a: Point2, b: Point2, c: Point2, eps: f64) -> Orientation {
    let d = orient(a, b, c);
    if d > eps {
        Orientation::CounterClockwise
    } else if d < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Lexicographic order on `(x, y)`; total thanks to `f64::total_cmp`.
#[inline]
pub fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
