//! 2D primitives shared by the hull builder and its reference checks.
//!
//! Purpose
//! - Name the point type and the one predicate the hull is built on (the
//!   orientation test), plus the preprocessing sort.
//! - Keep the reference hulls (monotone chain, gift wrapping) and the random
//!   point clouds here so that `hull` only holds the divide-and-conquer code.
//!
//! Conventions
//! - Polygons are listed counter-clockwise in the y-up frame.
//! - Point order is lexicographic `(x, y)` (`lex_cmp`).
//!
//! References
//! - Code cross-refs: `hull::{compute_hull, merge_hulls}`

pub mod rand;
mod types;
mod util;

pub use types::{lex_cmp, orient, orientation_eps, Orientation, Point2};
pub use util::{gift_wrap, monotone_chain, sort_points};
pub(crate) use util::lex_extreme;

#[cfg(test)]
mod tests;
