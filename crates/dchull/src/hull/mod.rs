//! Divide-and-conquer convex hull with narrated merges.
//!
//! Purpose
//! - Sort once, split at the midpoint, solve both halves, and merge the two
//!   sub-hulls through their upper and lower tangents.
//! - Expose each merge to an optional observer for step-by-step drawing.
//!
//! Conventions
//! - Hulls are counter-clockwise in the y-up frame (on a y-down screen they
//!   appear clockwise) and start at their lexicographically smallest vertex.
//! - Output hulls are strictly convex: duplicates collapse, collinear
//!   boundary points are dropped, a collinear set yields its two extremes.
//!
//! Tie policy
//! - Preprocessing sorts by `(x, y)`; the left half of every split is then
//!   lexicographically below the right half, even when x-coordinates tie.
//! - Anchors: lexicographic max of the left hull, min of the right hull.
//! - Tangent search adopts a neighbour only when its orientation exceeds
//!   `HullCfg::eps_orient`; exact ties are no improvement.
//!
//! Layout
//! - `tangent.rs` (upper/lower search), `merge.rs` (stitch and cleanup),
//!   `build.rs` (recursion and entry points), `observer.rs` (narration),
//!   `report.rs` (edge list), `types.rs`, `error.rs`.

mod build;
mod error;
mod merge;
mod observer;
mod report;
mod tangent;
mod types;

pub use build::{compute_hull, compute_hull_with, hull_of_sorted};
pub use error::HullError;
pub use merge::{merge_hulls, Merged};
pub use observer::{MergeLog, MergeObserver, MergeStep, NoopObserver, RecordedMerge};
pub use report::hull_edges;
pub use tangent::{lower_tangent, upper_tangent};
pub use types::{Bridges, Edge, Hull, HullCfg, Tangent};
