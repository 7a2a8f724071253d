//! Divide-and-conquer convex hulls in 2D.
//!
//! The core sorts the input once, splits it at the midpoint, solves both
//! halves recursively and merges the two sub-hulls through their upper and
//! lower tangents. Each merge can be narrated to a `MergeObserver`.
//!
//! Layout
//! - `geom2`: point type, orientation predicate, preprocessing sort,
//!   reference hulls, random point clouds.
//! - `hull`: tangent search, merge, recursive builder, observer hook,
//!   edge-list reporter.
//! - `api`: curated flat surface for callers that do not use `nalgebra`.

pub mod api;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::Point2;
pub use hull::{compute_hull, compute_hull_with, Hull, HullCfg, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, PointCloud, ReplayToken};
    pub use crate::geom2::{gift_wrap, monotone_chain, orient, sort_points, Point2};
    pub use crate::hull::{
        compute_hull, compute_hull_with, hull_edges, Edge, Hull, HullCfg, HullError, MergeLog,
        MergeObserver, MergeStep, Tangent,
    };
}
