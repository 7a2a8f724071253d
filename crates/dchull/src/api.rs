//! Tuple-based surface for callers that do not want `nalgebra` types.
//!
//! Mirrors `hull::compute_hull` and `hull::hull_edges` one-to-one; the
//! winding and start-vertex conventions are the same.

pub use crate::geom2::rand::{draw_points, PointCloud, ReplayToken};
pub use crate::hull::{HullCfg, HullError};

use crate::geom2::Point2;
use crate::hull::{compute_hull, hull_edges};

/// Hull vertices of `points` as `(x, y)` tuples, CCW.
pub fn hull_of_points(points: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, HullError> {
    let pts: Vec<Point2> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    let hull = compute_hull(&pts)?;
    Ok(hull.vertices().iter().map(|p| (p.x, p.y)).collect())
}

/// Boundary edges of `points`' hull as `((x0, y0), (x1, y1))` pairs.
pub fn hull_edge_list(points: &[(f64, f64)]) -> Result<Vec<((f64, f64), (f64, f64))>, HullError> {
    let pts: Vec<Point2> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    let hull = compute_hull(&pts)?;
    Ok(hull_edges(hull.vertices())
        .into_iter()
        .map(|e| ((e.from.x, e.from.y), (e.to.x, e.to.y)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn triangle_with_interior_point() {
        let hull = hull_of_points(&[(0.0, 0.0), (4.0, 0.0), (1.0, 1.0), (0.0, 4.0)]).unwrap();
        assert_eq!(hull, vec![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let edges = hull_edge_list(&[(0.0, 0.0), (4.0, 0.0), (1.0, 1.0), (0.0, 4.0)]).unwrap();
        assert_eq!(edges.last(), Some(&((0.0, 4.0), (0.0, 0.0))));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(hull_of_points(&[]), Err(HullError::EmptyInput));
    }

    #[test]
    fn randomized_seeded_points_stay_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        let pts: Vec<(f64, f64)> = (0..200)
            .map(|_| (rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)))
            .collect();
        let hull = hull_of_points(&pts).unwrap();
        let xmax = pts.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        assert!(hull.iter().any(|p| p.0 == xmax));
        assert!(hull.len() >= 3 && hull.len() <= pts.len());
        let cloud: Vec<Point2> = pts.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let poly = compute_hull(&cloud).unwrap();
        assert_eq!(poly.len(), hull.len());
        for p in &cloud {
            assert!(poly.contains(*p, 1e-9), "{p:?} outside");
        }
    }
}
