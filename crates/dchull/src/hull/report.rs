use crate::geom2::Point2;

use super::types::Edge;

/// Boundary edges of a vertex cycle: `v[i] → v[(i + 1) % n]` for every `i`.
///
/// A single vertex yields one zero-length self-edge and two vertices yield the
/// segment in both directions; callers that draw should skip `len() < 2`.
pub fn hull_edges(vertices: &[Point2]) -> Vec<Edge> {
    let n = vertices.len();
    (0..n)
        .map(|i| Edge::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn edges_wrap_around() {
        let tri = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let e = hull_edges(&tri);
        assert_eq!(e.len(), 3);
        assert_eq!(e[2], Edge::new(tri[2], tri[0]));
        assert!(e.iter().all(|x| !x.is_degenerate()));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(hull_edges(&[]).is_empty());
        let p = vector![3.0, 4.0];
        let single = hull_edges(&[p]);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_degenerate());
        let q = vector![0.0, 0.0];
        let seg = hull_edges(&[p, q]);
        assert_eq!(seg, vec![Edge::new(p, q), Edge::new(q, p)]);
        assert!((seg[0].length() - 5.0).abs() < 1e-12);
    }
}
