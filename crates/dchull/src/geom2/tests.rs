use super::rand::{draw_points, PointCloud, ReplayToken};
use super::*;
use nalgebra::vector;

#[test]
fn orient_signs_and_tolerance() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!((orient(a, b, vector![0.5, 2.0]) - 2.0).abs() < 1e-12);
    assert!((orient(a, b, vector![0.5, -1.0]) + 1.0).abs() < 1e-12);
    assert_eq!(orient(a, b, vector![7.0, 0.0]), 0.0);

    assert_eq!(
        orientation_eps(a, b, vector![3.0, 1e-12], 0.0),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation_eps(a, b, vector![3.0, 1e-12], 1e-9),
        Orientation::Collinear
    );
    assert_eq!(
        orientation_eps(b, a, vector![3.0, 1.0], 0.0),
        Orientation::Clockwise
    );
}

#[test]
fn sort_breaks_x_ties_by_y() {
    let pts = vec![
        vector![1.0, 2.0],
        vector![0.0, 5.0],
        vector![1.0, -1.0],
        vector![0.0, 5.0],
        vector![-3.0, 0.0],
    ];
    let sorted = sort_points(&pts);
    assert_eq!(
        sorted,
        vec![
            vector![-3.0, 0.0],
            vector![0.0, 5.0],
            vector![0.0, 5.0],
            vector![1.0, -1.0],
            vector![1.0, 2.0],
        ]
    );
    // deterministic regardless of input order
    let mut rev = pts.clone();
    rev.reverse();
    assert_eq!(sort_points(&rev), sorted);
}

#[test]
fn reference_hulls_on_square_with_interior_and_edge_points() {
    let pts = vec![
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![0.5, 0.5],
        vector![0.5, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 0.0],
        vector![0.0, 0.0],
    ];
    let expected = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert_eq!(monotone_chain(&pts), expected);
    assert_eq!(gift_wrap(&pts), expected);
}

#[test]
fn reference_hulls_on_degenerate_inputs() {
    let single = vec![vector![2.0, 3.0], vector![2.0, 3.0]];
    assert_eq!(monotone_chain(&single), vec![vector![2.0, 3.0]]);
    assert_eq!(gift_wrap(&single), vec![vector![2.0, 3.0]]);

    let line: Vec<_> = (0..6).map(|k| vector![0.0, k as f64]).collect();
    let ends = vec![vector![0.0, 0.0], vector![0.0, 5.0]];
    assert_eq!(monotone_chain(&line), ends);
    assert_eq!(gift_wrap(&line), ends);
}

#[test]
fn reference_hulls_agree_on_random_clouds() {
    let clouds = [
        PointCloud::UniformSquare { half: 1.0 },
        PointCloud::UniformDisk { radius: 3.0 },
        PointCloud::Lattice { side: 6 },
    ];
    for (k, cloud) in clouds.into_iter().enumerate() {
        let pts = draw_points(cloud, 300, ReplayToken { seed: 17, index: k as u64 });
        assert_eq!(monotone_chain(&pts), gift_wrap(&pts), "cloud {cloud:?}");
    }
}

#[test]
fn draws_are_reproducible_per_token() {
    let cloud = PointCloud::Clustered {
        clusters: 3,
        spread: 0.1,
    };
    let tok = ReplayToken::new(99);
    let a = draw_points(cloud, 50, tok);
    let b = draw_points(cloud, 50, tok);
    let c = draw_points(cloud, 50, tok.next());
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 50);
}

#[test]
fn collinear_cloud_is_exactly_collinear() {
    let pts = draw_points(
        PointCloud::Collinear {
            run: 3,
            rise: -2,
            reach: 50,
        },
        40,
        ReplayToken::new(5),
    );
    for w in pts.windows(3) {
        assert_eq!(orient(w[0], w[1], w[2]), 0.0);
    }
}

#[test]
fn collinear_cloud_accepts_extreme_reach() {
    let pts = draw_points(
        PointCloud::Collinear {
            run: 1,
            rise: 1,
            reach: i32::MIN,
        },
        20,
        ReplayToken::new(6),
    );
    assert_eq!(pts.len(), 20);
    let bound = -(i32::MIN as f64);
    assert!(pts.iter().all(|p| p.x == p.y && p.x.abs() <= bound));
}
