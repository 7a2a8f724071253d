//! Print every tangent merge of a small random point set.
//!
//! Usage:
//!   cargo run -p dchull --example narrate_merges -- 24

use dchull::hull::MergeStep;
use dchull::prelude::*;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(16);
    let pts = draw_points(PointCloud::UniformDisk { radius: 1.0 }, n, ReplayToken::new(2025));
    let mut narrate = |step: &MergeStep<'_>| {
        let up = step.upper_segment();
        let lo = step.lower_segment();
        println!(
            "depth {:>2}: {:>3} + {:>3} -> {:>3}  upper ({:+.3},{:+.3})-({:+.3},{:+.3})  lower ({:+.3},{:+.3})-({:+.3},{:+.3})",
            step.depth,
            step.left.len(),
            step.right.len(),
            step.merged.len(),
            up.from.x,
            up.from.y,
            up.to.x,
            up.to.y,
            lo.from.x,
            lo.from.y,
            lo.to.x,
            lo.to.y,
        );
    };
    match compute_hull_with(&pts, &HullCfg::default(), Some(&mut narrate)) {
        Ok(hull) => println!("hull: {} vertices, area {:.4}", hull.len(), hull.area()),
        Err(e) => eprintln!("error: {e}"),
    }
}
