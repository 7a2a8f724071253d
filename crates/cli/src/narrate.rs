use dchull::hull::{MergeObserver, MergeStep};
use std::time::Duration;

/// Counts merges and, when `verbose`, logs each one and waits `pause`.
///
/// Stands in for the drawing layer: the pause is the animation speed.
#[derive(Debug, Default)]
pub struct Narrator {
    pub verbose: bool,
    pub pause: Duration,
    pub merges: usize,
}

impl Narrator {
    pub fn new(verbose: bool, pause: Duration) -> Self {
        Self {
            verbose,
            pause,
            merges: 0,
        }
    }
}

impl MergeObserver for Narrator {
    fn on_merge(&mut self, step: &MergeStep<'_>) {
        self.merges += 1;
        if !self.verbose {
            return;
        }
        let up = step.upper_segment();
        let lo = step.lower_segment();
        tracing::info!(
            depth = step.depth,
            left = step.left.len(),
            right = step.right.len(),
            merged = step.merged.len(),
            upper = ?((up.from.x, up.from.y), (up.to.x, up.to.y)),
            lower = ?((lo.from.x, lo.from.y), (lo.to.x, lo.to.y)),
            "merge"
        );
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
    }
}
