//! Merge narration hook.
//!
//! The builder reports every tangent merge to an optional `MergeObserver`
//! after the merged hull is computed. Observers only read; the result does
//! not depend on whether one is attached.

use crate::geom2::Point2;

use super::report::hull_edges;
use super::types::{Edge, Tangent};

/// One tangent merge, borrowed from the builder for the duration of the call.
#[derive(Clone, Copy, Debug)]
pub struct MergeStep<'a> {
    /// Recursion depth of the merge (0 = final merge).
    pub depth: usize,
    pub left: &'a [Point2],
    pub right: &'a [Point2],
    pub upper: Tangent,
    pub lower: Tangent,
    pub merged: &'a [Point2],
}

impl MergeStep<'_> {
    pub fn upper_segment(&self) -> Edge {
        Edge::new(self.left[self.upper.left], self.right[self.upper.right])
    }

    pub fn lower_segment(&self) -> Edge {
        Edge::new(self.left[self.lower.left], self.right[self.lower.right])
    }

    pub fn left_edges(&self) -> Vec<Edge> {
        hull_edges(self.left)
    }

    pub fn right_edges(&self) -> Vec<Edge> {
        hull_edges(self.right)
    }
}

/// Receiver of merge steps (e.g. an animation layer).
pub trait MergeObserver {
    fn on_merge(&mut self, step: &MergeStep<'_>);
}

impl<F> MergeObserver for F
where
    F: FnMut(&MergeStep<'_>),
{
    #[inline]
    fn on_merge(&mut self, step: &MergeStep<'_>) {
        self(step)
    }
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {
    #[inline]
    fn on_merge(&mut self, _step: &MergeStep<'_>) {}
}

/// Owned copy of a `MergeStep`.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedMerge {
    pub depth: usize,
    pub left: Vec<Point2>,
    pub right: Vec<Point2>,
    pub upper: Tangent,
    pub lower: Tangent,
    pub merged: Vec<Point2>,
}

impl From<&MergeStep<'_>> for RecordedMerge {
    fn from(step: &MergeStep<'_>) -> Self {
        Self {
            depth: step.depth,
            left: step.left.to_vec(),
            right: step.right.to_vec(),
            upper: step.upper,
            lower: step.lower,
            merged: step.merged.to_vec(),
        }
    }
}

/// Records every step in call order (post-order: children before parents).
#[derive(Clone, Debug, Default)]
pub struct MergeLog {
    pub steps: Vec<RecordedMerge>,
}

impl MergeLog {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The top-level merge, if any merge needed a tangent search.
    pub fn last(&self) -> Option<&RecordedMerge> {
        self.steps.last()
    }
}

impl MergeObserver for MergeLog {
    fn on_merge(&mut self, step: &MergeStep<'_>) {
        self.steps.push(RecordedMerge::from(step));
    }
}
