//! The ordered step log produced by one algorithm run.
//!
//! A [`Trace`] starts with an empty snapshot (the Euler trace of a graph
//! without edges is the one exception: it is a single snapshot listing the
//! isolated nodes), and its last snapshot
//! encodes the result: a non-empty `confirmed` sequence is the solution, an
//! empty one means no solution was found.  There is no separate success flag.
use std::ops::Index;

use crate::snapshot::Snapshot;

/// An ordered sequence of [`Snapshot`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<N> {
    snapshots: Vec<Snapshot<N>>,
}

impl<N> Trace<N> {
    /// A trace made of one snapshot, for runs with nothing to animate.
    pub(crate) fn single(snapshot: Snapshot<N>) -> Self {
        Self {
            snapshots: vec![snapshot],
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for traces produced by this crate, which begin with the
    /// initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot<N>> {
        self.snapshots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<N>> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot<N>] {
        &self.snapshots
    }

    /// Returns the first snapshot.
    pub fn initial(&self) -> Option<&Snapshot<N>> {
        self.snapshots.first()
    }

    /// Returns the last snapshot, which carries the result.
    pub fn final_snapshot(&self) -> Option<&Snapshot<N>> {
        self.snapshots.last()
    }

    /// Returns the `confirmed` sequence of the last snapshot.
    pub fn solution(&self) -> &[N] {
        self.final_snapshot()
            .map(|snapshot| snapshot.confirmed.as_slice())
            .unwrap_or_default()
    }

    /// Returns true if the last snapshot confirms at least one node.
    pub fn is_solved(&self) -> bool {
        !self.solution().is_empty()
    }
}

impl<N> Index<usize> for Trace<N> {
    type Output = Snapshot<N>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.snapshots[index]
    }
}

impl<N> IntoIterator for Trace<N> {
    type Item = Snapshot<N>;
    type IntoIter = std::vec::IntoIter<Snapshot<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Trace<N> {
    type Item = &'a Snapshot<N>;
    type IntoIter = std::slice::Iter<'a, Snapshot<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Append-only log that algorithms write snapshots into at well-defined
/// points.  Each run owns its own recorder.
#[derive(Debug)]
pub struct TraceRecorder<N> {
    snapshots: Vec<Snapshot<N>>,
}

impl<N> TraceRecorder<N> {
    /// Creates a recorder seeded with the empty initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::default()],
        }
    }

    /// Appends a snapshot unconditionally.
    pub fn record(&mut self, snapshot: Snapshot<N>) {
        self.snapshots.push(snapshot);
    }

    /// Appends a snapshot unless it equals the previous one.  Returns whether
    /// it was appended.
    pub fn record_if_changed(&mut self, snapshot: Snapshot<N>) -> bool
    where
        N: PartialEq,
    {
        if self.snapshots.last() == Some(&snapshot) {
            return false;
        }
        self.snapshots.push(snapshot);
        true
    }

    /// Returns the most recently recorded snapshot.
    pub fn last(&self) -> Option<&Snapshot<N>> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn finish(self) -> Trace<N> {
        Trace {
            snapshots: self.snapshots,
        }
    }
}

impl<N> Default for TraceRecorder<N> {
    fn default() -> Self {
        Self::new()
    }
}
