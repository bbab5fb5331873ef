use std::collections::BTreeSet;

use derivative::Derivative;

/// A directed `(source, target)` pair naming an edge in a snapshot.
pub type EdgeKey<N> = (N, N);

/// One frame of animation state produced by an algorithm run.
///
/// The rendering layer maps these sets onto its own node and edge entities by
/// identifier equality:
///
/// - `frontier`: nodes currently being explored (drawn yellow)
/// - `active` / `active_edges`: the current exploration path (drawn red)
/// - `confirmed` / `confirmed_edges`: the best or solution path so far (drawn
///   green)
///
/// Only `confirmed` is ordered; it lists the path's nodes from start to end.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "N: PartialEq"),
    Eq(bound = "N: Eq"),
    Hash(bound = "N: std::hash::Hash")
)]
pub struct Snapshot<N> {
    pub frontier: BTreeSet<N>,
    pub active: BTreeSet<N>,
    pub active_edges: BTreeSet<EdgeKey<N>>,
    pub confirmed: Vec<N>,
    pub confirmed_edges: BTreeSet<EdgeKey<N>>,
}

impl<N> Snapshot<N> {
    /// Returns true if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
            && self.active.is_empty()
            && self.active_edges.is_empty()
            && self.confirmed.is_empty()
            && self.confirmed_edges.is_empty()
    }
}
