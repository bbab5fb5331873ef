use std::collections::BTreeSet;

use super::IndexedGraph;
use crate::{
    graph::{Graph, NodeId},
    snapshot::Snapshot,
    trace::{Trace, TraceRecorder},
    tracing_support::{debug_event, info_span},
};

/// A minimum-edge Hamiltonian path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestPath<N> {
    pub nodes: Vec<N>,
    pub edge_count: usize,
}

/// The trace of a Hamiltonian path search together with the path it found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSearchResult<N> {
    pub trace: Trace<N>,
    pub best: Option<BestPath<N>>,
}

/// The best known way to visit the nodes of one mask and stop at one node.
#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: u32,
    /// The node visited just before the end node, if any.
    parent: Option<u32>,
}

/// Subset dynamic programming (Held-Karp) over node bitmasks.
///
/// `dp[v][mask]` is the fewest edges of a path that visits exactly the nodes
/// in `mask` and ends at `v`.  Masks are processed in increasing order, and
/// one snapshot is recorded per mask:
///
/// - `active`: the nodes in the mask
/// - `frontier`: the nodes outside it
/// - `active_edges`: the edges examined from reachable states of the mask
/// - `confirmed_edges`: every edge that has improved some state so far
///
/// If a path through all nodes exists, a final snapshot confirms it and only
/// its edges.
///
/// Time is O(2^n * n^2) and memory O(2^n * n), so this is practical only up
/// to roughly 20 nodes.
pub struct HamiltonianPathSearch<'g, N: NodeId> {
    graph: IndexedGraph<'g, N>,
}

impl<'g, N: NodeId> HamiltonianPathSearch<'g, N> {
    pub fn new(graph: &'g Graph<N>) -> Self {
        Self {
            graph: IndexedGraph::new(graph),
        }
    }

    /// Runs the search.
    ///
    /// # Panics
    ///
    /// Panics if the graph has `usize::BITS` nodes or more, since masks are
    /// single machine words.
    pub fn run(&self) -> PathSearchResult<N> {
        let _span = info_span!("hamiltonian_path").entered();
        let n = self.graph.len();
        assert!(
            n < usize::BITS as usize,
            "Hamiltonian path search supports fewer than {} nodes, got {}",
            usize::BITS,
            n
        );
        let full: usize = (1 << n) - 1;

        let mut dp: Vec<Vec<Option<Entry>>> = vec![vec![None; full + 1]; n];
        for (v, row) in dp.iter_mut().enumerate() {
            row[1 << v] = Some(Entry {
                cost: 0,
                parent: None,
            });
        }

        let mut recorder = TraceRecorder::new();
        let mut improving_edges = BTreeSet::new();
        for mask in 0..=full {
            let mut snapshot = Snapshot::default();
            for u in 0..n {
                if mask & (1 << u) != 0 {
                    snapshot.active.insert(self.graph.node(u));
                } else {
                    snapshot.frontier.insert(self.graph.node(u));
                }
            }

            for v in 0..n {
                let Some(Entry { cost, .. }) = dp[v][mask] else {
                    continue;
                };
                for u in 0..n {
                    if mask & (1 << u) != 0 || !self.graph.joined(v, u) {
                        continue;
                    }
                    snapshot.active_edges.insert(self.graph.edge(v, u));
                    let next = &mut dp[u][mask | (1 << u)];
                    if next.is_none_or(|entry| cost + 1 < entry.cost) {
                        *next = Some(Entry {
                            cost: cost + 1,
                            parent: Some(v as u32),
                        });
                        improving_edges.insert(self.graph.edge(v, u));
                    }
                }
            }

            snapshot.confirmed_edges = improving_edges.clone();
            recorder.record(snapshot);
        }

        let best = (0..n)
            .filter_map(|v| dp[v][full].map(|entry| (entry.cost, v)))
            .min()
            .map(|(cost, end)| BestPath {
                nodes: self.reconstruct(&dp, end, full),
                edge_count: cost as usize,
            });

        match &best {
            Some(path) => {
                debug_event!(path = ?path.nodes, edges = path.edge_count, "hamiltonian path found");
                recorder.record(Snapshot {
                    confirmed_edges: path
                        .nodes
                        .windows(2)
                        .map(|pair| (pair[0].clone(), pair[1].clone()))
                        .collect(),
                    confirmed: path.nodes.clone(),
                    ..Snapshot::default()
                });
            }
            None => debug_event!(nodes = n, "no hamiltonian path"),
        }

        PathSearchResult {
            trace: recorder.finish(),
            best,
        }
    }

    /// Walks parent links back from `end` to rebuild the path in visiting
    /// order.
    fn reconstruct(&self, dp: &[Vec<Option<Entry>>], end: usize, full: usize) -> Vec<N> {
        let mut nodes = Vec::new();
        let mut node = end;
        let mut mask = full;
        while let Some(entry) = dp[node][mask] {
            nodes.push(self.graph.node(node));
            let Some(parent) = entry.parent else {
                break;
            };
            mask &= !(1 << node);
            node = parent as usize;
        }
        nodes.reverse();
        nodes
    }
}
