//! Hamiltonian cycle and path searches.
//!
//! Both searches work on a dense, index-based view of the graph
//! ([`IndexedGraph`]) where index `i` is the `i`-th node in canonical order.
//! The indices are structural for the subset DP (they are bit positions), and
//! for the backtracking search they fix the order in which neighbors are
//! tried, so traces are reproducible.
mod cycle;
mod path;

use std::collections::HashMap;

pub use cycle::HamiltonianCycleSearch;
pub use path::{BestPath, HamiltonianPathSearch, PathSearchResult};

use crate::graph::{Graph, NodeId};

pub(crate) struct IndexedGraph<'g, N: NodeId> {
    nodes: Vec<&'g N>,
    /// Successor indices of each node, ascending.
    successors: Vec<Vec<usize>>,
    directed: bool,
}

impl<'g, N: NodeId> IndexedGraph<'g, N> {
    pub(crate) fn new(graph: &'g Graph<N>) -> Self {
        let nodes: Vec<&N> = graph.node_ids().collect();
        let index: HashMap<&N, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (*node, i))
            .collect();
        let successors = nodes
            .iter()
            .map(|node| {
                graph
                    .successors(node)
                    .filter_map(|target| index.get(target).copied())
                    .collect()
            })
            .collect();
        Self {
            nodes,
            successors,
            directed: graph.is_directed(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, index: usize) -> N {
        self.nodes[index].clone()
    }

    pub(crate) fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    pub(crate) fn has_arc(&self, from: usize, into: usize) -> bool {
        self.successors[from].binary_search(&into).is_ok()
    }

    /// Checks whether a walk may step from `from` to `into`: along an arc, or
    /// against one when the graph is undirected.
    pub(crate) fn joined(&self, from: usize, into: usize) -> bool {
        self.has_arc(from, into) || (!self.directed && self.has_arc(into, from))
    }

    pub(crate) fn edge(&self, from: usize, into: usize) -> (N, N) {
        (self.node(from), self.node(into))
    }
}
