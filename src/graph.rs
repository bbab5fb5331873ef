//! The adjacency-set graph model shared by every algorithm in this crate.
//!
//! A [`Graph`] is built fresh from the caller's current edge list, handed to
//! exactly one algorithm, and then discarded.  Successor sets are ordered by
//! the node identifier's [`Ord`] implementation, which is the canonical order
//! every traversal uses so that traces are reproducible.
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    directedness::Directedness,
    error::GraphError,
    euler,
    hamiltonian::{HamiltonianCycleSearch, HamiltonianPathSearch},
    trace::Trace,
};

/// A trait representing a node identifier in a graph.
///
/// This trait has no methods; it collects the bounds the algorithms need.
/// The [`Ord`] bound supplies the canonical node order used wherever the
/// order of exploration affects a trace.
pub trait NodeId: Eq + Hash + Clone + Debug + Ord {}

impl<T> NodeId for T where T: Eq + Hash + Clone + Debug + Ord {}

/// One edge of the caller's edge list: `source → target`, plus whether the
/// reverse direction is implied.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeSpec<N> {
    pub source: N,
    pub target: N,
    pub directedness: Directedness,
}

impl<N> EdgeSpec<N> {
    pub fn new(source: N, target: N, directedness: Directedness) -> Self {
        Self {
            source,
            target,
            directedness,
        }
    }

    /// Checks whether this edge joins `a` and `b` in either orientation.
    pub fn joins(&self, a: &N, b: &N) -> bool
    where
        N: Eq,
    {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// Checks whether `node` is one of the edge's ends.
    pub fn touches(&self, node: &N) -> bool
    where
        N: Eq,
    {
        self.source == *node || self.target == *node
    }
}

/// A graph stored as a mapping from each node to its set of successors.
///
/// Invariant: every node that appears in a successor set is also a key of the
/// adjacency mapping, so traversals never need existence checks.  The key set
/// is exactly the set of known nodes, isolated ones included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<N: NodeId> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
    directedness: Directedness,
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty graph whose new edges default to `directedness`.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directedness,
        }
    }

    /// Builds a graph from `(source, target, directedness)` triples, registering
    /// every endpoint on the way.
    pub fn from_edges(
        directedness: Directedness,
        edges: impl IntoIterator<Item = EdgeSpec<N>>,
    ) -> Self {
        let mut graph = Self::new(directedness);
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.directedness);
        }
        graph
    }

    /// Builds a graph from a node list and an edge list, failing fast when an
    /// edge references a node that is not in `nodes`.
    pub fn try_from_parts(
        directedness: Directedness,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = EdgeSpec<N>>,
    ) -> Result<Self, GraphError<N>> {
        let mut graph = Self::new(directedness);
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.check_valid_node_id(&edge.source)?;
            graph.check_valid_node_id(&edge.target)?;
            graph.add_edge(edge.source, edge.target, edge.directedness);
        }
        Ok(graph)
    }

    /// Returns the graph-level directedness.
    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    // Nodes

    /// Registers a node, returning `true` if it was not already known.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        true
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Checks that `node` is registered in the graph.
    pub fn check_valid_node_id(&self, node: &N) -> Result<(), GraphError<N>> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node.clone()))
        }
    }

    /// Gets an iterator over all node IDs in canonical order.
    pub fn node_ids(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    // Edges

    /// Inserts the arc `a → b`, and also `b → a` when the edge is undirected.
    /// Both ends are registered as nodes if they are new.
    ///
    /// The edge's directedness is independent of the graph-level mode.
    pub fn add_edge(&mut self, a: N, b: N, directedness: Directedness) {
        if !directedness.is_directed() {
            self.adjacency
                .entry(b.clone())
                .or_default()
                .insert(a.clone());
        } else {
            self.adjacency.entry(b.clone()).or_default();
        }
        self.adjacency.entry(a).or_default().insert(b);
    }

    /// Removes `b` from the successors of `a` and `a` from the successors of
    /// `b`, whichever are present.
    ///
    /// The removal is symmetric no matter how the edge was added, so removing
    /// `a → b` from a graph that also holds an independent directed arc
    /// `b → a` removes both.
    pub fn remove_edge(&mut self, a: &N, b: &N) {
        if let Some(successors) = self.adjacency.get_mut(a) {
            successors.remove(b);
        }
        if let Some(successors) = self.adjacency.get_mut(b) {
            successors.remove(a);
        }
    }

    /// Removes only the arc `a → b`, returning whether it was present.
    pub(crate) fn remove_arc(&mut self, a: &N, b: &N) -> bool {
        self.adjacency
            .get_mut(a)
            .is_some_and(|successors| successors.remove(b))
    }

    /// Checks whether the arc `from → into` is present.
    pub fn has_edge(&self, from: &N, into: &N) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|successors| successors.contains(into))
    }

    /// Gets the successors of `node` in canonical order.  Unknown nodes have
    /// no successors.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N> {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Gets the smallest successor of `node`, if any.
    pub(crate) fn first_successor(&self, node: &N) -> Option<&N> {
        self.adjacency
            .get(node)
            .and_then(|successors| successors.first())
    }

    /// Gets the number of arcs leaving `node`.
    pub fn out_degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Gets the number of arcs entering `node`.
    pub fn in_degree(&self, node: &N) -> usize {
        self.adjacency
            .values()
            .filter(|successors| successors.contains(node))
            .count()
    }

    /// Gets the in-degree of every node at once.
    pub(crate) fn in_degrees(&self) -> BTreeMap<&N, usize> {
        let mut degrees: BTreeMap<&N, usize> = self.adjacency.keys().map(|n| (n, 0)).collect();
        for target in self.adjacency.values().flatten() {
            *degrees.entry(target).or_default() += 1;
        }
        degrees
    }

    /// Gets the total number of stored arcs; an undirected edge counts twice
    /// (once per direction) unless it is a self-loop.
    pub fn num_arcs(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Returns true if at least one arc is stored.
    pub fn has_edges(&self) -> bool {
        self.adjacency.values().any(|successors| !successors.is_empty())
    }

    /// Gets every stored arc as a `(source, target)` pair, in canonical order.
    pub fn arcs(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(source, successors)| successors.iter().map(move |target| (source, target)))
    }

    // Algorithms

    /// Checks whether an Euler path or circuit exists.  See
    /// [`euler::is_feasible`].
    pub fn is_euler_path_feasible(&self) -> bool {
        euler::is_feasible(self)
    }

    /// Builds the step trace of an Euler path or circuit, consuming every edge
    /// of the graph in the process.
    ///
    /// Callers are expected to check [`Self::is_euler_path_feasible`] first;
    /// on an infeasible graph the trace is well formed but its `confirmed`
    /// sequence is not an Euler walk.  After this call the graph has no edges
    /// left and must not be reused for another algorithm.
    pub fn build_euler_trace(&mut self) -> Trace<N> {
        euler::build_trace(self)
    }

    /// Builds the step trace of a backtracking Hamiltonian cycle search.
    pub fn build_hamiltonian_cycle_trace(&self) -> Trace<N> {
        HamiltonianCycleSearch::new(self).run()
    }

    /// Builds the step trace of the subset-DP Hamiltonian path search.
    ///
    /// # Panics
    ///
    /// Panics if the graph has `usize::BITS` nodes or more.
    pub fn build_hamiltonian_path_trace(&self) -> Trace<N> {
        HamiltonianPathSearch::new(self).run().trace
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::test_support::ArbGraph;

    fn path_graph() -> Graph<u32> {
        let mut graph = Graph::new(Directedness::Directed);
        graph.add_edge(1, 2, Directedness::Directed);
        graph.add_edge(2, 3, Directedness::Directed);
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::<u32>::new(Directedness::Undirected);
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_arcs(), 0);
        assert!(!graph.has_edges());
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_add_directed_edge() {
        let graph = path_graph();
        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert_eq!(graph.node_ids().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(graph.out_degree(&3), 0);
        assert_eq!(graph.in_degree(&3), 1);
        assert_eq!(graph.in_degree(&1), 0);
    }

    #[test]
    fn test_add_undirected_edge() {
        let mut graph = Graph::new(Directedness::Undirected);
        graph.add_edge("a", "b", Directedness::Undirected);
        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));
        assert_eq!(graph.num_arcs(), 2);
        assert_eq!(graph.out_degree(&"a"), 1);
        assert_eq!(graph.in_degree(&"a"), 1);
    }

    #[test]
    fn test_mixed_edges() {
        let mut graph = Graph::new(Directedness::Undirected);
        graph.add_edge(1, 2, Directedness::Undirected);
        graph.add_edge(2, 3, Directedness::Directed);
        assert!(graph.has_edge(&2, &1));
        assert!(graph.has_edge(&2, &3));
        assert!(!graph.has_edge(&3, &2));
        assert_eq!(graph.successors(&2).copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_remove_edge_is_symmetric() {
        let mut graph = Graph::new(Directedness::Directed);
        graph.add_edge(1, 2, Directedness::Directed);
        graph.add_edge(2, 1, Directedness::Directed);
        graph.remove_edge(&1, &2);
        assert!(!graph.has_edges());
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn test_remove_missing_edge() {
        let mut graph = path_graph();
        graph.remove_edge(&1, &3);
        graph.remove_edge(&7, &8);
        assert_eq!(graph.num_arcs(), 2);
    }

    #[test]
    fn test_isolated_nodes_are_known() {
        let mut graph = path_graph();
        assert!(graph.add_node(9));
        assert!(!graph.add_node(9));
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.successors(&9).count(), 0);
    }

    #[test]
    fn test_try_from_parts_rejects_unknown_node() {
        let result = Graph::try_from_parts(
            Directedness::Undirected,
            [1, 2],
            [EdgeSpec::new(1, 3, Directedness::Undirected)],
        );
        assert_eq!(result, Err(GraphError::UnknownNode(3)));
    }

    #[test]
    fn test_try_from_parts_keeps_isolated_nodes() {
        let graph = Graph::try_from_parts(
            Directedness::Undirected,
            [1, 2, 5],
            [EdgeSpec::new(1, 2, Directedness::Undirected)],
        )
        .unwrap();
        assert_eq!(graph.num_nodes(), 3);
        assert!(graph.contains_node(&5));
    }

    #[test]
    fn test_arcs_in_canonical_order() {
        let mut graph = Graph::new(Directedness::Directed);
        graph.add_edge(3, 1, Directedness::Directed);
        graph.add_edge(1, 3, Directedness::Directed);
        graph.add_edge(1, 2, Directedness::Directed);
        assert_eq!(
            graph.arcs().map(|(a, b)| (*a, *b)).collect::<Vec<_>>(),
            vec![(1, 2), (1, 3), (3, 1)]
        );
    }

    #[quickcheck]
    fn prop_successors_are_nodes(ArbGraph { graph }: ArbGraph) -> bool {
        graph
            .arcs()
            .all(|(source, target)| graph.contains_node(source) && graph.contains_node(target))
    }

    #[quickcheck]
    fn prop_degree_sums_match(ArbGraph { graph }: ArbGraph) -> bool {
        let out_total: usize = graph.node_ids().map(|n| graph.out_degree(n)).sum();
        let in_total: usize = graph.node_ids().map(|n| graph.in_degree(n)).sum();
        out_total == graph.num_arcs() && in_total == graph.num_arcs()
    }

    #[quickcheck]
    fn prop_in_degrees_agree(ArbGraph { graph }: ArbGraph) -> bool {
        let degrees = graph.in_degrees();
        graph
            .node_ids()
            .all(|n| degrees.get(n).copied() == Some(graph.in_degree(n)))
    }
}
