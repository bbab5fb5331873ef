#![cfg(test)]

use std::collections::{BTreeMap, BTreeSet};

use pathfinding::prelude::dfs_reach;
use quickcheck::{Arbitrary, Gen};

use crate::{Directedness, Graph, NodeId};

/// A small random graph with mixed edge directedness.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: Graph<u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = u8::arbitrary(g) % 8; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 16;
        let directedness = Directedness::from_directed(bool::arbitrary(g));

        let mut graph = Graph::new(directedness);
        for node in 0..num_nodes {
            graph.add_node(node);
        }
        for _ in 0..num_edges {
            if num_nodes < 2 {
                break;
            }
            let source = u8::arbitrary(g) % num_nodes;
            let target = u8::arbitrary(g) % num_nodes;
            if source == target {
                continue;
            }
            let edge_directedness = if bool::arbitrary(g) {
                directedness
            } else {
                Directedness::from_directed(bool::arbitrary(g))
            };
            graph.add_edge(source, target, edge_directedness);
        }
        ArbGraph { graph }
    }
}

/// A small random graph whose edges are all undirected.
#[derive(Clone, Debug)]
pub struct ArbUndirectedGraph {
    pub graph: Graph<u8>,
}

impl Arbitrary for ArbUndirectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = 1 + u8::arbitrary(g) % 7;
        let num_edges = usize::arbitrary(g) % 14;
        let mut graph = Graph::new(Directedness::Undirected);
        for node in 0..num_nodes {
            graph.add_node(node);
        }
        for _ in 0..num_edges {
            let source = u8::arbitrary(g) % num_nodes;
            let target = u8::arbitrary(g) % num_nodes;
            if source != target {
                graph.add_edge(source, target, Directedness::Undirected);
            }
        }
        ArbUndirectedGraph { graph }
    }
}

fn edge_key<N: NodeId>(a: &N, b: &N, directed: bool) -> (N, N) {
    if directed || a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Asserts that `walk` traverses every edge of `arcs` exactly once.  For
/// undirected graphs both orientations of an edge count as the same edge.
pub fn assert_euler_walk<N: NodeId>(walk: &[N], arcs: &[(N, N)], directed: bool) {
    let expected: BTreeSet<(N, N)> = arcs
        .iter()
        .map(|(a, b)| edge_key(a, b, directed))
        .collect();
    let mut used: BTreeMap<(N, N), usize> = BTreeMap::new();
    for pair in walk.windows(2) {
        *used
            .entry(edge_key(&pair[0], &pair[1], directed))
            .or_default() += 1;
    }
    assert_eq!(
        used.keys().cloned().collect::<BTreeSet<_>>(),
        expected,
        "walk {walk:?} does not cover exactly the graph's edges"
    );
    assert!(
        used.values().all(|&count| count == 1),
        "walk {walk:?} repeats an edge"
    );
}

/// Asserts that `path` visits every node of `graph` once along existing arcs.
pub fn assert_hamiltonian_path<N: NodeId>(graph: &Graph<N>, path: &[N]) {
    let visited: BTreeSet<&N> = path.iter().collect();
    assert_eq!(visited.len(), path.len(), "path {path:?} repeats a node");
    assert_eq!(
        visited,
        graph.node_ids().collect::<BTreeSet<_>>(),
        "path {path:?} misses nodes"
    );
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1])
                || (!graph.is_directed() && graph.has_edge(&pair[1], &pair[0])),
            "path {path:?} uses a missing edge"
        );
    }
}

/// Asserts that `cycle` lists every node once and returns to its start.
pub fn assert_hamiltonian_cycle<N: NodeId>(graph: &Graph<N>, cycle: &[N]) {
    assert!(cycle.len() >= 2, "cycle {cycle:?} is too short");
    assert_eq!(cycle.first(), cycle.last());
    assert_hamiltonian_path(graph, &cycle[..cycle.len() - 1]);
    assert!(graph.has_edge(&cycle[cycle.len() - 2], &cycle[0]));
}

/// Checks the full Euler condition for a directed graph: every node's in- and
/// out-degree differ by at most one, and all nodes with arcs are connected
/// when direction is ignored.
pub fn has_directed_euler_walk<N: NodeId>(graph: &Graph<N>) -> bool {
    let nearly_balanced = graph
        .node_ids()
        .all(|node| graph.out_degree(node).abs_diff(graph.in_degree(node)) <= 1);
    if !nearly_balanced {
        return false;
    }
    let mut neighbors: BTreeMap<&N, Vec<&N>> = BTreeMap::new();
    for (source, target) in graph.arcs() {
        neighbors.entry(source).or_default().push(target);
        neighbors.entry(target).or_default().push(source);
    }
    let Some(&start) = neighbors.keys().next() else {
        return false;
    };
    let reached: BTreeSet<&N> = dfs_reach(start, |node: &&N| {
        neighbors.get(node).cloned().unwrap_or_default()
    })
    .collect();
    reached.len() == neighbors.len()
}
