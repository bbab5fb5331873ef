#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use stepgraph::prelude::*;

/// Builds a graph whose edges all share the graph's directedness.
pub fn graph(directedness: Directedness, edges: &[(u32, u32)]) -> Graph<u32> {
    Graph::from_edges(
        directedness,
        edges
            .iter()
            .map(|&(a, b)| EdgeSpec::new(a, b, directedness)),
    )
}

pub fn complete_graph(n: u32) -> Graph<u32> {
    let mut edges = Vec::new();
    for a in 1..=n {
        for b in (a + 1)..=n {
            edges.push((a, b));
        }
    }
    graph(Undirected, &edges)
}

pub fn ring(n: u32) -> Graph<u32> {
    let edges: Vec<_> = (1..=n).map(|a| (a, a % n + 1)).collect();
    graph(Undirected, &edges)
}

/// The Petersen graph on nodes 1..=10: no Hamiltonian cycle, but a
/// Hamiltonian path.
pub fn petersen() -> Graph<u32> {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i + 1, (i + 1) % 5 + 1));
        edges.push((i + 1, i + 6));
        edges.push((i + 6, (i + 2) % 5 + 6));
    }
    graph(Undirected, &edges)
}

fn edge_key(a: u32, b: u32, directed: bool) -> (u32, u32) {
    if directed || a <= b { (a, b) } else { (b, a) }
}

/// Asserts that `walk` uses every edge in `edges` exactly once.
pub fn assert_covers_each_edge_once(walk: &[u32], edges: &[(u32, u32)], directed: bool) {
    let expected: BTreeSet<_> = edges
        .iter()
        .map(|&(a, b)| edge_key(a, b, directed))
        .collect();
    let mut used: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for pair in walk.windows(2) {
        *used.entry(edge_key(pair[0], pair[1], directed)).or_default() += 1;
    }
    assert_eq!(used.keys().copied().collect::<BTreeSet<_>>(), expected);
    assert!(used.values().all(|&count| count == 1), "walk {walk:?}");
}

/// Asserts that `path` visits every node of `graph` exactly once along edges.
pub fn assert_visits_each_node_once(graph: &Graph<u32>, path: &[u32]) {
    let nodes: BTreeSet<_> = path.iter().copied().collect();
    assert_eq!(nodes.len(), path.len(), "path {path:?} repeats a node");
    assert_eq!(nodes, graph.node_ids().copied().collect());
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1])
                || (!graph.is_directed() && graph.has_edge(&pair[1], &pair[0])),
            "path {path:?} leaves the graph at {pair:?}"
        );
    }
}
