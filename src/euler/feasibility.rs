use std::collections::{BTreeMap, HashSet};

use pathfinding::prelude::dfs_reach;

use crate::{
    graph::{Graph, NodeId},
    tracing_support::{debug_event, info_span},
};

/// Checks whether the graph has an Euler path or circuit.
///
/// A graph without edges is never feasible.  Undirected graphs need at most
/// two odd-degree nodes, and all nodes of positive degree must lie in one
/// connected component; isolated nodes are ignored.  Directed graphs need at
/// most one node whose in-degree exceeds its out-degree by one, and at most
/// one whose out-degree exceeds its in-degree by one.
///
/// Known limitation: the directed check looks at degrees only.  A directed
/// graph that passes it but falls apart into several components is reported
/// as feasible.
pub fn is_feasible<N: NodeId>(graph: &Graph<N>) -> bool {
    let _span = info_span!("euler_feasibility").entered();
    if !graph.has_edges() {
        debug_event!("graph has no edges");
        return false;
    }
    let feasible = if graph.is_directed() {
        degrees_balanced(graph)
    } else {
        odd_degree_count(graph) <= 2 && positive_degree_nodes_connected(graph)
    };
    debug_event!(feasible, directed = graph.is_directed(), "euler feasibility");
    feasible
}

fn odd_degree_count<N: NodeId>(graph: &Graph<N>) -> usize {
    graph
        .node_ids()
        .filter(|node| graph.out_degree(node) % 2 == 1)
        .count()
}

/// Checks that every node with an edge is reachable from the first such node
/// when arcs are followed in both directions.
fn positive_degree_nodes_connected<N: NodeId>(graph: &Graph<N>) -> bool {
    let Some(start) = graph.node_ids().find(|node| graph.out_degree(node) > 0) else {
        return true;
    };

    let mut neighbors: BTreeMap<&N, Vec<&N>> = BTreeMap::new();
    for (source, target) in graph.arcs() {
        neighbors.entry(source).or_default().push(target);
        neighbors.entry(target).or_default().push(source);
    }

    let reached: HashSet<&N> = dfs_reach(start, |node: &&N| {
        neighbors.get(node).cloned().unwrap_or_default()
    })
    .collect();

    graph
        .node_ids()
        .filter(|node| graph.out_degree(node) > 0)
        .all(|node| reached.contains(node))
}

/// Counts nodes with an in/out surplus of exactly one in each direction.
fn degrees_balanced<N: NodeId>(graph: &Graph<N>) -> bool {
    let in_degrees = graph.in_degrees();
    let mut surplus_in = 0;
    let mut surplus_out = 0;
    for node in graph.node_ids() {
        let in_degree = in_degrees.get(node).copied().unwrap_or(0);
        let out_degree = graph.out_degree(node);
        if in_degree == out_degree + 1 {
            surplus_in += 1;
        } else if out_degree == in_degree + 1 {
            surplus_out += 1;
        }
    }
    surplus_in <= 1 && surplus_out <= 1
}
