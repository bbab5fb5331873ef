use std::collections::VecDeque;

use crate::{
    graph::{Graph, NodeId},
    snapshot::Snapshot,
    trace::{Trace, TraceRecorder},
    tracing_support::{debug_event, info_span},
};

/// Builds an Euler path or circuit with Hierholzer's algorithm, recording a
/// snapshot after every consumed edge and every completed node.
///
/// The graph is consumed: every traversed arc is removed (together with its
/// mirror when the graph is undirected), so on return the graph has no edges.
///
/// A graph without edges yields a single snapshot that confirms every known
/// node and no edges.
pub fn build_trace<N: NodeId>(graph: &mut Graph<N>) -> Trace<N> {
    let _span = info_span!("euler_construction").entered();

    let Some(start) = start_node(graph) else {
        debug_event!(nodes = graph.num_nodes(), "no edges to traverse");
        return Trace::single(Snapshot {
            confirmed: graph.node_ids().cloned().collect(),
            ..Snapshot::default()
        });
    };
    debug_event!(?start, "euler construction start");

    let mut recorder = TraceRecorder::new();
    let mut state = Snapshot::default();
    let mut work = VecDeque::from([start]);

    while let Some(current) = work.front().cloned() {
        state.frontier.insert(current.clone());
        if let Some(next) = graph.first_successor(&current).cloned() {
            consume_edge(graph, &current, &next);
            state.active.insert(next.clone());
            state.active_edges.insert((current, next.clone()));
            work.push_front(next);
        } else {
            work.pop_front();
            // Nodes complete in reverse walk order.
            if let Some(following) = state.confirmed.first() {
                state
                    .confirmed_edges
                    .insert((current.clone(), following.clone()));
            }
            state.confirmed.insert(0, current);
        }
        recorder.record_if_changed(state.clone());
    }

    debug_event!(
        walk_len = state.confirmed.len(),
        snapshots = recorder.len(),
        "euler construction done"
    );
    recorder.finish()
}

/// Picks the node the walk must start from: an odd-degree node for undirected
/// graphs, the node with one more outgoing than incoming arc for directed
/// ones, and otherwise the first node that has an outgoing arc.
fn start_node<N: NodeId>(graph: &Graph<N>) -> Option<N> {
    let unbalanced = if graph.is_directed() {
        let in_degrees = graph.in_degrees();
        graph.node_ids().find(|node| {
            graph.out_degree(node) == in_degrees.get(node).copied().unwrap_or(0) + 1
        })
    } else {
        graph
            .node_ids()
            .find(|node| graph.out_degree(node) % 2 == 1)
    };
    unbalanced
        .or_else(|| graph.node_ids().find(|node| graph.out_degree(node) > 0))
        .cloned()
}

fn consume_edge<N: NodeId>(graph: &mut Graph<N>, from: &N, into: &N) {
    if graph.is_directed() {
        graph.remove_arc(from, into);
    } else {
        graph.remove_edge(from, into);
    }
}
