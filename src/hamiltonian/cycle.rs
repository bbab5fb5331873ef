use bitvec::prelude::*;

use super::IndexedGraph;
use crate::{
    graph::{Graph, NodeId},
    snapshot::Snapshot,
    trace::{Trace, TraceRecorder},
    tracing_support::{debug_event, info_span},
};

/// Backtracking search for the first Hamiltonian cycle through the smallest
/// node, trying neighbors in canonical order.
///
/// The search keeps an explicit stack of frames instead of recursing, so its
/// depth is bounded by the node count and every push or pop of the path is a
/// point where a snapshot is recorded:
///
/// - entering a node appends it to the path (`confirmed`) and records;
/// - trying an edge marks it active and records;
/// - abandoning a node removes it from the path and records.
///
/// On success one more snapshot closes the cycle: the edge back to the start
/// is confirmed and the start node is repeated at the end of `confirmed`.  On
/// failure the last snapshot has an empty `confirmed` sequence.
///
/// The worst case explores every permutation of the nodes; keep instances
/// small.
pub struct HamiltonianCycleSearch<'g, N: NodeId> {
    graph: IndexedGraph<'g, N>,
    path: Vec<usize>,
    visited: BitVec,
    frames: Vec<Frame>,
    state: Snapshot<N>,
    recorder: TraceRecorder<N>,
}

/// A node on the search stack and the position of the next neighbor to try.
struct Frame {
    node: usize,
    cursor: usize,
}

impl Frame {
    fn new(node: usize) -> Self {
        Self { node, cursor: 0 }
    }
}

enum Step {
    /// The node was added and its neighbors remain to be tried.
    Expanding,
    /// The node completed the path and closes the cycle.
    Closed,
    /// The node completed the path but has no arc back to the start.
    DeadEnd,
}

impl<'g, N: NodeId> HamiltonianCycleSearch<'g, N> {
    pub fn new(graph: &'g Graph<N>) -> Self {
        let graph = IndexedGraph::new(graph);
        let num_nodes = graph.len();
        Self {
            graph,
            path: Vec::with_capacity(num_nodes),
            visited: bitvec![0; num_nodes],
            frames: Vec::with_capacity(num_nodes),
            state: Snapshot::default(),
            recorder: TraceRecorder::new(),
        }
    }

    pub fn run(mut self) -> Trace<N> {
        let _span = info_span!("hamiltonian_cycle").entered();
        if self.graph.is_empty() {
            return self.recorder.finish();
        }

        if self.search(0) {
            self.close_cycle();
            debug_event!(cycle = ?self.state.confirmed, "hamiltonian cycle found");
        } else {
            debug_event!(nodes = self.graph.len(), "no hamiltonian cycle");
        }
        self.recorder.finish()
    }

    fn search(&mut self, start: usize) -> bool {
        match self.enter(start) {
            Step::Closed => return true,
            Step::DeadEnd => return false,
            Step::Expanding => self.frames.push(Frame::new(start)),
        }

        while let Some(frame) = self.frames.last_mut() {
            let node = frame.node;
            let next = self.graph.successors(node)[frame.cursor..]
                .iter()
                .position(|&target| !self.visited[target]);

            match next {
                Some(offset) => {
                    let target = self.graph.successors(node)[frame.cursor + offset];
                    frame.cursor += offset + 1;
                    self.mark(node, target);
                    match self.enter(target) {
                        Step::Closed => return true,
                        Step::Expanding => self.frames.push(Frame::new(target)),
                        Step::DeadEnd => self.unmark(node, target),
                    }
                }
                None => {
                    self.frames.pop();
                    self.leave(node);
                    if let Some(parent) = self.frames.last() {
                        let parent = parent.node;
                        self.unmark(parent, node);
                    }
                }
            }
        }
        false
    }

    fn enter(&mut self, node: usize) -> Step {
        if let Some(&last) = self.path.last() {
            self.state.confirmed_edges.insert(self.graph.edge(last, node));
        }
        self.path.push(node);
        self.state.confirmed.push(self.graph.node(node));
        self.state.frontier = [self.graph.node(node)].into();
        self.record();

        if self.path.len() == self.graph.len() {
            if self.graph.has_arc(node, self.path[0]) {
                return Step::Closed;
            }
            self.retract();
            self.record();
            return Step::DeadEnd;
        }
        self.visited.set(node, true);
        Step::Expanding
    }

    fn leave(&mut self, node: usize) {
        self.visited.set(node, false);
        self.retract();
        self.record();
    }

    /// Removes the last node from the path.
    fn retract(&mut self) {
        let Some(node) = self.path.pop() else {
            return;
        };
        self.state.confirmed.pop();
        if let Some(&last) = self.path.last() {
            self.state.confirmed_edges.remove(&self.graph.edge(last, node));
        }
        self.state.frontier = self
            .path
            .last()
            .map(|&n| self.graph.node(n))
            .into_iter()
            .collect();
    }

    fn mark(&mut self, from: usize, into: usize) {
        self.state.active.insert(self.graph.node(into));
        self.state.active_edges.insert(self.graph.edge(from, into));
        self.record();
    }

    fn unmark(&mut self, from: usize, into: usize) {
        self.state.active.remove(&self.graph.node(into));
        self.state.active_edges.remove(&self.graph.edge(from, into));
    }

    fn close_cycle(&mut self) {
        if let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) {
            self.state.confirmed_edges.insert(self.graph.edge(last, first));
            self.state.confirmed.push(self.graph.node(first));
            self.record();
        }
    }

    fn record(&mut self) {
        self.recorder.record(self.state.clone());
    }
}
