//! The caller-side model of an interactive editing session.
//!
//! A [`Workbench`] keeps the numbered nodes and the edge list the user has
//! drawn.  Each [`Workbench::run`] builds a fresh [`Graph`] from the edges, so
//! the destructive Euler construction never touches the user's edges.  Nodes
//! without edges exist only on the workbench; they never take part in a run.
use std::{
    collections::BTreeSet,
    time::{Duration, Instant},
};

use crate::{
    algorithm::Algorithm,
    directedness::Directedness,
    error::{GraphError, RunError},
    graph::{EdgeSpec, Graph},
    trace::Trace,
    tracing_support::{debug_event, info_span},
};

/// Numbered nodes plus an edge list, edited incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workbench {
    nodes: BTreeSet<u32>,
    edges: Vec<EdgeSpec<u32>>,
    directedness: Directedness,
}

impl Workbench {
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            ..Self::default()
        }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Switches the mode new edges are drawn in.  Existing edges are dropped
    /// when the mode actually changes.
    pub fn set_directedness(&mut self, directedness: Directedness) {
        if self.directedness != directedness {
            self.edges.clear();
            self.directedness = directedness;
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.iter().copied()
    }

    pub fn edges(&self) -> &[EdgeSpec<u32>] {
        &self.edges
    }

    /// Adds a node labeled with the smallest positive number not in use.
    pub fn add_node(&mut self) -> u32 {
        let label = (1..)
            .zip(self.nodes.iter())
            .find(|(expected, used)| *expected != **used)
            .map_or(self.nodes.len() as u32 + 1, |(expected, _)| expected);
        self.nodes.insert(label);
        label
    }

    /// Removes a node and every edge touching it.  Returns whether the node
    /// existed.
    pub fn remove_node(&mut self, node: u32) -> bool {
        if !self.nodes.remove(&node) {
            return false;
        }
        self.edges.retain(|edge| !edge.touches(&node));
        true
    }

    /// Joins `a` and `b` with an edge in the current mode.
    ///
    /// Returns `Ok(false)` without changing anything for self-loops and for
    /// pairs that are already joined in either orientation.
    pub fn add_edge(&mut self, a: u32, b: u32) -> Result<bool, GraphError<u32>> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b || self.edges.iter().any(|edge| edge.joins(&a, &b)) {
            return Ok(false);
        }
        self.edges.push(EdgeSpec::new(a, b, self.directedness));
        Ok(true)
    }

    /// Removes the edge joining `a` and `b`, in either orientation.
    pub fn remove_edge(&mut self, a: u32, b: u32) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.joins(&a, &b));
        self.edges.len() != before
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    fn check_node(&self, node: u32) -> Result<(), GraphError<u32>> {
        if self.nodes.contains(&node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node))
        }
    }

    /// Builds a fresh graph from the edge list.  Its nodes are the edge
    /// endpoints; isolated workbench nodes are left out.
    pub fn graph(&self) -> Graph<u32> {
        Graph::from_edges(self.directedness, self.edges.iter().cloned())
    }

    /// Runs `algorithm` on a fresh graph and times it.
    pub fn run(&self, algorithm: Algorithm) -> Result<Run, RunError> {
        let _span = info_span!("workbench_run").entered();
        let mut graph = self.graph();
        let started = Instant::now();
        let trace = match algorithm {
            Algorithm::EulerPath => {
                if !graph.is_euler_path_feasible() {
                    return Err(RunError::NoSolution(algorithm));
                }
                graph.build_euler_trace()
            }
            Algorithm::HamiltonianCycle => graph.build_hamiltonian_cycle_trace(),
            Algorithm::HamiltonianPath => graph.build_hamiltonian_path_trace(),
        };
        let elapsed = started.elapsed();
        if !trace.is_solved() {
            return Err(RunError::NoSolution(algorithm));
        }
        debug_event!(%algorithm, snapshots = trace.len(), ?elapsed, "run finished");
        Ok(Run {
            algorithm,
            trace,
            elapsed,
        })
    }
}

/// A successful algorithm run.
#[derive(Clone, Debug)]
pub struct Run {
    algorithm: Algorithm,
    trace: Trace<u32>,
    elapsed: Duration,
}

impl Run {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn trace(&self) -> &Trace<u32> {
        &self.trace
    }

    pub fn into_trace(self) -> Trace<u32> {
        self.trace
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The final `confirmed` sequence.
    pub fn solution(&self) -> &[u32] {
        self.trace.solution()
    }

    /// A one-line description such as `"Euler path: 1 2 3 1"`.
    pub fn summary(&self) -> String {
        let nodes: Vec<String> = self.solution().iter().map(u32::to_string).collect();
        format!("{}: {}", self.algorithm, nodes.join(" "))
    }
}
