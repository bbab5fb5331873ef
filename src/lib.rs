//! Step-by-step traces of classic graph path algorithms.
//!
//! A [`Graph`] can be searched for an Euler path or circuit, a Hamiltonian
//! cycle, or a Hamiltonian path.  Each search returns a [`Trace`]: an ordered
//! list of [`Snapshot`]s that a viewer can replay one step at a time.  The
//! last snapshot's `confirmed` sequence is the answer, and an empty one means
//! no solution exists.
//!
//! [`Workbench`] wraps a graph in the editing model of an interactive
//! session: numbered nodes, an edge list, and a directedness mode.
pub mod algorithm;
pub mod directedness;
pub mod error;
pub mod euler;
pub mod graph;
pub mod hamiltonian;
pub mod prelude;
pub mod snapshot;
pub mod trace;
pub mod tracing_support;
pub mod workbench;

#[cfg(test)]
mod test_support;

pub use crate::algorithm::{Algorithm, ParseAlgorithmError};
pub use crate::directedness::Directedness;
pub use crate::error::{GraphError, RunError};
pub use crate::graph::{EdgeSpec, Graph, NodeId};
pub use crate::hamiltonian::{
    BestPath, HamiltonianCycleSearch, HamiltonianPathSearch, PathSearchResult,
};
pub use crate::snapshot::{EdgeKey, Snapshot};
pub use crate::trace::{Trace, TraceRecorder};
pub use crate::workbench::{Run, Workbench};
