use std::fmt::Debug;

use crate::algorithm::Algorithm;

/// Errors raised while assembling a graph from caller-supplied parts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<N: Debug> {
    /// An edge referenced a node that was never registered.
    #[error("unknown node: {0:?}")]
    UnknownNode(N),
}

/// Errors raised by [`Workbench::run`](crate::workbench::Workbench::run).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The graph admits no solution for the algorithm.
    #[error("{0} does not exist")]
    NoSolution(Algorithm),
}
