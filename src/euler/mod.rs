//! Euler path and circuit analysis.
//!
//! [`is_feasible`] decides from degrees (and, for undirected graphs,
//! connectivity) whether a walk using every edge exactly once exists;
//! [`build_trace`] then constructs one with Hierholzer's edge-consuming
//! traversal, recording a snapshot after every step.
mod feasibility;
mod hierholzer;

pub use feasibility::is_feasible;
pub use hierholzer::build_trace;
