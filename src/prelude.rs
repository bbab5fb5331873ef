pub use crate::algorithm::Algorithm;
pub use crate::directedness::Directedness::{self, Directed, Undirected};
pub use crate::error::{GraphError, RunError};
pub use crate::graph::{EdgeSpec, Graph, NodeId};
pub use crate::snapshot::Snapshot;
pub use crate::trace::Trace;
pub use crate::workbench::{Run, Workbench};
