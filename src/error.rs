//! Error taxonomy shared by the collections and the graph algorithms.
//!
//! Errors fall into three groups:
//! - input errors (`MalformedGraph`, `NodeOutOfRange`, `NonFiniteCost`) raised while a graph
//!   is built,
//! - domain preconditions (`NegativeCycle`, `NegativeEdgeCost`, `RequiresUndirected`) raised by an
//!   algorithm that cannot produce a correct answer for the given graph,
//! - contract violations inside the core (`EmptyQueue`, `ElementNotFound`, `DuplicateElement`,
//!   `UnknownElement`). These indicate a bug in the caller's queue or union-find usage.
//!
//! Nothing is retried internally.

use crate::graph::NodeId;
use thiserror::Error;

/// Errors produced by `heapgraph`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The textual graph description could not be parsed.
    #[error("malformed graph at line {line}: {reason}")]
    MalformedGraph {
        /// One-based line number of the offending input line (0 when the whole input is at fault).
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A node id does not belong to the graph.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending id.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// An edge cost was NaN or infinite.
    #[error("edge {from} -> {to} has a non-finite cost")]
    NonFiniteCost {
        /// Tail of the edge.
        from: NodeId,
        /// Head of the edge.
        to: NodeId,
    },

    /// A cycle of negative total cost is reachable, so shortest paths are undefined.
    #[error("negative-weight cycle detected")]
    NegativeCycle,

    /// The algorithm requires non-negative edge costs.
    #[error("{algorithm} requires non-negative costs, edge {from} -> {to} is negative")]
    NegativeEdgeCost {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
        /// Tail of the edge.
        from: NodeId,
        /// Head of the edge.
        to: NodeId,
    },

    /// The algorithm is only defined on undirected graphs.
    #[error("{algorithm} requires an undirected graph")]
    RequiresUndirected {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
    },

    /// `pop` or `peek_min` on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// A priority queue operation referred to an element that is not queued.
    #[error("element is not present in the priority queue")]
    ElementNotFound,

    /// An element was pushed while already queued.
    #[error("element is already present in the priority queue")]
    DuplicateElement,

    /// A disjoint-set operation referred to an element that was never added.
    #[error("element was never added to the disjoint set")]
    UnknownElement,
}

impl GraphError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedGraph {
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
