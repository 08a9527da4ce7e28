//! Graph algorithms over [`Graph`].
//!
//! Every algorithm borrows the graph immutably and keeps its scratch state
//! (distances, predecessors, finalized flags, queues, union-find forests) local to
//! the call, so runs never interfere with each other.
//!
//! - `traversal`: breadth-first search
//! - `shortest_path`: Dijkstra and Bellman-Ford
//! - `spanning_tree`: Prim and Kruskal
//! - `all_pairs`: Johnson, Floyd-Warshall and transitive closure

pub mod all_pairs;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use all_pairs::{floyd_warshall, johnson, transitive_closure};
pub use shortest_path::{bellman_ford, dijkstra};
pub use spanning_tree::{kruskal, prim};
pub use traversal::bfs;

use crate::error::{GraphError, Result};
use crate::graph::cost::Cost;
use crate::graph::model::Graph;

/// Fails if any edge is negative; used by algorithms that assume non-negative costs.
fn reject_negative_edges<C: Cost, N>(graph: &Graph<C, N>, algorithm: &'static str) -> Result<()> {
    match graph.first_negative_edge() {
        Some(edge) => {
            tracing::warn!(
                algorithm,
                from = %edge.source,
                to = %edge.target,
                cost = %edge.cost,
                "negative edge cost rejected"
            );
            Err(GraphError::NegativeEdgeCost {
                algorithm,
                from: edge.source,
                to: edge.target,
            })
        }
        None => Ok(()),
    }
}

/// Fails on directed graphs; used by the spanning-tree algorithms.
fn require_undirected<C, N>(graph: &Graph<C, N>, algorithm: &'static str) -> Result<()> {
    if graph.is_directed() {
        tracing::warn!(algorithm, "spanning tree requested on a directed graph");
        return Err(GraphError::RequiresUndirected { algorithm });
    }
    Ok(())
}
