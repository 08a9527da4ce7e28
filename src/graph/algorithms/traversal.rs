//! Breadth-first search.

use crate::error::Result;
use crate::graph::cost::{Cost, Distance};
use crate::graph::model::{Graph, NodeId};
use crate::graph::paths::ShortestPaths;
use std::collections::VecDeque;

/// Unweighted shortest paths from `source`: every edge counts as one hop.
///
/// A node is discovered at most once, the first time it is seen while still
/// unreachable, so each node is enqueued at most once.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) for an unknown source.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn bfs<C: Cost, N>(graph: &Graph<C, N>, source: NodeId) -> Result<ShortestPaths<usize>> {
    graph.check_node(source)?;

    let mut paths = ShortestPaths::new(source, graph.node_count(), 0);
    let mut queue = VecDeque::new();
    queue.push_back((source, 0));

    while let Some((u, hops)) = queue.pop_front() {
        for neighbour in graph.neighbours(u) {
            let v = neighbour.node;
            if paths.distance(v) == Distance::Unreachable {
                paths.set(v, hops + 1, u);
                queue.push_back((v, hops + 1));
            }
        }
    }

    Ok(paths)
}
