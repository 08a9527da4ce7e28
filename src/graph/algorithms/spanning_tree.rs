//! Minimum spanning trees: Prim and Kruskal.
//!
//! Both require an undirected graph. On a disconnected graph both return a
//! minimum spanning forest.

use super::{reject_negative_edges, require_undirected};
use crate::collections::{DisjointSet, IndexedBinaryHeap};
use crate::error::Result;
use crate::graph::cost::{Cost, Distance};
use crate::graph::model::{Edge, EdgeId, Graph, NodeId};
use crate::graph::paths::SpanningTree;
use core::cmp::Ordering;

/// Prim's algorithm with the same queue discipline as Dijkstra.
///
/// The key of a queued node is the cheapest known edge connecting it to the
/// tree, compared against the raw edge cost rather than an accumulated distance.
/// Growth starts at node 0 and restarts from the lowest unvisited node until
/// every component is spanned.
///
/// # Errors
/// - [`GraphError::RequiresUndirected`](crate::GraphError::RequiresUndirected) on directed graphs.
/// - [`GraphError::NegativeEdgeCost`](crate::GraphError::NegativeEdgeCost) if any cost is negative.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn prim<C: Cost, N>(graph: &Graph<C, N>) -> Result<SpanningTree<C>> {
    require_undirected(graph, "prim")?;
    reject_negative_edges(graph, "prim")?;

    let node_count = graph.node_count();
    let mut best: Vec<Distance<C>> = vec![Distance::Unreachable; node_count];
    let mut via: Vec<Option<EdgeId>> = vec![None; node_count];
    let mut finalized = vec![false; node_count];
    let mut queue = IndexedBinaryHeap::with_capacity(node_count);
    let mut tree = SpanningTree {
        cost: C::zero(),
        edges: Vec::with_capacity(node_count.saturating_sub(1)),
    };

    for root in graph.node_ids() {
        if finalized[root.index()] {
            continue;
        }
        best[root.index()] = Distance::Finite(C::zero());
        queue.push(root, C::zero())?;

        while !queue.is_empty() {
            let (u, _) = queue.pop()?;
            finalized[u.index()] = true;
            if let Some(edge) = via[u.index()].and_then(|id| graph.edge(id)) {
                tree.cost = tree.cost + edge.cost;
                tree.edges.push(*edge);
            }

            for neighbour in graph.neighbours(u) {
                let v = neighbour.node;
                if finalized[v.index()] || Distance::Finite(neighbour.cost) >= best[v.index()] {
                    continue;
                }
                best[v.index()] = Distance::Finite(neighbour.cost);
                via[v.index()] = Some(neighbour.edge);
                if queue.contains(&v) {
                    queue.decrease_key(&v, neighbour.cost)?;
                } else {
                    queue.push(v, neighbour.cost)?;
                }
            }
        }
    }

    Ok(tree)
}

/// Kruskal's algorithm over a [`DisjointSet`] of nodes.
///
/// Edges are scanned once in ascending cost order (ties keep insertion order);
/// an edge is taken iff its endpoints are still in different components.
///
/// # Errors
/// [`GraphError::RequiresUndirected`](crate::GraphError::RequiresUndirected) on directed graphs.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn kruskal<C: Cost, N>(graph: &Graph<C, N>) -> Result<SpanningTree<C>> {
    require_undirected(graph, "kruskal")?;

    let mut order: Vec<&Edge<C>> = graph.edges().iter().collect();
    // `sort_by` is stable, so equal costs keep their insertion order.
    order.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

    let mut components: DisjointSet<NodeId> = graph.node_ids().collect();
    let target_edges = graph.node_count().saturating_sub(1);
    let mut tree = SpanningTree {
        cost: C::zero(),
        edges: Vec::with_capacity(target_edges),
    };

    for edge in order {
        if tree.edges.len() == target_edges {
            break;
        }
        if components.same_set(&edge.source, &edge.target)? {
            continue;
        }
        components.union(&edge.source, &edge.target)?;
        tree.cost = tree.cost + edge.cost;
        tree.edges.push(*edge);
    }

    tracing::debug!(
        components = components.component_count(),
        selected = tree.edges.len(),
        "kruskal finished"
    );
    Ok(tree)
}
