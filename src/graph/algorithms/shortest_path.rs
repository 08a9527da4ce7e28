//! Single-source shortest paths: Dijkstra and Bellman-Ford.

use super::reject_negative_edges;
use crate::collections::IndexedBinaryHeap;
use crate::error::{GraphError, Result};
use crate::graph::cost::{Cost, Distance};
use crate::graph::model::{Graph, NodeId};
use crate::graph::paths::ShortestPaths;

/// Dijkstra's algorithm driven by an [`IndexedBinaryHeap`] keyed by tentative distance.
///
/// A node is pushed the first time it is discovered and re-prioritized with
/// `decrease_key` on every later improvement; once popped it is finalized.
///
/// # Errors
/// - [`GraphError::NodeOutOfRange`] for an unknown source.
/// - [`GraphError::NegativeEdgeCost`] if any edge cost is negative.
/// - [`GraphError::NegativeCycle`] if a finalized node's distance could still improve.
///   With negative edges rejected up front this cannot happen: settled distances
///   are popped in non-decreasing order and a non-negative edge never lowers one.
///   The check stays as a guard on that ordering rather than silently
///   rewriting a settled node.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn dijkstra<C: Cost, N>(graph: &Graph<C, N>, source: NodeId) -> Result<ShortestPaths<C>> {
    graph.check_node(source)?;
    reject_negative_edges(graph, "dijkstra")?;

    let node_count = graph.node_count();
    let mut paths = ShortestPaths::new(source, node_count, C::zero());
    let mut finalized = vec![false; node_count];
    let mut queue = IndexedBinaryHeap::with_capacity(node_count);
    queue.push(source, C::zero())?;

    while !queue.is_empty() {
        let (u, dist_u) = queue.pop()?;
        finalized[u.index()] = true;

        for neighbour in graph.neighbours(u) {
            let v = neighbour.node;
            let candidate = dist_u + neighbour.cost;
            if Distance::Finite(candidate) >= paths.distance(v) {
                continue;
            }
            debug_assert!(!finalized[v.index()], "settled distance of {v} improved");
            if finalized[v.index()] {
                tracing::warn!(node = %v, "finalized distance improved");
                return Err(GraphError::NegativeCycle);
            }

            paths.set(v, candidate, u);
            if queue.contains(&v) {
                queue.decrease_key(&v, candidate)?;
            } else {
                queue.push(v, candidate)?;
            }
        }
    }

    Ok(paths)
}

/// Bellman-Ford: `node_count` rounds of relaxation over every arc, then one
/// detection scan.
///
/// Undirected edges are relaxed in both directions, so a negative undirected
/// edge is itself a negative cycle.
///
/// # Errors
/// - [`GraphError::NodeOutOfRange`] for an unknown source.
/// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from `source`.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn bellman_ford<C: Cost, N>(graph: &Graph<C, N>, source: NodeId) -> Result<ShortestPaths<C>> {
    graph.check_node(source)?;

    let node_count = graph.node_count();
    let arcs: Vec<_> = graph.arcs().collect();
    let mut paths = ShortestPaths::new(source, node_count, C::zero());

    for _ in 0..node_count {
        for &(u, v, cost) in &arcs {
            if let Distance::Finite(dist_u) = paths.distance(u) {
                let candidate = dist_u + cost;
                if Distance::Finite(candidate) < paths.distance(v) {
                    paths.set(v, candidate, u);
                }
            }
        }
    }

    let still_relaxable = arcs.iter().any(|&(u, v, cost)| {
        (paths.distance(u) + cost) < paths.distance(v)
    });
    if still_relaxable {
        tracing::warn!(source = %source, "negative-weight cycle reachable from source");
        return Err(GraphError::NegativeCycle);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    fn id(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn sample() -> Graph<i64> {
        Graph::from_edges(
            GraphKind::directed(),
            4,
            [(0, 1, 1), (1, 2, 2), (0, 2, 5), (2, 3, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_dijkstra_sample() {
        let paths = dijkstra(&sample(), id(0)).unwrap();
        let distances: Vec<_> = paths.distances();
        assert_eq!(
            distances,
            vec![
                Distance::Finite(0),
                Distance::Finite(1),
                Distance::Finite(3),
                Distance::Finite(4)
            ]
        );
        assert_eq!(paths.predecessor(id(1)), Some(id(0)));
        assert_eq!(paths.predecessor(id(2)), Some(id(1)));
        assert_eq!(paths.predecessor(id(3)), Some(id(2)));
        assert_eq!(paths.path_to(id(3)), Some(vec![id(0), id(1), id(2), id(3)]));
    }

    #[test]
    fn test_dijkstra_uses_decrease_key() {
        // 3 is first reached at cost 10, then improved twice while still queued.
        let g: Graph<i32> = Graph::from_edges(
            GraphKind::directed(),
            4,
            [(0, 3, 10), (0, 1, 1), (0, 2, 2), (1, 3, 5), (2, 3, 1)],
        )
        .unwrap();
        let paths = dijkstra(&g, id(0)).unwrap();
        assert_eq!(paths.distance(id(3)), Distance::Finite(3));
        assert_eq!(paths.predecessor(id(3)), Some(id(2)));
    }

    #[test]
    fn test_dijkstra_zero_cost_edges_back_to_settled_nodes() {
        // Every back edge reaches a settled node at an equal distance, never a lower one.
        let g: Graph<i32> = Graph::from_edges(
            GraphKind::directed(),
            4,
            [(0, 1, 0), (1, 0, 0), (1, 2, 3), (2, 1, 0), (2, 2, 0), (2, 3, 0), (3, 0, 0)],
        )
        .unwrap();
        let paths = dijkstra(&g, id(0)).unwrap();
        assert_eq!(
            paths.distances(),
            vec![
                Distance::Finite(0),
                Distance::Finite(0),
                Distance::Finite(3),
                Distance::Finite(3)
            ]
        );
        assert_eq!(paths.predecessor(id(0)), None);
        assert_eq!(paths.path_to(id(3)), Some(vec![id(0), id(1), id(2), id(3)]));

        let undirected: Graph<f64> = Graph::from_edges(
            GraphKind::undirected(),
            3,
            [(0, 1, 0.0), (1, 2, 0.1), (0, 2, 0.1)],
        )
        .unwrap();
        let paths = dijkstra(&undirected, id(2)).unwrap();
        assert_eq!(paths.distance(id(0)), Distance::Finite(0.1));
        assert_eq!(paths.distance(id(1)), Distance::Finite(0.1));
    }

    #[test]
    fn test_dijkstra_rejects_negative_edges() {
        let g: Graph<i32> =
            Graph::from_edges(GraphKind::directed(), 2, [(0, 1, -1)]).unwrap();
        assert_eq!(
            dijkstra(&g, id(0)),
            Err(GraphError::NegativeEdgeCost {
                algorithm: "dijkstra",
                from: id(0),
                to: id(1)
            })
        );
    }

    #[test]
    fn test_dijkstra_unreachable_and_float_costs() {
        let g: Graph<f64> =
            Graph::from_edges(GraphKind::undirected(), 4, [(0, 1, 0.5), (1, 2, 0.25)]).unwrap();
        let paths = dijkstra(&g, id(2)).unwrap();
        assert_eq!(paths.distance(id(0)), Distance::Finite(0.75));
        assert_eq!(paths.distance(id(3)), Distance::Unreachable);
        assert_eq!(paths.predecessor(id(3)), None);
    }

    #[test]
    fn test_bellman_ford_matches_dijkstra_on_sample() {
        let g = sample();
        assert_eq!(
            bellman_ford(&g, id(0)).unwrap().distances(),
            dijkstra(&g, id(0)).unwrap().distances()
        );
    }

    #[test]
    fn test_bellman_ford_negative_edges() {
        let g: Graph<i32> = Graph::from_edges(
            GraphKind::directed(),
            4,
            [(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)],
        )
        .unwrap();
        let paths = bellman_ford(&g, id(0)).unwrap();
        assert_eq!(paths.distance(id(1)), Distance::Finite(2));
        assert_eq!(paths.predecessor(id(1)), Some(id(2)));
        assert_eq!(paths.distance(id(3)), Distance::Finite(4));
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        let g: Graph<i32> =
            Graph::from_edges(GraphKind::directed(), 2, [(0, 1, -5), (1, 0, 1)]).unwrap();
        assert_eq!(bellman_ford(&g, id(0)), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn test_bellman_ford_ignores_unreachable_cycle() {
        let g: Graph<i32> = Graph::from_edges(
            GraphKind::directed(),
            4,
            [(0, 1, 1), (2, 3, -5), (3, 2, 1)],
        )
        .unwrap();
        let paths = bellman_ford(&g, id(0)).unwrap();
        assert_eq!(paths.distance(id(1)), Distance::Finite(1));
        assert_eq!(paths.distance(id(2)), Distance::Unreachable);
    }

    #[test]
    fn test_bellman_ford_negative_undirected_edge_is_a_cycle() {
        let g: Graph<i32> =
            Graph::from_edges(GraphKind::undirected(), 2, [(0, 1, -1)]).unwrap();
        assert_eq!(bellman_ford(&g, id(0)), Err(GraphError::NegativeCycle));
    }
}
