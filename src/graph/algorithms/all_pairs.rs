//! All-pairs shortest paths and reachability.
//!
//! Johnson's algorithm augments the graph with a synthetic source addressed by the
//! explicit index `node_count`, so every original node keeps its id throughout and
//! no node matching between the augmented and original graphs is needed.

use super::shortest_path::{bellman_ford, dijkstra};
use crate::collections::Matrix;
use crate::error::{GraphError, Result};
use crate::graph::cost::{Cost, Distance};
use crate::graph::model::{Graph, GraphKind, NodeId};
use crate::graph::paths::{AllPairs, PathEntry, ShortestPaths};

/// Johnson's all-pairs shortest paths.
///
/// 1. Add a synthetic node with zero-cost arcs to every node.
/// 2. Bellman-Ford from it yields a potential `h(v)` per node.
/// 3. Reweight each arc to `c + h(u) - h(v)`, which is non-negative.
/// 4. Run Dijkstra from every original node on the reweighted graph.
/// 5. Map distances back with `d(u, v) = d'(u, v) - h(u) + h(v)`.
///
/// Negative edges are fine; negative cycles are not.
///
/// # Errors
/// [`GraphError::NegativeCycle`] if the graph contains a negative cycle.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn johnson<C: Cost, N>(graph: &Graph<C, N>) -> Result<AllPairs<C>> {
    let node_count = graph.node_count();
    let synthetic = NodeId::new(node_count);

    let mut augmented: Graph<C> = Graph::with_nodes(GraphKind::directed(), node_count + 1);
    for (u, v, cost) in graph.arcs() {
        augmented.add_edge(u, v, cost)?;
    }
    for v in graph.node_ids() {
        augmented.add_edge(synthetic, v, C::zero())?;
    }

    let potentials = bellman_ford(&augmented, synthetic)?;
    // Every original node is one arc away from the synthetic source.
    let h: Vec<C> = graph
        .node_ids()
        .map(|v| potentials.distance(v).finite().unwrap_or_else(C::zero))
        .collect();

    let mut reweighted: Graph<C> = Graph::with_nodes(GraphKind::directed(), node_count);
    for (u, v, cost) in graph.arcs() {
        let adjusted = cost + h[u.index()] - h[v.index()];
        // Exact for integers; only float rounding can dip below zero.
        let adjusted = if adjusted < C::zero() { C::zero() } else { adjusted };
        reweighted.add_edge(u, v, adjusted)?;
    }

    let mut rows = Vec::with_capacity(node_count);
    for u in graph.node_ids() {
        let reduced = dijkstra(&reweighted, u)?;
        let entries = reduced
            .iter()
            .map(|(v, entry)| PathEntry {
                distance: entry.distance.map(|d| d - h[u.index()] + h[v.index()]),
                predecessor: entry.predecessor,
            })
            .collect();
        rows.push(ShortestPaths::from_entries(u, entries));
    }

    Ok(AllPairs::new(rows))
}

/// Floyd-Warshall over costs (min/+ semiring).
///
/// `m[(i, j)]` is the shortest distance from `i` to `j`; the diagonal starts at zero
/// and parallel edges keep their cheapest cost.
///
/// # Errors
/// [`GraphError::NegativeCycle`] as soon as any diagonal entry turns negative.
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn floyd_warshall<C: Cost, N>(graph: &Graph<C, N>) -> Result<Matrix<Distance<C>>> {
    let n = graph.node_count();
    let mut dist = Matrix::square(n, Distance::Unreachable);
    for i in 0..n {
        dist[(i, i)] = Distance::Finite(C::zero());
    }
    for (u, v, cost) in graph.arcs() {
        let cell = &mut dist[(u.index(), v.index())];
        if Distance::Finite(cost) < *cell {
            *cell = Distance::Finite(cost);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Distance::Finite(d_ik) = dist[(i, k)] else {
                continue;
            };
            for j in 0..n {
                let through_k = dist[(k, j)] + d_ik;
                if through_k < dist[(i, j)] {
                    dist[(i, j)] = through_k;
                }
            }
        }

        if (0..n).any(|i| dist[(i, i)] < Distance::Finite(C::zero())) {
            tracing::warn!(intermediate = k, "negative-weight cycle detected");
            return Err(GraphError::NegativeCycle);
        }
    }

    Ok(dist)
}

/// Floyd-Warshall over booleans: `m[(i, j)]` iff `j` is reachable from `i` by a
/// non-empty path.
///
/// The diagonal is `true` only for nodes that lie on a cycle (or carry a self-loop).
#[tracing::instrument(
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn transitive_closure<C: Cost, N>(graph: &Graph<C, N>) -> Matrix<bool> {
    let n = graph.node_count();
    let mut reach = graph.adjacency_matrix();

    for k in 0..n {
        for i in 0..n {
            if !reach[(i, k)] {
                continue;
            }
            for j in 0..n {
                if reach[(k, j)] {
                    reach[(i, j)] = true;
                }
            }
        }
    }

    reach
}
