//! Result records produced by the graph algorithms.
//!
//! Every algorithm run writes into one of these side tables instead of mutating
//! the graph, keyed by [`NodeId`] index.

use crate::collections::Matrix;
use crate::graph::cost::Distance;
use crate::graph::model::{Edge, NodeId};
use serde::{Deserialize, Serialize};

/// Distance and predecessor of one node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathEntry<D> {
    /// Best known distance from the source.
    pub distance: Distance<D>,
    /// Previous node on that path; `None` for the source and unreachable nodes.
    pub predecessor: Option<NodeId>,
}

/// Single-source result map: a [`PathEntry`] for every node of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths<D> {
    source: NodeId,
    entries: Vec<PathEntry<D>>,
}

impl<D: Copy> ShortestPaths<D> {
    /// All nodes unreachable except `source`, which sits at `zero`.
    pub(crate) fn new(source: NodeId, node_count: usize, zero: D) -> Self {
        let mut entries = vec![
            PathEntry {
                distance: Distance::Unreachable,
                predecessor: None,
            };
            node_count
        ];
        entries[source.index()].distance = Distance::Finite(zero);
        Self { source, entries }
    }

    pub(crate) fn from_entries(source: NodeId, entries: Vec<PathEntry<D>>) -> Self {
        Self { source, entries }
    }

    pub(crate) fn set(&mut self, node: NodeId, distance: D, predecessor: NodeId) {
        self.entries[node.index()] = PathEntry {
            distance: Distance::Finite(distance),
            predecessor: Some(predecessor),
        };
    }

    /// The node every distance is measured from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for a result over an empty graph.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distance to `node`; `Unreachable` for ids outside the graph.
    pub fn distance(&self, node: NodeId) -> Distance<D> {
        self.entries
            .get(node.index())
            .map_or(Distance::Unreachable, |e| e.distance)
    }

    /// Predecessor of `node` on its shortest path.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.entries.get(node.index()).and_then(|e| e.predecessor)
    }

    /// Full record for `node`.
    pub fn entry(&self, node: NodeId) -> Option<&PathEntry<D>> {
        self.entries.get(node.index())
    }

    /// Iterates over `(node, entry)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PathEntry<D>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (NodeId::new(i), e))
    }

    /// All distances in id order.
    pub fn distances(&self) -> Vec<Distance<D>> {
        self.entries.iter().map(|e| e.distance).collect()
    }

    /// Reconstructs the path `source, ..., node` by following predecessors.
    ///
    /// Returns `None` if `node` is unreachable or outside the graph.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.entry(node)?.distance.is_reachable() {
            return None;
        }
        let mut path = vec![node];
        let mut current = node;
        while let Some(prev) = self.predecessor(current) {
            // A predecessor chain never revisits a node; bail out on corrupted input.
            if path.len() > self.entries.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// A minimum spanning tree (or forest) and its total cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree<C> {
    /// Sum of the selected edge costs.
    pub cost: C,
    /// Selected edges in their stored orientation.
    pub edges: Vec<Edge<C>>,
}

/// All-pairs result: one [`ShortestPaths`] per source node, in id order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairs<C> {
    rows: Vec<ShortestPaths<C>>,
}

impl<C: Copy> AllPairs<C> {
    pub(crate) fn new(rows: Vec<ShortestPaths<C>>) -> Self {
        Self { rows }
    }

    /// Result map for paths starting at `source`.
    pub fn get(&self, source: NodeId) -> Option<&ShortestPaths<C>> {
        self.rows.get(source.index())
    }

    /// Distance from `source` to `target`.
    pub fn distance(&self, source: NodeId, target: NodeId) -> Distance<C> {
        self.get(source)
            .map_or(Distance::Unreachable, |row| row.distance(target))
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` for an empty graph.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(source, result map)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ShortestPaths<C>)> {
        self.rows.iter().map(|row| (row.source(), row))
    }

    /// Flattens the distances into an `n x n` matrix.
    pub fn distance_matrix(&self) -> Matrix<Distance<C>> {
        let n = self.rows.len();
        let data = self.rows.iter().flat_map(ShortestPaths::distances).collect();
        Matrix::from_vec(data, n, n)
    }
}
