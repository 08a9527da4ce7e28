//! Arena-backed weighted graph.
//!
//! Nodes are addressed by a dense [`NodeId`] in insertion order; neighbour lists and
//! predecessors are stored as ids, never as references. Per-run algorithm state
//! (distances, predecessors, finalized flags) is kept out of the graph entirely, so
//! one `&Graph` can serve any number of algorithm runs.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_node` | \(O(1)\) amortized | Appends to internal vectors |
//! | `add_edge` | \(O(1)\) amortized | Parallel edges are kept |
//! | `neighbours` | \(O(1)\) | Returns a slice |
//! | `arcs` | \(O(m)\) | Undirected edges yield both directions |
//! | `adjacency_matrix` | \(O(n^2 + m)\) | Dense boolean matrix |

use crate::collections::Matrix;
use crate::error::{GraphError, Result};
use crate::graph::cost::Cost;
use core::fmt;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;

/// Stable node identity, dense in `[0, node_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stable edge identity, dense in `[0, edge_count)` in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Directedness and weightedness, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphKind {
    /// Edges are one-way when `true`.
    pub directed: bool,
    /// When `false` every inserted cost is replaced by one.
    pub weighted: bool,
}

impl GraphKind {
    /// A weighted directed graph.
    pub const fn directed() -> Self {
        Self {
            directed: true,
            weighted: true,
        }
    }

    /// A weighted undirected graph.
    pub const fn undirected() -> Self {
        Self {
            directed: false,
            weighted: true,
        }
    }

    /// The same kind with unit edge costs.
    pub const fn unweighted(self) -> Self {
        Self {
            weighted: false,
            ..self
        }
    }
}

/// A node and its optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<N> {
    /// Identity within the owning graph.
    pub id: NodeId,
    /// Opaque user payload.
    pub content: Option<N>,
}

/// An edge as inserted: `source -> target` (or `source -- target` when undirected).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<C> {
    /// Tail endpoint.
    pub source: NodeId,
    /// Head endpoint.
    pub target: NodeId,
    /// Finite cost.
    pub cost: C,
}

/// One adjacency entry of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<C> {
    /// The node on the far side.
    pub node: NodeId,
    /// Cost of the connecting edge.
    pub cost: C,
    /// The edge this entry materializes.
    pub edge: EdgeId,
}

/// A weighted graph owning its nodes, edges and adjacency lists.
#[derive(Debug, Clone, Serialize)]
pub struct Graph<C, N = ()> {
    kind: GraphKind,
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<C>>,
    #[serde(skip)]
    adjacency: Vec<Vec<Neighbour<C>>>,
}

/// Serialized form of a [`Graph`]; adjacency is derived, so it is not stored.
#[derive(Deserialize)]
#[serde(rename = "Graph")]
struct GraphData<C, N> {
    kind: GraphKind,
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<C>>,
}

impl<'de, C, N> Deserialize<'de> for Graph<C, N>
where
    C: Cost + Deserialize<'de>,
    N: Deserialize<'de>,
{
    /// Rebuilds adjacency by re-inserting every edge, so ranges and costs are
    /// validated exactly as in [`Graph::add_edge`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = GraphData::<C, N>::deserialize(deserializer)?;
        let mut graph = Self::new(data.kind);
        for (position, node) in data.nodes.into_iter().enumerate() {
            if node.id.index() != position {
                return Err(de::Error::custom(format_args!(
                    "node {} stored at position {position}",
                    node.id
                )));
            }
            graph.push_node(node.content);
        }
        for edge in data.edges {
            graph
                .add_edge(edge.source, edge.target, edge.cost)
                .map_err(de::Error::custom)?;
        }
        Ok(graph)
    }
}

impl<C: Cost, N> Graph<C, N> {
    /// Creates an empty graph.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph with `node_count` payload-less nodes and no edges.
    pub fn with_nodes(kind: GraphKind, node_count: usize) -> Self {
        let mut graph = Self::new(kind);
        graph.nodes.reserve(node_count);
        graph.adjacency.reserve(node_count);
        for _ in 0..node_count {
            graph.add_node();
        }
        graph
    }

    /// Like [`with_nodes`](Self::with_nodes), but fails instead of aborting when
    /// storage for `node_count` nodes cannot be allocated.
    pub(crate) fn try_with_nodes(
        kind: GraphKind,
        node_count: usize,
    ) -> Result<Self, TryReserveError> {
        let mut graph = Self::new(kind);
        graph.nodes.try_reserve_exact(node_count)?;
        graph.adjacency.try_reserve_exact(node_count)?;
        for _ in 0..node_count {
            graph.add_node();
        }
        Ok(graph)
    }

    /// Builds a graph from a node count and `(source, target, cost)` triples.
    ///
    /// # Errors
    /// Fails if an endpoint is out of range or a cost is not finite.
    pub fn from_edges<I>(kind: GraphKind, node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, C)>,
    {
        let mut graph = Self::with_nodes(kind, node_count);
        for (source, target, cost) in edges {
            graph.add_edge(NodeId(source), NodeId(target), cost)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed = kind.directed,
            "graph built"
        );
        Ok(graph)
    }

    /// Adds a node without payload and returns its id.
    pub fn add_node(&mut self) -> NodeId {
        self.push_node(None)
    }

    /// Adds a node carrying `content` and returns its id.
    pub fn add_node_with(&mut self, content: N) -> NodeId {
        self.push_node(Some(content))
    }

    fn push_node(&mut self, content: Option<N>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { id, content });
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds an edge and returns its id.
    ///
    /// In an unweighted graph `cost` is replaced by one. In an undirected graph the
    /// edge is listed once but appears in the adjacency of both endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for an unknown endpoint and
    /// [`GraphError::NonFiniteCost`] for NaN or infinite costs.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, cost: C) -> Result<EdgeId> {
        self.check_node(source)?;
        self.check_node(target)?;
        let cost = if self.kind.weighted { cost } else { C::one() };
        if !cost.is_finite() {
            return Err(GraphError::NonFiniteCost {
                from: source,
                to: target,
            });
        }

        let edge = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            cost,
        });
        self.adjacency[source.0].push(Neighbour {
            node: target,
            cost,
            edge,
        });
        if !self.kind.directed && source != target {
            self.adjacency[target.0].push(Neighbour {
                node: source,
                cost,
                edge,
            });
        }
        Ok(edge)
    }

    /// Returns every arc `(tail, head, cost)`; undirected edges yield both directions.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId, C)> + '_ {
        let undirected = !self.kind.directed;
        self.edges.iter().flat_map(move |e| {
            let reverse =
                (undirected && e.source != e.target).then_some((e.target, e.source, e.cost));
            core::iter::once((e.source, e.target, e.cost)).chain(reverse)
        })
    }

    /// Boolean adjacency matrix: `m[(u, v)]` iff an arc `u -> v` exists.
    pub fn adjacency_matrix(&self) -> Matrix<bool> {
        let mut matrix = Matrix::square(self.node_count(), false);
        for (u, v, _) in self.arcs() {
            matrix[(u.0, v.0)] = true;
        }
        matrix
    }

    /// Returns the first edge with a negative cost, if any.
    pub fn first_negative_edge(&self) -> Option<&Edge<C>> {
        self.edges.iter().find(|e| e.cost < C::zero())
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.nodes.len(),
            })
        }
    }
}

impl<C, N> Graph<C, N> {
    /// Returns the construction-time kind.
    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` for directed graphs.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.kind.directed
    }

    /// Returns `true` for weighted graphs.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.kind.weighted
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges (undirected edges count once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over node ids in insertion order.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(id.0)
    }

    /// Returns all nodes in id order.
    pub fn nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> &[Edge<C>] {
        &self.edges
    }

    /// Returns the edge with the given id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<C>> {
        self.edges.get(id.0)
    }

    /// Returns the adjacency list of `node` (empty for unknown ids).
    pub fn neighbours(&self, node: NodeId) -> &[Neighbour<C>] {
        self.adjacency.get(node.0).map_or(&[], Vec::as_slice)
    }
}

impl<C: Cost, N> fmt::Display for Graph<C, N> {
    /// Prints the cost matrix, `0` where there is no edge.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut matrix: Matrix<Option<C>> = Matrix::square(self.node_count(), None);
        for (u, v, c) in self.arcs() {
            matrix[(u.0, v.0)] = Some(c);
        }
        for row in matrix.iter_rows() {
            for cell in row {
                match cell {
                    Some(c) => write!(f, "{:3}", c.to_string())?,
                    None => write!(f, "{:3}", "0")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_construction() {
        let mut g: Graph<i32> = Graph::new(GraphKind::directed());
        let a = g.add_node();
        let b = g.add_node();
        let e = g.add_edge(a, b, 4).unwrap();

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(e).unwrap().cost, 4);
        assert_eq!(g.neighbours(a).len(), 1);
        assert!(g.neighbours(b).is_empty());
        assert_eq!(g.arcs().count(), 1);
    }

    #[test]
    fn test_undirected_materializes_both_sides() {
        let g: Graph<i32> =
            Graph::from_edges(GraphKind::undirected(), 3, [(0, 1, 2), (1, 2, 3), (2, 2, 9)])
                .unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbours(NodeId::new(1)).len(), 2);
        // Self-loop appears once.
        assert_eq!(g.neighbours(NodeId::new(2)).len(), 2);
        assert_eq!(g.arcs().count(), 5);
        let m = g.adjacency_matrix();
        assert!(m[(1, 0)] && m[(0, 1)] && m[(2, 2)]);
        assert!(!m[(0, 2)]);
    }

    #[test]
    fn test_unweighted_coerces_costs() {
        let g: Graph<i64> =
            Graph::from_edges(GraphKind::directed().unweighted(), 2, [(0, 1, 42)]).unwrap();
        assert_eq!(g.edges()[0].cost, 1);
        assert!(!g.is_weighted());
    }

    #[test]
    fn test_rejects_bad_edges() {
        let mut g: Graph<f64> = Graph::with_nodes(GraphKind::directed(), 2);
        let (a, b) = (NodeId::new(0), NodeId::new(1));
        assert_eq!(
            g.add_edge(a, NodeId::new(5), 1.0),
            Err(GraphError::NodeOutOfRange {
                node: NodeId::new(5),
                node_count: 2
            })
        );
        assert_eq!(
            g.add_edge(a, b, f64::NAN),
            Err(GraphError::NonFiniteCost {
                from: NodeId::new(0),
                to: NodeId::new(1)
            })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_node_payload() {
        let mut g: Graph<i32, &str> = Graph::new(GraphKind::undirected());
        let s = g.add_node_with("start");
        let t = g.add_node();
        assert_eq!(g.node(s).unwrap().content, Some("start"));
        assert_eq!(g.node(t).unwrap().content, None);
        assert_eq!(g.node_ids().collect::<Vec<_>>(), vec![s, t]);
    }

    #[test]
    fn test_deserialize_rebuilds_adjacency() {
        let g: Graph<i32, &str> = {
            let mut g = Graph::new(GraphKind::undirected());
            let a = g.add_node_with("a");
            let b = g.add_node_with("b");
            let c = g.add_node();
            g.add_edge(a, b, 3).unwrap();
            g.add_edge(b, c, 4).unwrap();
            g
        };
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph<i32, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.kind(), GraphKind::undirected());
        assert_eq!(back.edges(), g.edges());
        assert_eq!(back.node(NodeId::new(0)).unwrap().content.as_deref(), Some("a"));
        assert_eq!(back.neighbours(NodeId::new(1)).len(), 2);
        assert_eq!(back.neighbours(NodeId::new(2))[0].node, NodeId::new(1));
    }

    #[test]
    fn test_deserialize_validates_edges_and_ids() {
        let kind = r#"{"directed":true,"weighted":true}"#;
        let nodes = r#"[{"id":0,"content":null},{"id":1,"content":null}]"#;

        let dangling = format!(
            r#"{{"kind":{kind},"nodes":{nodes},"edges":[{{"source":0,"target":5,"cost":1}}]}}"#
        );
        let err = serde_json::from_str::<Graph<i32>>(&dangling).unwrap_err();
        assert!(err.to_string().contains("node 5 is out of range"));

        let shuffled = format!(
            r#"{{"kind":{kind},"nodes":[{{"id":1,"content":null}}],"edges":[]}}"#
        );
        let err = serde_json::from_str::<Graph<i32>>(&shuffled).unwrap_err();
        assert!(err.to_string().contains("node 1 stored at position 0"));

        let ok = format!(r#"{{"kind":{kind},"nodes":{nodes},"edges":[]}}"#);
        assert_eq!(serde_json::from_str::<Graph<i32>>(&ok).unwrap().node_count(), 2);
    }

    #[test]
    fn test_display_cost_matrix() {
        let g: Graph<i32> = Graph::from_edges(GraphKind::directed(), 2, [(0, 1, 7)]).unwrap();
        assert_eq!(g.to_string(), "0  7  \n0  0  \n");
    }
}
