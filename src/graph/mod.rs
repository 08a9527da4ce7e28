//! Weighted graphs and the algorithms that run over them.
//!
//! The graph is organized into:
//! - `model`: the arena-backed graph, node and edge ids
//! - `cost`: numeric cost trait and the `Distance` sentinel type
//! - `loader`: text edge-list parsing
//! - `paths`: result records written by algorithm runs
//! - `algorithms`: BFS, Dijkstra, Bellman-Ford, Prim, Kruskal, Johnson, Floyd-Warshall

pub mod algorithms;
pub mod cost;
pub mod loader;
pub mod model;
pub mod paths;

pub use algorithms::{
    bellman_ford, bfs, dijkstra, floyd_warshall, johnson, kruskal, prim, transitive_closure,
};
pub use cost::{Cost, Distance};
pub use loader::{parse_graph, read_graph};
pub use model::{Edge, EdgeId, Graph, GraphKind, Neighbour, Node, NodeId};
pub use paths::{AllPairs, PathEntry, ShortestPaths, SpanningTree};
