//! # `heapgraph` - Graph Algorithms over an Indexed Priority Queue
//!
//! Shortest paths, minimum spanning trees and all-pairs distances over weighted
//! graphs, built on a binary min-heap that supports decrease-key.
//!
//! ## Architecture
//!
//! Components, leaf-first:
//!
//! 1. **Graph model** (`graph::model`):
//!    - Arena of nodes addressed by dense `NodeId`s
//!    - Directed or undirected, weighted or unit-cost edges
//!    - Never mutated by algorithm runs
//!
//! 2. **Indexed Priority Queue** (`collections::IndexedBinaryHeap`):
//!    - Binary min-heap with an element → position index
//!    - \(O(\log n)\) `decrease_key`, \(O(1)\) `contains`
//!
//! 3. **Disjoint Set** (`collections::DisjointSet`):
//!    - Union-find with path compression and union-by-rank
//!
//! 4. **Graph Algorithms** (`graph::algorithms`):
//!    - BFS, Dijkstra, Prim, Kruskal, Bellman-Ford, Johnson, Floyd-Warshall
//!    - Per-run scratch state lives in side tables owned by the call
//!
//! ## Invariants
//!
//! - **Heap order**: every parent key is `<=` its children's keys.
//! - **Index agreement**: the heap's position map always matches the backing array.
//! - **Partition stability**: `find` compresses paths but never changes components.
//! - **Reweighting**: Johnson's reduced costs `c + h(u) - h(v)` are non-negative
//!   whenever no negative cycle exists.
//!
//! ## Example
//!
//! ```rust
//! use heapgraph::graph::{dijkstra, Distance, Graph, GraphKind, NodeId};
//!
//! let graph: Graph<i64> = Graph::from_edges(
//!     GraphKind::directed(),
//!     4,
//!     [(0, 1, 1), (1, 2, 2), (0, 2, 5), (2, 3, 1)],
//! )?;
//!
//! let paths = dijkstra(&graph, NodeId::new(0))?;
//! assert_eq!(paths.distance(NodeId::new(3)), Distance::Finite(4));
//! assert_eq!(paths.predecessor(NodeId::new(3)), Some(NodeId::new(2)));
//! # Ok::<(), heapgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{DisjointSet, IndexedBinaryHeap, Matrix};
pub use error::{GraphError, Result};
pub use graph::{
    AllPairs, Cost, Distance, Edge, EdgeId, Graph, GraphKind, NodeId, ShortestPaths, SpanningTree,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Ids are plain indices.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());

    // The sentinel costs at most one discriminant word over the cost itself.
    assert!(mem::size_of::<Distance<i64>>() <= 2 * mem::size_of::<i64>());
};
