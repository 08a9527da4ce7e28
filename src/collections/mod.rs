//! Collections backing the graph algorithms.
//!
//! - `indexed_heap`: binary min-heap with an element → position index (decrease-key)
//! - `disjoint_set`: union-find with path compression and union-by-rank
//! - `matrix`: dense row-major matrix for adjacency and all-pairs results

pub mod disjoint_set;
pub mod indexed_heap;
pub mod matrix;

pub use disjoint_set::DisjointSet;
pub use indexed_heap::{heap_sort_by_key, IndexedBinaryHeap};
pub use matrix::Matrix;
