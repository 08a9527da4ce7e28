//! `IndexedBinaryHeap` - a binary min-heap with O(log n) decrease-key.
//!
//! Every queued element is tracked in a side map from element identity to its
//! current array position. This is what lets `decrease_key` locate an element
//! without a linear scan, and what Dijkstra/Prim rely on to distinguish
//! "first discovery" (`push`) from "improved distance" (`decrease_key`).
//!
//! # Invariants
//!
//! - Heap order: for every non-root position `i`, `key(parent(i)) <= key(i)`.
//! - Index agreement: `positions[entries[i].element] == i` for every `i`.
//!
//! Both are restored inside every structural mutation (`swap`, insert, remove).
//!
//! # Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push` | \(O(\log n)\) |
//! | `pop` | \(O(\log n)\) |
//! | `peek_min` | \(O(1)\) |
//! | `decrease_key` | \(O(\log n)\) |
//! | `contains` | \(O(1)\) expected |
//! | `from_vec` | \(O(n)\) |

use crate::error::{GraphError, Result};
use core::fmt;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone)]
struct HeapEntry<E, K> {
    element: E,
    key: K,
}

/// A min-priority queue keyed by `K` with an element → position index.
///
/// Keys only need `PartialOrd`; an incomparable key (e.g. `NaN`) never sifts past
/// a comparable one.
#[derive(Clone)]
pub struct IndexedBinaryHeap<E, K> {
    entries: Vec<HeapEntry<E, K>>,
    positions: HashMap<E, usize>,
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

impl<E, K> IndexedBinaryHeap<E, K>
where
    E: Hash + Eq + Clone,
    K: PartialOrd,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a heap from arbitrary `(element, key)` pairs in \(O(n)\).
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateElement`] if an element appears twice.
    pub fn from_vec(items: Vec<(E, K)>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        let mut entries = Vec::with_capacity(items.len());
        for (element, key) in items {
            if positions.insert(element.clone(), entries.len()).is_some() {
                return Err(GraphError::DuplicateElement);
            }
            entries.push(HeapEntry { element, key });
        }
        let mut heap = Self { entries, positions };
        heap.heapify();
        Ok(heap)
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `element` is currently queued.
    pub fn contains(&self, element: &E) -> bool {
        self.positions.contains_key(element)
    }

    /// Returns the current key of a queued element.
    pub fn key_of(&self, element: &E) -> Option<&K> {
        self.positions.get(element).map(|&pos| &self.entries[pos].key)
    }

    /// Inserts `element` with priority `key`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateElement`] if `element` is already queued;
    /// use [`decrease_key`](Self::decrease_key) to re-prioritize it instead.
    pub fn push(&mut self, element: E, key: K) -> Result<()> {
        if self.positions.contains_key(&element) {
            return Err(GraphError::DuplicateElement);
        }
        let pos = self.entries.len();
        self.positions.insert(element.clone(), pos);
        self.entries.push(HeapEntry { element, key });
        self.sift_up(pos);
        Ok(())
    }

    /// Inserts a batch of elements.
    ///
    /// Large batches relative to the current size are appended and the whole
    /// array is re-heapified; small batches are pushed one at a time.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateElement`] on the first element that is
    /// already queued. Elements before it remain queued.
    pub fn push_all<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = (E, K)>,
    {
        let batch: Vec<(E, K)> = items.into_iter().collect();
        let len = self.entries.len();
        #[allow(clippy::cast_precision_loss)]
        let rebuild = len < 2 || batch.len() as f64 > len as f64 / (len as f64).log2();

        if !rebuild {
            for (element, key) in batch {
                self.push(element, key)?;
            }
            return Ok(());
        }

        let mut result = Ok(());
        for (element, key) in batch {
            if self.positions.contains_key(&element) {
                result = Err(GraphError::DuplicateElement);
                break;
            }
            self.positions.insert(element.clone(), self.entries.len());
            self.entries.push(HeapEntry { element, key });
        }
        self.heapify();
        result
    }

    /// Returns the minimum element and its key without removing it.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueue`] if the heap is empty.
    pub fn peek_min(&self) -> Result<(&E, &K)> {
        self.entries
            .first()
            .map(|entry| (&entry.element, &entry.key))
            .ok_or(GraphError::EmptyQueue)
    }

    /// Removes and returns the minimum element and its key.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueue`] if the heap is empty.
    pub fn pop(&mut self) -> Result<(E, K)> {
        if self.entries.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop().ok_or(GraphError::EmptyQueue)?;
        self.positions.remove(&entry.element);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.element, entry.key))
    }

    /// Replaces the key of a queued element and restores heap order.
    ///
    /// The element moves up if the new key is smaller than its parent's and
    /// down if it is larger than one of its children's; at most one applies.
    /// Dijkstra and Prim only ever lower keys, but raising one is also handled.
    ///
    /// # Errors
    /// Returns [`GraphError::ElementNotFound`] if `element` is not queued.
    pub fn decrease_key(&mut self, element: &E, key: K) -> Result<()> {
        let pos = *self
            .positions
            .get(element)
            .ok_or(GraphError::ElementNotFound)?;
        self.entries[pos].key = key;
        self.restore(pos);
        Ok(())
    }

    /// Removes an arbitrary queued element, returning its key.
    ///
    /// # Errors
    /// Returns [`GraphError::ElementNotFound`] if `element` is not queued.
    pub fn remove(&mut self, element: &E) -> Result<K> {
        let pos = self
            .positions
            .remove(element)
            .ok_or(GraphError::ElementNotFound)?;
        let last = self.entries.len() - 1;
        if pos != last {
            self.entries.swap(pos, last);
            self.reindex(pos);
        }
        let entry = self.entries.pop().ok_or(GraphError::ElementNotFound)?;
        if pos < self.entries.len() {
            // The moved-in tail element may belong above or below `pos`.
            self.restore(pos);
        }
        Ok(entry.key)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Drains the heap in ascending key order.
    pub fn into_sorted_vec(mut self) -> Vec<(E, K)> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks heap order and position-map agreement.
    ///
    /// Intended for tests and debug assertions; runs in \(O(n)\).
    pub fn check_invariants(&self) -> bool {
        if self.positions.len() != self.entries.len() {
            return false;
        }
        self.entries.iter().enumerate().all(|(i, entry)| {
            let ordered = i == 0 || !self.less(i, parent(i));
            ordered && self.positions.get(&entry.element) == Some(&i)
        })
    }

    fn heapify(&mut self) {
        let len = self.entries.len();
        if len < 2 {
            return;
        }
        for node in (0..=parent(len - 1)).rev() {
            self.sift_down(node);
        }
    }

    fn restore(&mut self, pos: usize) {
        if pos > 0 && self.less(pos, parent(pos)) {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let up = parent(node);
            if self.less(node, up) {
                self.swap(node, up);
                node = up;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Ties go to the left child.
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    fn reindex(&mut self, pos: usize) {
        if let Some(slot) = self.positions.get_mut(&self.entries[pos].element) {
            *slot = pos;
        }
    }

    // Strict comparison between two array slots.
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].key < self.entries[b].key
    }
}

impl<E, K> IndexedBinaryHeap<E, K> {
    /// Iterates over queued `(element, key)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &K)> {
        self.entries.iter().map(|entry| (&entry.element, &entry.key))
    }
}

impl<E, K> Default for IndexedBinaryHeap<E, K>
where
    E: Hash + Eq + Clone,
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug, K: fmt::Debug> fmt::Debug for IndexedBinaryHeap<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("len", &self.entries.len())
            .field("min", &self.entries.first().map(|e| (&e.element, &e.key)))
            .finish()
    }
}

/// Sorts `items` in ascending order of `key` using an indexed binary heap.
///
/// Not stable: items with equal keys may be reordered.
pub fn heap_sort_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut heap = IndexedBinaryHeap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        heap.positions.insert(index, index);
        heap.entries.push(HeapEntry {
            element: index,
            key: key(item),
        });
    }
    heap.heapify();

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    heap.into_sorted_vec()
        .into_iter()
        .filter_map(|(index, _)| slots[index].take())
        .collect()
}
