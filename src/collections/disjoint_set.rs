//! Disjoint Set (Union-Find) over arbitrary hashable elements.
//!
//! Elements are mapped to dense ids on insertion; the forest itself is stored
//! as parallel `parent`/`rank` vectors indexed by those ids.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<usize>`, so `find` can compress paths through a
//!   shared reference.
//! - Path compression and union-by-rank give near-constant amortized operations.

use crate::error::{GraphError, Result};
use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Element → dense id.
    index: HashMap<T, usize>,
    /// Dense id → element.
    items: Vec<T>,
    /// Parent pointers, `parent[i] == i` for roots.
    parent: Vec<Cell<usize>>,
    /// Upper bound on the height of the tree rooted at each id.
    rank: Vec<u8>,
    components: usize,
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new disjoint set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Adds `item` as a singleton set.
    ///
    /// Returns `false` (and changes nothing) if `item` was already present.
    pub fn make_set(&mut self, item: T) -> bool {
        if self.index.contains_key(&item) {
            return false;
        }
        let id = self.items.len();
        self.index.insert(item.clone(), id);
        self.items.push(item);
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        self.components += 1;
        true
    }

    /// Finds the representative of the set containing `item`, with path compression.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] if `item` was never added.
    pub fn find(&self, item: &T) -> Result<&T> {
        let id = self.id_of(item)?;
        Ok(&self.items[self.find_root(id)])
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] if either element was never added.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let root_a = self.find_root(self.id_of(a)?);
        let root_b = self.find_root(self.id_of(b)?);

        if root_a == root_b {
            return Ok(false);
        }

        // Union by rank
        let rank_a = self.rank[root_a];
        let rank_b = self.rank[root_b];

        if rank_a < rank_b {
            self.parent[root_a].set(root_b);
        } else if rank_a > rank_b {
            self.parent[root_b].set(root_a);
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] += 1;
        }

        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] if either element was never added.
    pub fn same_set(&self, a: &T, b: &T) -> Result<bool> {
        let root_a = self.find_root(self.id_of(a)?);
        let root_b = self.find_root(self.id_of(b)?);
        Ok(root_a == root_b)
    }

    /// Returns `true` if `item` has been added.
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn id_of(&self, item: &T) -> Result<usize> {
        self.index
            .get(item)
            .copied()
            .ok_or(GraphError::UnknownElement)
    }

    fn find_root(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr].replace(root);
            curr = next;
        }

        root
    }

    #[cfg(test)]
    fn depth(&self, item: &T) -> usize {
        let mut curr = self.index[item];
        let mut depth = 0;
        while self.parent[curr].get() != curr {
            curr = self.parent[curr].get();
            depth += 1;
        }
        depth
    }
}

impl<T: Hash + Eq + Clone> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for item in iter {
            set.make_set(item);
        }
        set
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for DisjointSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.make_set(item);
        }
    }
}
