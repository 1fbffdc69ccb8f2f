//! Binary heap on top of [`IndexedBinaryTree`]
//!
//! A heap whose ordering policy is fixed at construction: [`HeapType::Min`] or
//! [`HeapType::Max`], optionally combined with a custom [`Comparator`]. All
//! structural work (appending, swapping, removing) is delegated to the tree;
//! the heap only decides which nodes to swap.
//!
//! Heaps never contain gaps, so node indices and tree indices coincide here.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `insert`    | O(log n)   |
//! | `extract`   | O(log n)   |
//! | `peek`      | O(1)       |
//! | `from_vec`  | O(n)       |
//! | `merge`     | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_trees::heap::{Heap, HeapType};
//!
//! let mut heap = Heap::new(HeapType::Max);
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.extract(), Some(3));
//! assert_eq!(heap.extract(), Some(2));
//! assert_eq!(heap.extract(), Some(1));
//! assert_eq!(heap.extract(), None);
//! ```

use std::fmt;

use crate::indexed_tree::{IndexedBinaryTree, NodeIndex, Side};
use crate::traits::{Comparator, NaturalOrder, PriorityQueue, TreeCollection};

/// Which end of the ordering sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapType {
    /// Smallest element first
    Min,
    /// Largest element first
    Max,
}

/// A binary min- or max-heap
///
/// Elements are compared with `C`, which defaults to the element's own [`Ord`].
/// Any `Fn(&T, &T) -> Ordering` closure can be used instead, which is how heaps
/// of types without a natural order (or with a different one) are built.
///
/// ```rust
/// use rust_indexed_trees::heap::{Heap, HeapType};
///
/// let mut heap = Heap::with_comparator(HeapType::Min, |a: &(char, u32), b: &(char, u32)| a.1.cmp(&b.1));
/// heap.insert(('z', 30));
/// heap.insert(('y', 10));
///
/// assert_eq!(heap.extract(), Some(('y', 10)));
/// ```
#[derive(Clone)]
pub struct Heap<T, C = NaturalOrder> {
    /// The heap data, always a gap-free complete tree
    tree: IndexedBinaryTree<T>,
    kind: HeapType,
    comparator: C,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty heap ordered by `T`'s [`Ord`]
    pub fn new(kind: HeapType) -> Self {
        Self::with_comparator(kind, NaturalOrder)
    }

    /// Builds a heap out of `elements` (read in level order) in O(n)
    pub fn from_vec(kind: HeapType, elements: Vec<T>) -> Self {
        Self::from_vec_with_comparator(kind, elements, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(kind: HeapType, comparator: C) -> Self {
        Self {
            tree: IndexedBinaryTree::new(),
            kind,
            comparator,
        }
    }

    /// Builds a heap out of `elements` (read in level order), ordered by `comparator`
    pub fn from_vec_with_comparator(kind: HeapType, elements: Vec<T>, comparator: C) -> Self {
        let mut heap = Self {
            tree: elements.into_iter().collect(),
            kind,
            comparator,
        };
        heap.heapify();
        heap
    }

    /// Returns the ordering policy of this heap
    pub fn kind(&self) -> HeapType {
        self.kind
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the root (min or max) without removing it
    pub fn peek(&self) -> Option<&T> {
        self.tree.root()
    }

    /// Read-only access to the underlying tree, for navigation and diagnostics
    pub fn tree(&self) -> &IndexedBinaryTree<T> {
        &self.tree
    }

    /// Inserts an element
    pub fn insert(&mut self, element: T) {
        let node = self.tree.insert(element);
        self.percolate_up(node);
    }

    /// Removes and returns the root element
    ///
    /// The root is swapped with the right-most node, that node is removed from
    /// the tree, and the new root is percolated down.
    pub fn extract(&mut self) -> Option<T> {
        let last = self.tree.last_node()?;
        self.tree.swap(0, last);
        let result = self.tree.remove_node(last);

        if !self.tree.is_empty() {
            self.percolate_down(0);
        }

        result
    }

    /// Moves every element of `other` into this heap
    ///
    /// The elements are appended and the whole tree is re-heapified, so this is
    /// linear in the combined size.
    pub fn merge(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }
        for element in other.tree.into_elements() {
            self.tree.insert(element);
        }
        self.heapify();
    }

    /// Consumes the heap and returns its elements in extraction order
    ///
    /// Descending for a max-heap, ascending for a min-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(element) = self.extract() {
            sorted.push(element);
        }
        sorted
    }

    /// True if `a` belongs closer to the root than `b`
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        match self.kind {
            HeapType::Max => self.comparator.greater_than(a, b),
            HeapType::Min => self.comparator.less_than(a, b),
        }
    }

    /// Bottom-up build: percolate down from the last node back to the root
    fn heapify(&mut self) {
        log::debug!("heapifying {} elements ({:?})", self.tree.len(), self.kind);
        for node in (0..self.tree.len()).rev() {
            self.percolate_down(node);
        }
    }

    /// Move the element at `node` up to maintain heap order
    fn percolate_up(&mut self, mut node: NodeIndex) {
        while let Some(parent) = self.tree.parent_of(node) {
            if self.precedes(&self.tree[node], &self.tree[parent]) {
                self.tree.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `node` down to maintain heap order
    fn percolate_down(&mut self, mut node: NodeIndex) {
        loop {
            let left = self.tree.child_of(node, Side::Left);
            let right = self.tree.child_of(node, Side::Right);

            let candidate = match (left, right) {
                (None, None) => break,
                (Some(child), None) | (None, Some(child)) => child,
                (Some(left), Some(right)) => {
                    if self.precedes(&self.tree[right], &self.tree[left]) {
                        right
                    } else {
                        left
                    }
                }
            };

            if self.precedes(&self.tree[candidate], &self.tree[node]) {
                self.tree.swap(node, candidate);
                node = candidate;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Comparator<T>> TreeCollection<T> for Heap<T, C> {
    fn is_empty(&self) -> bool {
        Heap::is_empty(self)
    }

    fn len(&self) -> usize {
        Heap::len(self)
    }

    fn insert(&mut self, element: T) {
        Heap::insert(self, element)
    }

    fn peek(&self) -> Option<&T> {
        Heap::peek(self)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for Heap<T, C> {
    fn extract(&mut self) -> Option<T> {
        Heap::extract(self)
    }
}

impl<T, C: Comparator<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("kind", &self.kind)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, C> fmt::Display for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
