//! Standard library compatibility layer
//!
//! Provides a drop-in replacement for `std::collections::BinaryHeap`, backed by a
//! max-ordered [`Heap`].
//!
//! # Differences from BinaryHeap
//!
//! - The backing storage is an [`IndexedBinaryTree`](crate::indexed_tree::IndexedBinaryTree),
//!   reachable read-only through [`StdHeap::tree`].
//! - There is no `peek_mut`, `retain` or `drain`.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_trees::stdlib_compat::StdHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7)); // max-heap, like BinaryHeap
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.into_sorted_vec(), vec![3, 5]);
//! ```

use crate::heap::{Heap, HeapType};
use crate::indexed_tree::IndexedBinaryTree;

/// A drop-in replacement for `std::collections::BinaryHeap`
///
/// The largest item is always at the top. Wrap items in `std::cmp::Reverse`
/// for min-heap behaviour, exactly as with the standard heap.
#[derive(Debug, Clone)]
pub struct StdHeap<T: Ord> {
    heap: Heap<T>,
}

impl<T: Ord> StdHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: Heap::new(HeapType::Max),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.insert(item)
    }

    /// Returns a reference to the greatest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the greatest item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.extract()
    }

    /// Consumes the heap and returns its items in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted
    }

    /// Read-only access to the backing tree
    pub fn tree(&self) -> &IndexedBinaryTree<T> {
        self.heap.tree()
    }
}

impl<T: Ord> Default for StdHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Heapifies the vector in O(n), like `BinaryHeap::from`
impl<T: Ord> From<Vec<T>> for StdHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            heap: Heap::from_vec(HeapType::Max, items),
        }
    }
}

impl<T: Ord> FromIterator<T> for StdHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for StdHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter)
    }
}
