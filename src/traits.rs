//! Common traits for the tree-backed collections
//!
//! This module provides the ordering seam and a two-tier trait hierarchy for the
//! collections built on [`IndexedBinaryTree`](crate::indexed_tree::IndexedBinaryTree):
//!
//! - [`TreeCollection`]: Base trait for anything that accepts ordered inserts
//!   and exposes its root
//! - [`PriorityQueue`]: Extended trait adding `extract` for heap-ordered collections
//!
//! Callers of [`Heap`](crate::heap::Heap) and
//! [`BinarySearchTree`](crate::search_tree::BinarySearchTree) only ever see these
//! operations; the index-manipulation methods of the underlying tree stay behind them.

use std::cmp::Ordering;

use thiserror::Error;

use crate::indexed_tree::{NodeIndex, TreeIndex};

/// Error type for tree operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node index does not refer to a live node
    #[error("node index {node} is out of range (tree has {len} nodes)")]
    NodeOutOfRange { node: NodeIndex, len: usize },
    /// The tree index lies outside the backing array
    #[error("tree index {index} is out of range (backing array has {len} slots)")]
    TreeIndexOutOfRange { index: TreeIndex, len: usize },
}

/// A three-way comparison between two elements
///
/// `compare(a, b) == Ordering::Less` means `a` sorts before `b`. Any closure of
/// shape `Fn(&T, &T) -> Ordering` is a comparator, and [`NaturalOrder`] falls back
/// on the element's own [`Ord`] implementation.
///
/// # Example
///
/// ```rust
/// use rust_indexed_trees::traits::{Comparator, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
/// ```
pub trait Comparator<T> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` compares strictly greater than `b`
    #[inline]
    fn greater_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns true if `a` compares strictly less than `b`
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Comparator that uses the element type's [`Ord`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Base trait for ordered collections built on an indexed binary tree
///
/// # Example
///
/// ```rust
/// use rust_indexed_trees::search_tree::BinarySearchTree;
/// use rust_indexed_trees::TreeCollection;
///
/// fn fill<C: TreeCollection<i32>>(collection: &mut C) {
///     for value in [5, 10, 1] {
///         collection.insert(value);
///     }
/// }
///
/// let mut bst = BinarySearchTree::new();
/// fill(&mut bst);
/// assert_eq!(bst.len(), 3);
/// assert_eq!(TreeCollection::peek(&bst), Some(&5));
/// ```
pub trait TreeCollection<T> {
    /// Returns true if the collection is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the collection
    fn len(&self) -> usize;

    /// Inserts an element according to the collection's ordering policy
    ///
    /// # Time Complexity
    /// O(log n) for a heap. For a binary search tree, O(depth), plus O(n)
    /// when the new child fills an interior gap of the backing array.
    fn insert(&mut self, element: T);

    /// Returns the element stored at the root without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;
}

/// Extended trait for heap-ordered collections
///
/// # Example
///
/// ```rust
/// use rust_indexed_trees::heap::{Heap, HeapType};
/// use rust_indexed_trees::{PriorityQueue, TreeCollection};
///
/// let mut heap = Heap::new(HeapType::Max);
/// heap.insert(3);
/// heap.insert(8);
/// assert_eq!(PriorityQueue::extract(&mut heap), Some(8));
/// ```
pub trait PriorityQueue<T>: TreeCollection<T> {
    /// Removes and returns the root element, or `None` when empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract(&mut self) -> Option<T>;
}
