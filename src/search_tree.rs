//! Unbalanced binary search tree on top of [`IndexedBinaryTree`]
//!
//! Each insert descends from the root, going right when the new element is
//! strictly greater than the visited one and left otherwise (ties go left). The
//! first missing child on that path receives the element.
//!
//! Because children live at fixed array positions, a sparse tree leaves gaps in
//! the backing array. Filling an interior gap renumbers the nodes behind it,
//! which is the only O(n) step of an insert; heaps never hit that path.
//!
//! There is no deletion and no rebalancing: the shape depends only on the
//! insertion order, and sorted input degrades the tree into a list.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_trees::search_tree::BinarySearchTree;
//!
//! let bst: BinarySearchTree<i32> = [5, 10, 1, 2, 4].into_iter().collect();
//!
//! assert_eq!(bst.root(), Some(&5));
//! assert_eq!(bst.in_order(), vec![&1, &2, &4, &5, &10]);
//! assert!(bst.contains(&4));
//! assert!(!bst.contains(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::indexed_tree::{IndexedBinaryTree, NodeIndex, Side};
use crate::traits::{Comparator, NaturalOrder, TreeCollection};

/// A binary search tree ordered by `C`
#[derive(Clone)]
pub struct BinarySearchTree<T, C = NaturalOrder> {
    tree: IndexedBinaryTree<T>,
    comparator: C,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree ordered by `T`'s [`Ord`]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: IndexedBinaryTree::new(),
            comparator,
        }
    }

    /// Returns the number of elements in the tree
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the root element
    pub fn root(&self) -> Option<&T> {
        self.tree.root()
    }

    /// Read-only access to the underlying tree, for navigation and diagnostics
    pub fn tree(&self) -> &IndexedBinaryTree<T> {
        &self.tree
    }

    /// Inserts an element and returns the node index it was given
    ///
    /// Node indices of elements already in the tree may shift up by one when
    /// the new element fills an interior gap.
    pub fn insert(&mut self, element: T) -> NodeIndex {
        if self.tree.is_empty() {
            return self.tree.insert(element);
        }

        let (parent, side) = self.descend(&element);
        self.tree.attach(element, parent, side)
    }

    /// Returns the node index holding an element equal to `element`
    pub fn find(&self, element: &T) -> Option<NodeIndex> {
        let mut node = self.root_node()?;
        loop {
            let side = match self.comparator.compare(element, &self.tree[node]) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => Side::Right,
                Ordering::Less => Side::Left,
            };
            node = self.tree.child_of(node, side)?;
        }
    }

    /// Returns true if an element equal to `element` is stored
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Returns the smallest element
    pub fn min(&self) -> Option<&T> {
        self.outermost(Side::Left)
    }

    /// Returns the largest element
    pub fn max(&self) -> Option<&T> {
        self.outermost(Side::Right)
    }

    /// Returns all elements in ascending order
    pub fn in_order(&self) -> Vec<&T> {
        let mut sorted = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root_node();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = self.tree.child_of(node, Side::Left);
            }
            if let Some(node) = stack.pop() {
                sorted.push(&self.tree[node]);
                current = self.tree.child_of(node, Side::Right);
            }
        }

        sorted
    }

    /// Walks down from the root to the node that will parent `element`
    ///
    /// Returns that node together with the side the element goes on.
    fn descend(&self, element: &T) -> (NodeIndex, Side) {
        let mut node = 0;
        loop {
            let side = if self.comparator.greater_than(element, &self.tree[node]) {
                Side::Right
            } else {
                Side::Left
            };
            match self.tree.child_of(node, side) {
                Some(child) => node = child,
                None => return (node, side),
            }
        }
    }

    fn outermost(&self, side: Side) -> Option<&T> {
        let mut node = self.root_node()?;
        while let Some(child) = self.tree.child_of(node, side) {
            node = child;
        }
        Some(&self.tree[node])
    }

    fn root_node(&self) -> Option<NodeIndex> {
        self.tree.root().map(|_| 0)
    }
}

impl<T, C: Comparator<T>> TreeCollection<T> for BinarySearchTree<T, C> {
    fn is_empty(&self) -> bool {
        BinarySearchTree::is_empty(self)
    }

    fn len(&self) -> usize {
        BinarySearchTree::len(self)
    }

    fn insert(&mut self, element: T) {
        BinarySearchTree::insert(self, element);
    }

    fn peek(&self) -> Option<&T> {
        self.root()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bst = Self::new();
        bst.extend(iter);
        bst
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, C> fmt::Display for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
