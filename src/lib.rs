//! Indexed Binary Trees for Rust
//!
//! This crate provides an array-backed binary tree with two index spaces, and the
//! ordered collections built on top of it.
//!
//! # Features
//!
//! - **IndexedBinaryTree**: complete-binary-tree array with gaps, addressed by compact
//!   node indices that stay dense while the array stays positional
//! - **Heap**: MIN or MAX binary heap with optional custom comparator; O(log n) insert and
//!   extract, O(n) heapify
//! - **BinarySearchTree**: unbalanced BST whose nodes live at their positional array slots
//! - **StdHeap**: `std::collections::BinaryHeap`-shaped facade over a max heap
//! - **SharedHeap** (feature `sync`, on by default): a heap behind one `parking_lot` mutex
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_trees::heap::{Heap, HeapType};
//! use rust_indexed_trees::search_tree::BinarySearchTree;
//!
//! let heap = Heap::from_vec(HeapType::Max, (0..=11).collect());
//! assert_eq!(heap.to_string(), "11\n10 6\n8 9 5 0\n7 3 1 4 2");
//!
//! let mut bst = BinarySearchTree::new();
//! for value in [5, 10, 1, 2, 4] {
//!     bst.insert(value);
//! }
//! assert_eq!(bst.tree().right_child(1), Ok(Some(3)));
//! ```

pub mod heap;
pub mod indexed_tree;
pub mod search_tree;
pub mod stdlib_compat;
#[cfg(feature = "sync")]
pub mod sync;
pub mod traits;

// Re-export the main types and traits for convenience
pub use heap::{Heap, HeapType};
pub use indexed_tree::{IndexedBinaryTree, NodeIndex, TreeIndex};
pub use search_tree::BinarySearchTree;
pub use traits::{Comparator, NaturalOrder, PriorityQueue, TreeCollection, TreeError};
