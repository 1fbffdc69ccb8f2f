//! Array-backed binary tree with dual indexing
//!
//! The tree is stored as a complete binary tree in a vector of slots: the root
//! lives at position 0 and the children of position `i` live at `2i + 1` and
//! `2i + 2`. A slot is either occupied or a gap, so a sparse tree (like the one a
//! binary search tree grows) keeps its positional arithmetic.
//!
//! Callers never see those positions. Every live node also carries a compact
//! *node index* in `0..len`, numbered in position order and skipping gaps:
//!
//! ```text
//!  tree index:  0    1    2    3    4    5    6
//!  slots:      [5]  [1] [10]  [ ]  [2]  [ ]  [ ]
//!  node index:  0    1    2          3
//! ```
//!
//! Two maps translate between the index spaces, `node_to_index` (node -> tree
//! position) and `index_to_node` (tree position -> node or gap). Each structural
//! operation patches both maps in the same `&mut self` call that touches the
//! slots, so the three vectors are never observable out of sync.
//!
//! # Time Complexity
//!
//! | Operation                       | Complexity |
//! |---------------------------------|------------|
//! | navigation / `element`          | O(1)       |
//! | `insert`                        | O(1)       |
//! | `insert_*_child` (extend)       | O(gap)     |
//! | `insert_*_child` (fill a gap)   | O(n)       |
//! | `replace` / `swap`              | O(1)       |
//! | `remove`                        | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_trees::indexed_tree::IndexedBinaryTree;
//!
//! let mut tree = IndexedBinaryTree::new();
//! let root = tree.insert(5);
//! let right = tree.insert_right_child(10, root).unwrap();
//! let left = tree.insert_left_child(1, root).unwrap();
//!
//! // Filling the gap at tree index 1 renumbered the right child.
//! assert_eq!((root, left, right), (0, 1, 1));
//! assert_eq!(tree.right_child(root).unwrap(), Some(2));
//! assert_eq!(tree.to_string(), "5\n1 10");
//! ```

use std::fmt;
use std::ops::Index;

use crate::traits::TreeError;

/// Compact identifier of a live node, in `0..len`
pub type NodeIndex = usize;

/// Position in the complete-binary-tree array, gaps included
pub type TreeIndex = usize;

/// Marker printed for a gap by the [`Display`](fmt::Display) implementation
pub const GAP_MARKER: &str = "null";

/// Which child of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Tree index of this child of the node at `parent`
    #[inline]
    pub fn child_of(self, parent: TreeIndex) -> TreeIndex {
        match self {
            Side::Left => 2 * parent + 1,
            Side::Right => 2 * parent + 2,
        }
    }
}

/// Tree index of the parent of `index`, or `None` for the root position
#[inline]
fn parent_position(index: TreeIndex) -> Option<TreeIndex> {
    index.checked_sub(1).map(|i| i / 2)
}

/// 0-based level of a tree position
#[inline]
fn level_of(index: TreeIndex) -> usize {
    (index + 1).ilog2() as usize
}

/// A binary tree over a gapped array, addressed by compact node indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBinaryTree<T> {
    /// Complete-binary-tree array; `None` is a gap
    slots: Vec<Option<T>>,
    /// node index -> tree index, strictly increasing
    node_to_index: Vec<TreeIndex>,
    /// tree index -> node index, `None` at gaps
    index_to_node: Vec<Option<NodeIndex>>,
}

impl<T> IndexedBinaryTree<T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            node_to_index: Vec::new(),
            index_to_node: Vec::new(),
        }
    }

    /// Creates a tree whose backing array is exactly `slots`
    ///
    /// `None` entries are kept as gaps, which lets callers rebuild a specific
    /// tree shape. Node indices are assigned to the occupied slots in order.
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        let mut node_to_index = Vec::new();
        let mut index_to_node = Vec::with_capacity(slots.len());

        for (index, slot) in slots.iter().enumerate() {
            if slot.is_some() {
                index_to_node.push(Some(node_to_index.len()));
                node_to_index.push(index);
            } else {
                index_to_node.push(None);
            }
        }

        Self {
            slots,
            node_to_index,
            index_to_node,
        }
    }

    /// Returns the number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.node_to_index.len()
    }

    /// Returns true if the tree has no live nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_to_index.is_empty()
    }

    /// Returns the element at tree index 0, if any
    pub fn root(&self) -> Option<&T> {
        self.slots.first().and_then(Option::as_ref)
    }

    /// Returns true if `node` is a live node index
    #[inline]
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node < self.node_to_index.len()
    }

    /// Returns the node index of the right-most live node
    pub fn last_node(&self) -> Option<NodeIndex> {
        self.len().checked_sub(1)
    }

    /// Returns the element stored at `node`, or `None` if it is not live
    pub fn get(&self, node: NodeIndex) -> Option<&T> {
        self.node_to_index
            .get(node)
            .and_then(|&index| self.slots[index].as_ref())
    }

    /// Returns the element stored at `node`
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn element(&self, node: NodeIndex) -> Result<&T, TreeError> {
        self.get(node).ok_or(self.out_of_range(node))
    }

    /// Translates a node index into its tree index
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn tree_index(&self, node: NodeIndex) -> Result<TreeIndex, TreeError> {
        self.node_to_index
            .get(node)
            .copied()
            .ok_or(self.out_of_range(node))
    }

    /// Translates a tree index into the node stored there (`None` for a gap)
    ///
    /// # Errors
    /// Returns [`TreeError::TreeIndexOutOfRange`] if `index` is past the array.
    pub fn node_at(&self, index: TreeIndex) -> Result<Option<NodeIndex>, TreeError> {
        self.index_to_node
            .get(index)
            .copied()
            .ok_or(TreeError::TreeIndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    /// Returns the node index of the parent of `node`, `None` for the root
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn parent(&self, node: NodeIndex) -> Result<Option<NodeIndex>, TreeError> {
        self.tree_index(node)?;
        Ok(self.parent_of(node))
    }

    /// Returns the node index of the left child of `node`, if present
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn left_child(&self, node: NodeIndex) -> Result<Option<NodeIndex>, TreeError> {
        self.tree_index(node)?;
        Ok(self.child_of(node, Side::Left))
    }

    /// Returns the node index of the right child of `node`, if present
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn right_child(&self, node: NodeIndex) -> Result<Option<NodeIndex>, TreeError> {
        self.tree_index(node)?;
        Ok(self.child_of(node, Side::Right))
    }

    /// Returns the 0-based level of `node`
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn depth_of(&self, node: NodeIndex) -> Result<usize, TreeError> {
        let index = self.tree_index(node)?;
        self.depth_of_tree_index(index)
    }

    /// Returns the 0-based level of a tree position
    ///
    /// # Errors
    /// Returns [`TreeError::TreeIndexOutOfRange`] if `index` is past the array.
    pub fn depth_of_tree_index(&self, index: TreeIndex) -> Result<usize, TreeError> {
        if index >= self.slots.len() {
            return Err(TreeError::TreeIndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(level_of(index))
    }

    /// Returns true if `node` has no children
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn is_leaf(&self, node: NodeIndex) -> Result<bool, TreeError> {
        self.tree_index(node)?;
        Ok(self.is_leaf_node(node))
    }

    /// Returns true if `node` has no parent
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn is_root(&self, node: NodeIndex) -> Result<bool, TreeError> {
        Ok(self.parent(node)?.is_none())
    }

    /// Read-only view of the backing array, gaps included
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterates over `(node index, element)` pairs in node order
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &T)> + '_ {
        self.node_to_index
            .iter()
            .enumerate()
            .filter_map(move |(node, &index)| self.slots[index].as_ref().map(|e| (node, e)))
    }

    /// Consumes the tree, yielding its elements in node order
    pub fn into_elements(self) -> impl Iterator<Item = T> {
        self.slots.into_iter().flatten()
    }

    /// Appends `element` after the last slot of the array
    ///
    /// Returns the new node index, which is always the previous `len()`.
    pub fn insert(&mut self, element: T) -> NodeIndex {
        let index = self.slots.len();
        let node = self.node_to_index.len();

        self.slots.push(Some(element));
        self.node_to_index.push(index);
        self.index_to_node.push(Some(node));

        node
    }

    /// Places `element` as the left child of `node`
    ///
    /// An existing left child is overwritten in place. A missing one is created,
    /// filling a gap (and renumbering later nodes) or growing the array.
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn insert_left_child(&mut self, element: T, node: NodeIndex) -> Result<NodeIndex, TreeError> {
        self.insert_child(element, node, Side::Left)
    }

    /// Places `element` as the right child of `node`
    ///
    /// Same placement rules as [`insert_left_child`](Self::insert_left_child).
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn insert_right_child(&mut self, element: T, node: NodeIndex) -> Result<NodeIndex, TreeError> {
        self.insert_child(element, node, Side::Right)
    }

    /// Places `element` as the `side` child of `node`
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn insert_child(&mut self, element: T, node: NodeIndex, side: Side) -> Result<NodeIndex, TreeError> {
        self.tree_index(node)?;
        Ok(self.attach(element, node, side))
    }

    /// Overwrites the element at `node`, returning the previous one
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn replace(&mut self, element: T, node: NodeIndex) -> Result<T, TreeError> {
        let index = self.tree_index(node)?;
        self.slots[index]
            .replace(element)
            .ok_or(self.out_of_range(node))
    }

    /// Physically removes the slot holding `node` and returns its element
    ///
    /// The array shrinks by one, so every later slot moves one position to the
    /// left and every later node index drops by one.
    ///
    /// # Errors
    /// Returns [`TreeError::NodeOutOfRange`] if `node` is not live.
    pub fn remove(&mut self, node: NodeIndex) -> Result<T, TreeError> {
        let err = self.out_of_range(node);
        self.remove_node(node).ok_or(err)
    }

    /// Exchanges the elements of two live nodes
    ///
    /// Both node indices keep their tree positions; only the stored elements
    /// move. Does nothing if either index is not live.
    pub fn swap(&mut self, a: NodeIndex, b: NodeIndex) {
        if let (Some(&first), Some(&second)) = (self.node_to_index.get(a), self.node_to_index.get(b)) {
            self.slots.swap(first, second);
        }
    }

    // ========================================================================
    // Crate-internal navigation on indices derived from live ones
    // ========================================================================

    /// Parent of a live node
    ///
    /// # Panics
    /// Panics if `node` is not live.
    pub(crate) fn parent_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        parent_position(self.node_to_index[node]).and_then(|index| self.index_to_node[index])
    }

    /// `side` child of a live node
    ///
    /// # Panics
    /// Panics if `node` is not live.
    pub(crate) fn child_of(&self, node: NodeIndex, side: Side) -> Option<NodeIndex> {
        let child = side.child_of(self.node_to_index[node]);
        self.index_to_node.get(child).copied().flatten()
    }

    /// Places `element` as the `side` child of a live node
    ///
    /// # Panics
    /// Panics if `node` is not live.
    pub(crate) fn attach(&mut self, element: T, node: NodeIndex, side: Side) -> NodeIndex {
        let child = side.child_of(self.node_to_index[node]);
        self.place(element, child)
    }

    /// # Panics
    /// Panics if `node` is not live.
    pub(crate) fn is_leaf_node(&self, node: NodeIndex) -> bool {
        self.child_of(node, Side::Left).is_none() && self.child_of(node, Side::Right).is_none()
    }

    /// Removes `node`, returning `None` if it is not live
    pub(crate) fn remove_node(&mut self, node: NodeIndex) -> Option<T> {
        let index = *self.node_to_index.get(node)?;
        let element = self.slots.remove(index);

        self.node_to_index.remove(node);
        for position in &mut self.node_to_index[node..] {
            *position -= 1;
        }

        self.index_to_node.remove(index);
        for later in self.index_to_node[index..].iter_mut().flatten() {
            *later -= 1;
        }

        if index < self.slots.len() {
            log::trace!(
                "removed tree index {index}; shifted {} later slots",
                self.slots.len() - index
            );
        }

        element
    }

    // ========================================================================
    // Slot placement
    // ========================================================================

    /// Stores `element` at tree position `index`, keeping both maps in step
    fn place(&mut self, element: T, index: TreeIndex) -> NodeIndex {
        if let Some(Some(node)) = self.index_to_node.get(index).copied() {
            self.slots[index] = Some(element);
            return node;
        }

        if index < self.slots.len() {
            self.fill_gap(element, index)
        } else {
            self.extend_to(element, index)
        }
    }

    /// Occupies an interior gap
    ///
    /// The new node takes the number of live nodes before `index`; every node
    /// behind it is renumbered up by one. O(n).
    fn fill_gap(&mut self, element: T, index: TreeIndex) -> NodeIndex {
        let node = self.node_to_index.partition_point(|&position| position < index);

        self.slots[index] = Some(element);
        self.node_to_index.insert(node, index);
        self.index_to_node[index] = Some(node);
        for later in self.index_to_node[index + 1..].iter_mut().flatten() {
            *later += 1;
        }

        log::trace!(
            "filled gap at tree index {index} as node {node}; renumbered {} nodes",
            self.node_to_index.len() - node - 1
        );

        node
    }

    /// Grows the array with gaps so that `index` is its last slot
    fn extend_to(&mut self, element: T, index: TreeIndex) -> NodeIndex {
        let node = self.node_to_index.len();
        let gaps = index - self.slots.len();

        self.slots.resize_with(index, || None);
        self.slots.push(Some(element));
        self.index_to_node.resize(index, None);
        self.index_to_node.push(Some(node));
        self.node_to_index.push(index);

        if gaps > 0 {
            log::trace!("extended tree to {} slots with {gaps} gaps", self.slots.len());
        }

        node
    }

    #[inline]
    fn out_of_range(&self, node: NodeIndex) -> TreeError {
        TreeError::NodeOutOfRange {
            node,
            len: self.len(),
        }
    }
}

impl<T> Default for IndexedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Option<T>>> for IndexedBinaryTree<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self::from_slots(slots)
    }
}

impl<T> FromIterator<T> for IndexedBinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().map(Some).collect())
    }
}

impl<T> Index<NodeIndex> for IndexedBinaryTree<T> {
    type Output = T;

    /// # Panics
    /// Panics if `node` is not live.
    fn index(&self, node: NodeIndex) -> &T {
        match self.get(node) {
            Some(element) => element,
            None => panic!("{}", self.out_of_range(node)),
        }
    }
}

/// One line per level, slots separated by a single space, gaps as [`GAP_MARKER`]
impl<T: fmt::Display> fmt::Display for IndexedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                // A new level starts at every position 2^k - 1.
                let separator = if (index + 1).is_power_of_two() { '\n' } else { ' ' };
                write!(f, "{separator}")?;
            }
            match slot {
                Some(element) => write!(f, "{element}")?,
                None => f.write_str(GAP_MARKER)?,
            }
        }
        Ok(())
    }
}
