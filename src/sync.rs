//! Lock-guarded heap for multi-threaded hosts
//!
//! The tree array and its two index maps only make sense together, so a heap is
//! shared as one unit behind one exclusive lock. Every method below takes the
//! lock once and holds it for the whole operation; there is no finer-grained
//! locking.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_trees::heap::HeapType;
//! use rust_indexed_trees::sync::SharedHeap;
//! use std::thread;
//!
//! let heap = SharedHeap::new(HeapType::Min);
//! let workers: Vec<_> = (0..4)
//!     .map(|t| {
//!         let heap = heap.clone();
//!         thread::spawn(move || {
//!             for i in 0..10 {
//!                 heap.insert(t * 10 + i);
//!             }
//!         })
//!     })
//!     .collect();
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//!
//! assert_eq!(heap.len(), 40);
//! assert_eq!(heap.extract(), Some(0));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::heap::{Heap, HeapType};
use crate::traits::{Comparator, NaturalOrder};

/// A [`Heap`] shared between threads behind a single mutex
///
/// Cloning a `SharedHeap` yields another handle to the same heap.
pub struct SharedHeap<T, C = NaturalOrder> {
    inner: Arc<Mutex<Heap<T, C>>>,
}

impl<T: Ord> SharedHeap<T> {
    /// Creates an empty shared heap ordered by `T`'s [`Ord`]
    pub fn new(kind: HeapType) -> Self {
        Self::from_heap(Heap::new(kind))
    }
}

impl<T, C: Comparator<T>> SharedHeap<T, C> {
    /// Wraps an existing heap
    pub fn from_heap(heap: Heap<T, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(heap)),
        }
    }

    /// Inserts an element
    pub fn insert(&self, element: T) {
        self.inner.lock().insert(element)
    }

    /// Removes and returns the root element
    pub fn extract(&self) -> Option<T> {
        self.inner.lock().extract()
    }

    /// Returns a copy of the root element
    pub fn peek_cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with exclusive access to the heap
    ///
    /// Use this to batch several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Heap<T, C>) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl<T, C> Clone for SharedHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
