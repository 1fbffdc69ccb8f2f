//! Generic tests for every collection behind the public traits
//!
//! These tests only use the [`TreeCollection`] / [`PriorityQueue`] interface, so
//! the same scenario runs against natural-order heaps, comparator heaps and the
//! binary search tree.

use rust_indexed_trees::heap::{Heap, HeapType};
use rust_indexed_trees::search_tree::BinarySearchTree;
use rust_indexed_trees::{PriorityQueue, TreeCollection};
use std::cmp::Ordering;

// Test helpers that work with any implementation

/// Test that an empty collection behaves correctly
fn test_empty<C: TreeCollection<i32>>(collection: C) {
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
    assert_eq!(collection.peek(), None);
}

/// Test that an empty queue extracts nothing
fn test_empty_extract<Q: PriorityQueue<i32>>(mut queue: Q) {
    assert_eq!(queue.extract(), None);
    assert_eq!(queue.extract(), None);
    assert!(queue.is_empty());
}

/// Test that `len` follows inserts and extracts
fn test_size_accounting<Q: PriorityQueue<i32>>(mut queue: Q) {
    let mut expected = 0;
    for round in 0..20 {
        for value in 0..round {
            queue.insert(value * 7 % 13);
            expected += 1;
        }
        for _ in 0..round / 2 {
            assert!(queue.extract().is_some());
            expected -= 1;
        }
        assert_eq!(queue.len(), expected);
    }
}

/// Drain a queue into a vector
fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
    std::iter::from_fn(|| queue.extract()).collect()
}

/// Test the reference insertion sequence
fn test_reference_sequence<Q: PriorityQueue<i32>>(mut queue: Q, expected: &[i32]) {
    for value in [4, 3, 2, 7, 5, 10] {
        queue.insert(value);
    }
    assert_eq!(queue.len(), 6);
    assert_eq!(drain(&mut queue), expected);
    assert!(queue.is_empty());
}

/// Test alternating insert and extract
fn test_alternating_ops<Q: PriorityQueue<i32>>(mut queue: Q, kind: HeapType) {
    let mut model: Vec<i32> = Vec::new();
    for i in 0..200 {
        queue.insert((i * 31) % 97);
        model.push((i * 31) % 97);
        if i % 3 == 0 {
            model.sort_unstable();
            let expected = match kind {
                HeapType::Min => model.remove(0),
                HeapType::Max => model.pop().unwrap(),
            };
            assert_eq!(queue.extract(), Some(expected));
        }
    }
    assert_eq!(queue.len(), model.len());
}

#[test]
fn test_empty_collections() {
    test_empty(Heap::<i32>::new(HeapType::Min));
    test_empty(Heap::<i32>::new(HeapType::Max));
    test_empty(BinarySearchTree::<i32>::new());
    test_empty_extract(Heap::<i32>::new(HeapType::Min));
    test_empty_extract(Heap::<i32>::new(HeapType::Max));
}

#[test]
fn test_size_accounting_all_heaps() {
    test_size_accounting(Heap::new(HeapType::Min));
    test_size_accounting(Heap::new(HeapType::Max));
    test_size_accounting(Heap::with_comparator(HeapType::Max, |a: &i32, b: &i32| a.cmp(b)));
}

#[test]
fn test_extract_max_ordering() {
    test_reference_sequence(Heap::new(HeapType::Max), &[10, 7, 5, 4, 3, 2]);
}

#[test]
fn test_extract_min_ordering() {
    test_reference_sequence(Heap::new(HeapType::Min), &[2, 3, 4, 5, 7, 10]);
}

#[test]
fn test_reversed_comparator_flips_order() {
    let reversed = |a: &i32, b: &i32| b.cmp(a);
    test_reference_sequence(Heap::with_comparator(HeapType::Max, reversed), &[2, 3, 4, 5, 7, 10]);
    test_reference_sequence(Heap::with_comparator(HeapType::Min, reversed), &[10, 7, 5, 4, 3, 2]);
}

#[test]
fn test_alternating_all_heaps() {
    test_alternating_ops(Heap::new(HeapType::Min), HeapType::Min);
    test_alternating_ops(Heap::new(HeapType::Max), HeapType::Max);
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    priority: f64,
    label: &'static str,
}

fn by_priority(a: &Task, b: &Task) -> Ordering {
    a.priority.total_cmp(&b.priority)
}

fn tasks() -> Vec<Task> {
    vec![
        Task { priority: 2.5, label: "write" },
        Task { priority: 9.0, label: "deploy" },
        Task { priority: 0.5, label: "lint" },
        Task { priority: 4.0, label: "review" },
        Task { priority: 7.25, label: "test" },
        Task { priority: 1.0, label: "format" },
    ]
}

#[test]
fn test_composite_type_max_heap_descends() {
    let mut heap = Heap::with_comparator(HeapType::Max, by_priority);
    for task in tasks() {
        heap.insert(task);
    }

    let order: Vec<f64> = heap.into_sorted_vec().iter().map(|t| t.priority).collect();
    assert!(order.windows(2).all(|w| w[0] > w[1]), "{order:?}");
    assert_eq!(order.len(), 6);
}

#[test]
fn test_composite_type_min_heap_ascends() {
    let mut heap = Heap::from_vec_with_comparator(HeapType::Min, tasks(), by_priority);

    assert_eq!(heap.peek().map(|t| t.label), Some("lint"));
    let mut previous = f64::NEG_INFINITY;
    while let Some(task) = heap.extract() {
        assert!(task.priority > previous);
        previous = task.priority;
    }
}

#[test]
fn test_bst_through_trait() {
    let mut bst = BinarySearchTree::new();
    for value in [5, 10, 1, 2, 4] {
        TreeCollection::insert(&mut bst, value);
    }

    assert_eq!(TreeCollection::len(&bst), 5);
    assert_eq!(TreeCollection::peek(&bst), Some(&5));

    let tree = bst.tree();
    assert_eq!(tree.left_child(0), Ok(Some(1)));
    assert_eq!(tree.right_child(0), Ok(Some(2)));
    assert_eq!(tree.right_child(1), Ok(Some(3)));
    assert_eq!(tree.right_child(3), Ok(Some(4)));
    let elements: Vec<i32> = tree.iter().map(|(_, &e)| e).collect();
    assert_eq!(elements, vec![5, 1, 10, 2, 4]);
}

#[test]
fn test_heap_display_after_operations() {
    let mut heap = Heap::new(HeapType::Max);
    heap.extend([4, 3, 2, 7, 5, 10]);

    assert_eq!(heap.to_string(), "10\n5 7\n3 4 2");
    heap.extract();
    assert_eq!(heap.to_string(), "7\n5 2\n3 4");
}
