//! Stress tests that push the trees well past the small hand-checked shapes
//!
//! These tests perform large numbers of operations in various patterns to catch
//! edge cases in percolation and in the index renumbering.

use rust_indexed_trees::heap::{Heap, HeapType};
use rust_indexed_trees::search_tree::BinarySearchTree;
use rust_indexed_trees::stdlib_compat::StdHeap;
use std::collections::BinaryHeap;

/// Deterministic pseudo-random sequence (xorshift)
fn pseudo_random(seed: u64, count: usize) -> Vec<i64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as i64
        })
        .collect()
}

#[test]
fn test_massive_operations() {
    let mut heap = Heap::new(HeapType::Min);

    for i in 0..1000 {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 1000);

    for i in 0..1000 {
        assert_eq!(heap.extract(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_alternating_ops() {
    let mut heap = Heap::new(HeapType::Max);

    // Insert-insert-extract pattern
    for i in 0..200 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert_eq!(heap.extract(), Some(i * 2 + 1));
    }
    assert_eq!(heap.len(), 200);

    let drained = heap.into_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_matches_std_heap_on_random_workload() {
    let values = pseudo_random(0x9E37_79B9_7F4A_7C15, 5000);
    let mut ours = StdHeap::new();
    let mut reference = BinaryHeap::new();

    for (step, &value) in values.iter().enumerate() {
        ours.push(value);
        reference.push(value);
        if step % 3 == 2 {
            assert_eq!(ours.pop(), reference.pop());
        }
        assert_eq!(ours.peek(), reference.peek());
    }
    assert_eq!(ours.into_sorted_vec(), reference.into_sorted_vec());
}

#[test]
fn test_large_heapify_both_kinds() {
    let _ = pretty_env_logger::try_init();
    let values = pseudo_random(42, 10_000);

    let mut ascending = values.clone();
    ascending.sort_unstable();
    let mut descending = ascending.clone();
    descending.reverse();

    assert_eq!(Heap::from_vec(HeapType::Min, values.clone()).into_sorted_vec(), ascending);
    assert_eq!(Heap::from_vec(HeapType::Max, values).into_sorted_vec(), descending);
}

#[test]
fn test_merge_many_heaps() {
    let mut combined = Heap::new(HeapType::Min);
    for chunk in pseudo_random(7, 2000).chunks(100) {
        combined.merge(Heap::from_vec(HeapType::Min, chunk.to_vec()));
    }
    assert_eq!(combined.len(), 2000);

    let drained = combined.into_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_bst_with_many_gap_fills() {
    let _ = pretty_env_logger::try_init();
    // Balanced key set grouped by level.
    let mut levels: Vec<Vec<i64>> = Vec::new();
    let mut ranges = std::collections::VecDeque::from([(0i64, 1023i64, 0usize)]);
    while let Some((low, high, depth)) = ranges.pop_front() {
        if low > high {
            continue;
        }
        let mid = (low + high) / 2;
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(mid);
        ranges.push_back((low, mid - 1, depth + 1));
        ranges.push_back((mid + 1, high, depth + 1));
    }

    // Right to left within a level: the first key of each level extends the
    // array and every later one fills a gap.
    let mut bst = BinarySearchTree::new();
    for level in &levels {
        for &key in level.iter().rev() {
            bst.insert(key);
        }
    }

    assert_eq!(bst.len(), 1024);
    assert!(bst.tree().slots().len() < 4096);
    let sorted: Vec<i64> = bst.in_order().into_iter().copied().collect();
    assert_eq!(sorted, (0..1024).collect::<Vec<_>>());
    for key in [0, 511, 1023, 17, 900] {
        let node = bst.find(&key).unwrap();
        assert_eq!(bst.tree().element(node), Ok(&key));
    }
}

#[test]
fn test_bst_random_keys_stay_searchable() {
    let values = pseudo_random(1234, 60);
    let bst: BinarySearchTree<i64> = values.iter().copied().collect();

    assert_eq!(bst.len(), 60);
    for value in &values {
        assert!(bst.contains(value));
    }
    assert_eq!(bst.min(), values.iter().min());
    assert_eq!(bst.max(), values.iter().max());
}
