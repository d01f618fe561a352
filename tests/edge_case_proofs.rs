//! Exhaustive edge case checks on small heaps
//!
//! `delete_at` repairs in a single direction, chosen by comparing the
//! moved-in element with its new parent. These tests enumerate every heap
//! shape up to a small size and every deletable index, and check that:
//!
//! - the heap-order property holds afterwards
//! - exactly the addressed element was removed
//! - no deletion needed both sift-up and sift-down swaps
//!
//! Inputs cover all permutations of distinct keys and all arrays over a
//! three-letter alphabet, so duplicate keys are exercised too.

use indexed_min_heap::observer::{EventLog, HeapEvent, SwapReason};
use indexed_min_heap::{first_violation, HeapError, IndexedMinHeap};

/// All permutations of `items` (Heap's algorithm)
fn permutations(items: &mut Vec<u8>, k: usize, out: &mut Vec<Vec<u8>>) {
    if k <= 1 {
        out.push(items.clone());
        return;
    }
    for i in 0..k - 1 {
        permutations(items, k - 1, out);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
    permutations(items, k - 1, out);
}

/// All arrays of length `len` over `0..alphabet`
fn words(len: usize, alphabet: u8) -> Vec<Vec<u8>> {
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..alphabet).map(move |c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect();
    }
    out
}

fn multiset(mut values: Vec<u8>) -> Vec<u8> {
    values.sort_unstable();
    values
}

/// Deletes every index of the heap built from `input` and checks the outcome
fn check_every_deletion(input: &[u8]) {
    let base = IndexedMinHeap::from_vec_with_observer(input.to_vec(), EventLog::new());
    assert!(base.is_heap(), "heapify failed for {:?}", input);

    for index in 0..base.len() {
        let mut heap = base.clone();
        heap.observer_mut().take();

        let mut expected = base.as_slice().to_vec();
        let target = expected.remove(index);

        assert_eq!(heap.delete_at(index), Ok(target));
        assert_eq!(
            first_violation(heap.as_slice()),
            None,
            "order broken deleting index {} of {:?} -> {:?}",
            index,
            base.as_slice(),
            heap.as_slice()
        );
        assert_eq!(multiset(heap.as_slice().to_vec()), multiset(expected));

        let log = heap.observer();
        let ups = log.swaps(SwapReason::SiftUp);
        let downs = log.swaps(SwapReason::SiftDown);
        assert!(
            ups == 0 || downs == 0,
            "deleting index {} of {:?} sifted both ways",
            index,
            base.as_slice()
        );
        assert_eq!(log.events().last(), Some(&HeapEvent::Removed { index }));
    }
}

#[test]
fn test_delete_all_permutations_up_to_seven() {
    for n in 1..=7u8 {
        let mut items: Vec<u8> = (0..n).collect();
        let mut all = Vec::new();
        permutations(&mut items, n as usize, &mut all);

        for perm in &all {
            check_every_deletion(perm);
        }
    }
}

#[test]
fn test_delete_all_words_with_duplicates() {
    for len in 1..=8 {
        for word in words(len, 3) {
            check_every_deletion(&word);
        }
    }
}

#[test]
fn test_delete_needs_sift_up_somewhere() {
    // Sanity check that the enumeration actually reaches the upward case.
    let mut saw_up = false;
    let mut saw_down = false;

    let mut items: Vec<u8> = (0..7).collect();
    let mut all = Vec::new();
    permutations(&mut items, 7, &mut all);

    for perm in all {
        let base = IndexedMinHeap::from_vec_with_observer(perm, EventLog::new());
        for index in 0..base.len() {
            let mut heap = base.clone();
            heap.observer_mut().take();
            heap.delete_at(index).unwrap();
            saw_up |= heap.observer().swaps(SwapReason::SiftUp) > 0;
            saw_down |= heap.observer().swaps(SwapReason::SiftDown) > 0;
        }
    }

    assert!(saw_up);
    assert!(saw_down);
}

#[test]
fn test_single_element() {
    let mut heap = IndexedMinHeap::from_vec(vec![42]);
    assert_eq!(heap.peek(), Ok(&42));
    assert_eq!(heap.delete_at(0), Ok(42));
    assert!(heap.is_empty());
    assert_eq!(
        heap.delete_at(0),
        Err(HeapError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_two_elements_delete_root() {
    let mut heap = IndexedMinHeap::from_vec(vec![2, 1]);
    assert_eq!(heap.as_slice(), &[1, 2]);
    assert_eq!(heap.delete_at(0), Ok(1));
    assert_eq!(heap.as_slice(), &[2]);
}

#[test]
fn test_repeated_push_pop_same_value() {
    let mut heap = IndexedMinHeap::new();
    for _ in 0..100 {
        heap.push(7);
        heap.push(7);
        assert_eq!(heap.pop(), Ok(7));
    }
    assert_eq!(heap.len(), 100);
    assert!(heap.is_heap());
}

#[test]
fn test_extreme_values() {
    let mut heap = IndexedMinHeap::new();
    heap.push(i64::MAX);
    heap.push(i64::MIN);
    heap.push(0);

    assert_eq!(heap.pop(), Ok(i64::MIN));
    assert_eq!(heap.pop(), Ok(0));
    assert_eq!(heap.pop(), Ok(i64::MAX));
}

#[test]
fn test_stale_index_after_mutation() {
    // An index recorded before a pop may point at a different element later.
    let mut heap = IndexedMinHeap::from_vec(vec![1, 2, 3]);
    let index_of_three = heap.iter().position(|&x| x == 3).unwrap();
    heap.pop().unwrap();

    assert_eq!(heap.len(), 2);
    assert_eq!(
        heap.delete_at(index_of_three),
        Err(HeapError::IndexOutOfRange { index: 2, len: 2 })
    );
}
