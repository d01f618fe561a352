//! Common traits and the error type for array-backed heaps
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base priority-queue operations (push, peek, pop)
//! - [`IndexedHeap`]: Adds operations that address the backing array directly
//!   (`delete_at`, bulk `heapify_from`, array-order snapshots)
//!
//! Unlike `std::collections::BinaryHeap`, fallible operations report a
//! [`HeapError`] instead of returning `None`, so callers can tell an empty
//! heap apart from a stale index. See [`StdHeap`](crate::stdlib_compat::StdHeap)
//! for an `Option`-returning adapter.

use thiserror::Error;

/// Error type for heap operations
///
/// Both kinds are detected before the heap is touched, so a failed call
/// leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `pop` or `peek` was called on a heap with no elements
    #[error("{operation} on an empty heap")]
    EmptyStructure {
        /// Name of the operation that failed
        operation: &'static str,
    },
    /// `delete_at` was given an index outside `0..len`
    #[error("index {index} out of range for heap of length {len}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Heap length at the time of the call
        len: usize,
    },
}

/// Base trait for min-ordered heap/priority queue data structures
///
/// Elements are their own priority: `T: Ord` decides the order, and the
/// smallest element is always at the front. For max-heap behavior wrap
/// elements in [`std::cmp::Reverse`].
///
/// # Example
///
/// ```rust
/// use indexed_min_heap::{Heap, IndexedMinHeap};
///
/// let mut heap: IndexedMinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized (the backing vector may grow).
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Removes every element
    fn clear(&mut self);

    /// Moves every element of `other` into this heap, consuming `other`
    ///
    /// # Time Complexity
    /// O(n + m) when `other` is at least as large as `self`, otherwise
    /// O(m log(n + m)).
    fn merge(&mut self, other: Self);
}

/// Extended heap trait for heaps that expose their backing array
///
/// Array positions are not stable identities: every push, pop or delete can
/// move elements. Callers that need to delete a particular logical element
/// must track its current index themselves.
///
/// # Example
///
/// ```rust
/// use indexed_min_heap::{Heap, IndexedHeap, IndexedMinHeap};
///
/// let mut heap: IndexedMinHeap<i32> = Heap::new();
/// heap.heapify_from(vec![5, 3, 8, 1, 9, 2]);
/// assert_eq!(heap.as_slice(), &[1, 3, 2, 5, 9, 8]);
///
/// assert_eq!(heap.delete_at(2), Ok(2));
/// assert_eq!(heap.as_slice(), &[1, 3, 8, 5, 9]);
/// ```
pub trait IndexedHeap<T: Ord>: Heap<T> {
    /// Removes and returns the element currently stored at `index`
    ///
    /// # Errors
    /// [`HeapError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn delete_at(&mut self, index: usize) -> Result<T, HeapError>;

    /// Replaces the contents with `data` and restores heap order bottom-up
    ///
    /// # Time Complexity
    /// O(n)
    fn heapify_from<I: IntoIterator<Item = T>>(&mut self, data: I);

    /// Returns the elements in array (level) order, not sorted order
    fn as_slice(&self) -> &[T];
}
