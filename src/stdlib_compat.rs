//! Standard library compatibility layer
//!
//! Conversions and iterator traits for [`IndexedMinHeap`], plus [`StdHeap`],
//! an adapter with the `Option`-returning API of `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: These are min-heaps, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//! - **Iteration order**: `iter()` and `into_iter()` walk the backing array,
//!   which is neither sorted nor insertion order. Use
//!   [`IndexedMinHeap::into_sorted_vec`] for ascending output.
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::stdlib_compat::StdHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::indexed_binary::IndexedMinHeap;
use crate::observer::HeapObserver;
use crate::traits::Heap;

impl<T: Ord, O: HeapObserver<T>> IndexedMinHeap<T, O> {
    /// Consumes the heap and returns its elements in ascending order
    ///
    /// ```rust
    /// use indexed_min_heap::IndexedMinHeap;
    ///
    /// let heap: IndexedMinHeap<_> = [4, 1, 3, 1].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 1, 3, 4]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T: Ord> From<Vec<T>> for IndexedMinHeap<T> {
    /// Heapifies `data` in O(n)
    fn from(data: Vec<T>) -> Self {
        IndexedMinHeap::from_vec(data)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for IndexedMinHeap<T> {
    fn from(data: [T; N]) -> Self {
        IndexedMinHeap::from_vec(Vec::from(data))
    }
}

impl<T: Ord, O: HeapObserver<T>> From<IndexedMinHeap<T, O>> for Vec<T> {
    /// Returns the backing array, in array order
    fn from(heap: IndexedMinHeap<T, O>) -> Self {
        heap.into_vec()
    }
}

impl<T: Ord> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IndexedMinHeap::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, O: HeapObserver<T>> Extend<T> for IndexedMinHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_items(iter);
    }
}

impl<'a, T: Ord + Copy + 'a, O: HeapObserver<T>> Extend<&'a T> for IndexedMinHeap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_items(iter.into_iter().copied());
    }
}

impl<T: Ord, O: HeapObserver<T>> IntoIterator for IndexedMinHeap<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates the backing array in array order
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T: Ord, O: HeapObserver<T>> IntoIterator for &'a IndexedMinHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A drop-in replacement for `std::collections::BinaryHeap`
///
/// Wraps any [`Heap`] and turns its `Result`-returning `peek`/`pop` into the
/// `Option`-returning shape `BinaryHeap` users expect.
///
/// # Type Parameters
/// - `T`: The item type, must implement `Ord`
/// - `H`: The underlying heap implementation (defaults to [`IndexedMinHeap<T>`])
pub struct StdHeap<T: Ord, H: Heap<T> = IndexedMinHeap<T>> {
    heap: H,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Ord, H: Heap<T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::new())
    }

    /// Wraps an existing heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().ok()
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    /// Drops all items from the heap
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Moves all items of `other` into `self`, leaving `other` empty
    ///
    /// This is equivalent to `BinaryHeap::append`.
    pub fn append(&mut self, other: &mut Self) {
        let taken = std::mem::replace(&mut other.heap, H::new());
        self.heap.merge(taken);
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: Heap<T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
