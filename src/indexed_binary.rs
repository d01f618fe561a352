//! Indexed binary min-heap
//!
//! A dense-array binary min-heap whose slots can be addressed directly:
//! besides the usual push/peek/pop it can delete the element at any current
//! array index and rebuild itself from an arbitrary sequence in linear time.
//!
//! The array is read as a complete binary tree: the root lives at index 0,
//! the children of `i` at `2i + 1` and `2i + 2`, the parent of `i` at
//! `(i - 1) / 2`. Nothing else is stored; every relation is computed.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `push`         | O(log n) amortized |
//! | `pop`          | O(log n)           |
//! | `peek`         | O(1)               |
//! | `delete_at`    | O(log n)           |
//! | `heapify_from` | O(n)               |
//! | `len`, `clear` | O(1)               |
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::from_vec(vec![7, 3, 10, 9, 4, 12, 8, 15, 20, 5]);
//! assert_eq!(heap.peek(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.peek(), Ok(&4));
//!
//! heap.push(1);
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! let last = heap.len() - 1;
//! assert!(heap.delete_at(last).is_ok());
//! assert!(heap.is_heap());
//! ```

use crate::observer::{HeapEvent, HeapObserver, NoopObserver, SiftDirection, SwapReason};
use crate::traits::{Heap, HeapError, IndexedHeap};

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Returns the first index whose element is smaller than its parent's
///
/// `None` means `data` satisfies the heap-order property.
///
/// ```rust
/// use indexed_min_heap::first_violation;
///
/// assert_eq!(first_violation(&[1, 3, 2, 5]), None);
/// assert_eq!(first_violation(&[1, 3, 2, 0]), Some(3));
/// ```
pub fn first_violation<T: Ord>(data: &[T]) -> Option<usize> {
    (1..data.len()).find(|&i| data[i] < data[parent(i)])
}

/// An array-backed binary min-heap with index-addressed deletion
///
/// Elements order themselves through `T: Ord`; the smallest is always at
/// index 0. Equal elements are not kept in insertion order.
///
/// The second type parameter is an [`HeapObserver`] notified after every
/// structural step. It defaults to [`NoopObserver`], which compiles away.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, O = NoopObserver> {
    /// Elements in array (level) order
    data: Vec<T>,
    observer: O,
}

impl<T: Ord> IndexedMinHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }

    /// Creates an empty heap that can hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            observer: NoopObserver,
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with_observer(data, NoopObserver)
    }
}

impl<T: Ord, O: HeapObserver<T>> IndexedMinHeap<T, O> {
    /// Creates an empty heap reporting to `observer`
    pub fn with_observer(observer: O) -> Self {
        Self {
            data: Vec::new(),
            observer,
        }
    }

    /// Builds a heap from an arbitrary vector in O(n), reporting to `observer`
    pub fn from_vec_with_observer(data: Vec<T>, observer: O) -> Self {
        let mut heap = Self { data, observer };
        heap.build();
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Inserts an element
    ///
    /// The element is appended at index `len()` and sifted up.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let index = self.data.len() - 1;
        self.emit(HeapEvent::Pushed { index });
        self.sift_up(index);
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data
            .first()
            .ok_or(HeapError::EmptyStructure { operation: "peek" })
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyStructure { operation: "pop" });
        }

        let last = self.data.len() - 1;
        if last > 0 {
            self.swap(0, last, SwapReason::RootWithLast);
        }
        let min = self.remove_last();

        if !self.data.is_empty() {
            self.sift_down(0);
        }
        self.emit(HeapEvent::Removed { index: 0 });

        Ok(min)
    }

    /// Removes and returns the element currently stored at `index`
    ///
    /// The last element takes the vacated slot and is then sifted in exactly
    /// one direction: up if it is smaller than its new parent, down
    /// otherwise.
    ///
    /// # Errors
    /// [`HeapError::IndexOutOfRange`] if `index >= len()`. The heap is left
    /// untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use indexed_min_heap::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
    /// let position = heap.iter().position(|&x| x == 9).unwrap();
    /// assert_eq!(heap.delete_at(position), Ok(9));
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8]);
    /// ```
    pub fn delete_at(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::IndexOutOfRange { index, len });
        }

        let last = len - 1;
        if index == last {
            let removed = self.remove_last();
            self.emit(HeapEvent::Removed { index });
            return Ok(removed);
        }

        self.swap(index, last, SwapReason::DeleteWithLast);
        let removed = self.remove_last();

        // The moved-in element came from a different subtree. If it is below
        // its new parent, everything under `index` is already >= the old
        // occupant and therefore >= it; otherwise the ancestors are fine.
        if index > 0 && self.data[index] < self.data[parent(index)] {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        self.emit(HeapEvent::Removed { index });

        Ok(removed)
    }

    /// Replaces the contents with `data` and rebuilds bottom-up in O(n)
    ///
    /// Existing capacity is reused.
    pub fn heapify_from<I: IntoIterator<Item = T>>(&mut self, data: I) {
        self.data.clear();
        self.data.extend(data);
        self.build();
    }

    /// Discards every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
        self.emit(HeapEvent::Cleared);
    }

    /// The elements in array order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates in array order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the backing vector in array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Splits the heap into its backing vector and its observer
    pub fn into_parts(self) -> (Vec<T>, O) {
        (self.data, self.observer)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Checks the heap-order property over the whole array
    ///
    /// O(n). Always true after a public operation returns.
    pub fn is_heap(&self) -> bool {
        first_violation(&self.data).is_none()
    }

    /// Appends `items` and restores order
    ///
    /// A batch at least as large as the current heap is cheaper to fold in by
    /// rebuilding; a smaller one is sifted up element by element.
    pub(crate) fn append_items<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let start = self.data.len();
        self.data.extend(items);
        let added = self.data.len() - start;

        if added == 0 {
            return;
        }
        if added >= start {
            self.build();
        } else {
            for index in start..self.data.len() {
                self.emit(HeapEvent::Pushed { index });
                self.sift_up(index);
            }
        }
    }

    /// Bottom-up heap construction over the whole array
    fn build(&mut self) {
        // Internal nodes are 0..=(n - 2) / 2, i.e. 0..n / 2.
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
        self.emit(HeapEvent::Heapified {
            len: self.data.len(),
        });
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        let start = index;
        while index > 0 {
            let parent = parent(index);
            if self.data[parent] <= self.data[index] {
                break;
            }
            self.swap(parent, index, SwapReason::SiftUp);
            index = parent;
        }

        if index == start {
            self.emit(HeapEvent::Settled {
                index: start,
                direction: SiftDirection::Up,
            });
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        let start = index;
        loop {
            let left = left_child(index);
            let right = left + 1;
            let mut smallest = index;

            // Children must be strictly smaller to displace the parent.
            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest, SwapReason::SiftDown);
            index = smallest;
        }

        if index == start {
            self.emit(HeapEvent::Settled {
                index: start,
                direction: SiftDirection::Down,
            });
        }
    }

    fn swap(&mut self, i: usize, j: usize, reason: SwapReason) {
        self.data.swap(i, j);
        self.emit(HeapEvent::Swapped { i, j, reason });
    }

    /// Removes the final slot. Only called on a non-empty heap.
    fn remove_last(&mut self) -> T {
        let last = self.data.len() - 1;
        // Removing the final slot moves nothing, so this is a plain O(1) pop.
        self.data.swap_remove(last)
    }

    #[inline]
    fn emit(&mut self, event: HeapEvent) {
        self.observer.on_event(event, &self.data);
    }
}

impl<T: Ord, O: HeapObserver<T> + Default> Default for IndexedMinHeap<T, O> {
    fn default() -> Self {
        Self::with_observer(O::default())
    }
}

impl<T: Ord, O: HeapObserver<T> + Default> Heap<T> for IndexedMinHeap<T, O> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        IndexedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }

    fn push(&mut self, item: T) {
        IndexedMinHeap::push(self, item)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        IndexedMinHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        IndexedMinHeap::pop(self)
    }

    fn clear(&mut self) {
        IndexedMinHeap::clear(self)
    }

    fn merge(&mut self, other: Self) {
        self.append_items(other.into_vec());
    }
}

impl<T: Ord, O: HeapObserver<T> + Default> IndexedHeap<T> for IndexedMinHeap<T, O> {
    fn delete_at(&mut self, index: usize) -> Result<T, HeapError> {
        IndexedMinHeap::delete_at(self, index)
    }

    fn heapify_from<I: IntoIterator<Item = T>>(&mut self, data: I) {
        IndexedMinHeap::heapify_from(self, data)
    }

    fn as_slice(&self) -> &[T] {
        IndexedMinHeap::as_slice(self)
    }
}
