//! Indexed Binary Min-Heap for Rust
//!
//! This crate provides an array-backed binary min-heap whose slots can be
//! addressed by index, for priority-queue clients that need more than
//! push/pop but do not want the pointer-based machinery of a
//! `decrease_key` heap.
//!
//! # Features
//!
//! - **push / pop / peek**: O(log n) / O(log n) / O(1), min-ordered by `T: Ord`
//! - **delete_at**: remove the element at any current array index in O(log n),
//!   repairing in exactly one direction
//! - **heapify_from**: rebuild from an arbitrary sequence in O(n), bottom-up
//! - **Observer hook**: every swap, insert and removal can be reported to a
//!   [`HeapObserver`](observer::HeapObserver) for tracing or visualization
//! - **Typed errors**: [`HeapError`] distinguishes an empty heap from a stale index
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::{HeapError, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.heapify_from(vec![7, 3, 10, 9, 4]);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.delete_at(0), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(
//!     heap.delete_at(10),
//!     Err(HeapError::IndexOutOfRange { index: 10, len: 4 })
//! );
//! ```

pub mod indexed_binary;
pub mod observer;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use indexed_binary::{first_violation, IndexedMinHeap};
pub use traits::{Heap, HeapError, IndexedHeap};
