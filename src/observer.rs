//! Observer hook for watching a heap repair itself
//!
//! Every structural change an [`IndexedMinHeap`](crate::IndexedMinHeap) makes
//! is reported to its [`HeapObserver`] as a [`HeapEvent`], together with the
//! backing array as it stands right after the change. This keeps tracing and
//! visualization out of the data-structure code: a front end that wants to
//! print or draw each step plugs in an observer, everyone else uses the
//! zero-sized [`NoopObserver`] and pays nothing.
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::IndexedMinHeap;
//! use indexed_min_heap::observer::{EventLog, HeapEvent, SiftDirection, SwapReason};
//!
//! let mut heap = IndexedMinHeap::with_observer(EventLog::new());
//! heap.push(2);
//! heap.push(1);
//!
//! assert_eq!(
//!     heap.observer().events(),
//!     &[
//!         HeapEvent::Pushed { index: 0 },
//!         HeapEvent::Settled { index: 0, direction: SiftDirection::Up },
//!         HeapEvent::Pushed { index: 1 },
//!         HeapEvent::Swapped { i: 0, j: 1, reason: SwapReason::SiftUp },
//!     ]
//! );
//! ```

use std::fmt;

/// Why two slots were exchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapReason {
    /// A child moved above a larger parent
    SiftUp,
    /// A parent moved below its smallest child
    SiftDown,
    /// `pop` moved the root to the last slot before removing it
    RootWithLast,
    /// `delete_at` moved the target to the last slot before removing it
    DeleteWithLast,
}

impl fmt::Display for SwapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapReason::SiftUp => write!(f, "sift-up"),
            SwapReason::SiftDown => write!(f, "sift-down"),
            SwapReason::RootWithLast => write!(f, "root <-> last before removal"),
            SwapReason::DeleteWithLast => write!(f, "delete: swap with last"),
        }
    }
}

/// Direction of a sift pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiftDirection {
    Up,
    Down,
}

impl fmt::Display for SiftDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiftDirection::Up => write!(f, "sift-up"),
            SiftDirection::Down => write!(f, "sift-down"),
        }
    }
}

/// A single structural step taken by a heap
///
/// Events carry array indices only; the element values are available from
/// the slice passed alongside each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapEvent {
    /// An element was appended at `index`, before sifting up
    Pushed { index: usize },
    /// The elements at `i` and `j` were exchanged
    Swapped { i: usize, j: usize, reason: SwapReason },
    /// A sift pass starting at `index` found nothing to move
    Settled { index: usize, direction: SiftDirection },
    /// The element originally at `index` was removed and order restored
    Removed { index: usize },
    /// The whole array was rebuilt bottom-up
    Heapified { len: usize },
    /// All elements were discarded
    Cleared,
}

impl fmt::Display for HeapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapEvent::Pushed { index } => write!(f, "push: inserted at index {index}"),
            HeapEvent::Swapped { i, j, reason } => {
                write!(f, "swap ({reason}): index {i} <-> index {j}")
            }
            HeapEvent::Settled { index, direction } => {
                write!(f, "check: {direction} at index {index} (no change)")
            }
            HeapEvent::Removed { index } => write!(f, "delete: removed index {index}"),
            HeapEvent::Heapified { len } => write!(f, "heapify: rebuilt {len} elements"),
            HeapEvent::Cleared => write!(f, "clear"),
        }
    }
}

/// Receives every [`HeapEvent`] a heap emits
///
/// `data` is the backing array immediately after the step the event
/// describes, in array order.
pub trait HeapObserver<T> {
    fn on_event(&mut self, event: HeapEvent, data: &[T]);
}

/// Observer that ignores everything (the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<T> HeapObserver<T> for NoopObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: HeapEvent, _data: &[T]) {}
}

/// Observer that records events in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<HeapEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first
    pub fn events(&self) -> &[HeapEvent] {
        &self.events
    }

    /// Number of swaps recorded for the given reason
    pub fn swaps(&self, reason: SwapReason) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HeapEvent::Swapped { reason: r, .. } if *r == reason))
            .count()
    }

    /// Removes and returns the recorded events
    pub fn take(&mut self) -> Vec<HeapEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<T> HeapObserver<T> for EventLog {
    fn on_event(&mut self, event: HeapEvent, _data: &[T]) {
        self.events.push(event);
    }
}

/// Observer backed by a closure, see [`from_fn`]
#[derive(Clone)]
pub struct FnObserver<F> {
    f: F,
}

impl<F> fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObserver").finish_non_exhaustive()
    }
}

impl<T, F> HeapObserver<T> for FnObserver<F>
where
    F: FnMut(HeapEvent, &[T]),
{
    fn on_event(&mut self, event: HeapEvent, data: &[T]) {
        (self.f)(event, data)
    }
}

/// Wraps a closure as a [`HeapObserver`]
///
/// ```rust
/// use indexed_min_heap::IndexedMinHeap;
/// use indexed_min_heap::observer;
///
/// let mut lines = Vec::new();
/// let mut heap = IndexedMinHeap::with_observer(observer::from_fn(|event, data: &[i32]| {
///     lines.push(format!("{event} -> {data:?}"));
/// }));
/// heap.push(4);
/// heap.push(2);
/// drop(heap);
///
/// assert_eq!(lines[0], "push: inserted at index 0 -> [4]");
/// assert_eq!(lines[1], "check: sift-up at index 0 (no change) -> [4]");
/// assert_eq!(lines[3], "swap (sift-up): index 0 <-> index 1 -> [2, 4]");
/// ```
pub fn from_fn<T, F>(f: F) -> FnObserver<F>
where
    F: FnMut(HeapEvent, &[T]),
{
    FnObserver { f }
}
