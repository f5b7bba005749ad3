//! Common traits for the heap types in this crate.
//!
//! The hierarchy has two tiers:
//!
//! - [`Heap`]: base trait covering plain priority-queue use (push, peek, pop)
//! - [`DecreaseKeyHeap`]: extended trait adding handle-based reprioritization
//!
//! The base [`Heap`] trait follows the familiar standard-library heap API
//! shape, except that these heaps are min-heaps and store (priority, item)
//! pairs so the ordering key stays separate from the data. The extended
//! trait is what shortest-path computations program against: they keep the
//! handle returned at insertion and lower the key in place when a cheaper
//! route to an entry is found.

use std::fmt;

/// Error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new key is greater than the element's current key.
    ///
    /// `decrease_key` only moves keys downward; an equal key is accepted as
    /// a no-op. Use `update_key` on heaps that support raising a key.
    KeyNotDecreased,
    /// The handle is stale: its element was released or the heap was
    /// cleared. Staleness is tracked per heap; see the handle type for the
    /// cross-heap caveat.
    InvalidHandle,
    /// The node is currently linked into the heap, so it cannot be inserted
    /// again or have its storage reclaimed.
    AlreadyQueued,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyNotDecreased => {
                write!(f, "new key is greater than the current key")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
            HeapError::AlreadyQueued => {
                write!(f, "node is currently queued in the heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for reprioritization.
///
/// This is an opaque type that identifies a specific element in the heap.
/// The exact implementation varies by heap type; handles may be `Clone` but
/// not necessarily `Copy`. A handle is only meaningful to the heap instance
/// that issued it; using it with any other heap is a logic error that heaps
/// are not required to detect.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures.
///
/// # Example
///
/// ```rust
/// use linkstate_heap::Heap;
/// use linkstate_heap::linked_binary::LinkedBinaryHeap;
///
/// let mut heap = LinkedBinaryHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap.
    fn new() -> Self;

    /// Returns true if the heap is empty.
    fn is_empty(&self) -> bool;

    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Inserts an element with the given priority.
    ///
    /// # Time Complexity
    /// O(log n).
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it.
    ///
    /// # Time Complexity
    /// O(1).
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item, or
    /// `None` when the heap is empty. An empty heap is the expected
    /// terminal condition of a drain loop, not an error.
    ///
    /// # Time Complexity
    /// O(log n).
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Extended heap trait with handle-based `decrease_key` support.
///
/// `push_with_handle` returns a handle that stays valid across every
/// internal reorganization of the heap, so callers can ask about or
/// reprioritize a specific queued element long after inserting it. This is
/// the operation shortest-path algorithms rely on when a better candidate
/// distance is found for an entry already in the queue.
///
/// # Example
///
/// ```rust
/// use linkstate_heap::{DecreaseKeyHeap, Heap};
/// use linkstate_heap::linked_binary::LinkedBinaryHeap;
///
/// let mut heap = LinkedBinaryHeap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait DecreaseKeyHeap<T, P: Ord>: Heap<T, P> {
    /// The handle type for this heap.
    type Handle: Handle;

    /// Inserts an element with the given priority, returning a handle that
    /// can be used later with `decrease_key`.
    ///
    /// # Time Complexity
    /// O(log n).
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Lowers the key of the element identified by the handle and restores
    /// heap order. Passing the element's current key is accepted and does
    /// nothing.
    ///
    /// # Errors
    /// [`HeapError::KeyNotDecreased`] if `new_priority` is greater than the
    /// current key, [`HeapError::InvalidHandle`] if the handle is stale.
    ///
    /// # Time Complexity
    /// O(log n).
    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError>;
}
