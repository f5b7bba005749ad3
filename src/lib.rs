//! Priority queue for link-state routing workloads: a pointer-linked
//! binary min-heap with decrease-key and stable per-element handles.
//!
//! A shortest-path (SPF) computation over a routing topology pushes every
//! candidate route keyed by path cost, repeatedly extracts the cheapest,
//! and lowers keys in place when a better path to an already-queued
//! destination appears. This crate provides the heap that workload wants:
//!
//! * **Stable handles.** Elements are never moved in memory; the tree is
//!   reshaped by relinking. A handle taken at insert time stays valid
//!   across every subsequent operation until the element is released.
//! * **Decrease-key and general reprioritization.** Keys can be lowered
//!   (the Dijkstra relaxation step) or moved in either direction, in
//!   O(log n).
//! * **O(1) membership.** Whether an element is currently queued is read
//!   straight off its links, no lookup structure required.
//! * **Storage beyond membership.** Extracted nodes stay allocated with
//!   their payload until explicitly released, so entries can cycle in and
//!   out of the queue without reallocating.
//!
//! The heap lives in [`linked_binary`]; the [`Heap`] and
//! [`DecreaseKeyHeap`] traits describe the operation surface so callers
//! can stay generic over the implementation.
//!
//! # Example
//!
//! Edge relaxation over a three-node topology:
//!
//! ```rust
//! use linkstate_heap::{LinkCost, LinkedBinaryHeap};
//!
//! let mut candidates: LinkedBinaryHeap<&str, LinkCost> = LinkedBinaryHeap::new();
//! candidates.push_with_handle(0, "self");
//! let b = candidates.push_with_handle(30, "b");
//! candidates.push_with_handle(10, "a");
//!
//! // settling "a" reveals a cheaper two-hop path to "b"
//! let (_, settled) = candidates.pop().unwrap();
//! assert_eq!(settled, "self");
//! candidates.decrease_key(&b, 15).unwrap();
//!
//! assert_eq!(candidates.pop(), Some((10, "a")));
//! assert_eq!(candidates.pop(), Some((15, "b")));
//! ```

pub mod linked_binary;
pub mod traits;

pub use linked_binary::{LinkedBinaryHandle, LinkedBinaryHeap};
pub use traits::{DecreaseKeyHeap, Handle, Heap, HeapError};

/// Path cost as link-state routing protocols carry it on the wire.
///
/// The default key type of [`LinkedBinaryHeap`]; any `Ord` type may be
/// used instead.
pub type LinkCost = u32;
