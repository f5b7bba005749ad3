//! Pointer-linked binary min-heap with stable node handles.
//!
//! Unlike the array-backed binary heap in the standard library, this heap
//! has no backing vector: every node carries `parent`/`left`/`right` links
//! and the complete-binary-tree shape is maintained purely through those
//! links, a tracked `last` position, and the binary representation of the
//! node count. Reordering swaps subtrees by relinking instead of moving
//! element data, so a node keeps its identity (and its handle) for as long
//! as it exists, no matter how often the tree is rearranged around it.
//!
//! The design comes from the priority queue at the heart of a link-state
//! routing daemon's shortest-path (SPF) pass: route candidates are queued
//! by path cost, the cheapest is extracted, and neighbors are requeued or
//! reprioritized as better paths appear. That consumer holds on to node
//! references across heap operations and needs "is this entry queued?"
//! answered in O(1), which is exactly what the link-based membership rule
//! provides.
//!
//! Nodes live in a generational arena ([`slotmap`]), so handles are plain
//! copyable keys: a stale handle (element released, heap cleared) is
//! detected instead of dangling. Node storage outlives queue membership:
//! extracting the minimum parks the node in the arena with its payload
//! intact, and the caller may reinsert, reprioritize, or release it.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `push`          | O(log n)   |
//! | `pop`           | O(log n)   |
//! | `peek`          | O(1)       |
//! | `decrease_key`  | O(log n)   |
//! | `update_key`    | O(log n)   |
//! | `extract_min`   | O(log n)   |
//! | `contains`      | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use linkstate_heap::linked_binary::LinkedBinaryHeap;
//!
//! // Route candidates keyed by path cost.
//! let mut queue = LinkedBinaryHeap::new();
//! let relay = queue.push_with_handle(40, "fd00::2");
//! queue.push_with_handle(10, "fd00::1");
//!
//! // A cheaper path to the relayed destination appeared.
//! queue.decrease_key(&relay, 5).unwrap();
//!
//! assert_eq!(queue.pop(), Some((5, "fd00::2")));
//! assert_eq!(queue.pop(), Some((10, "fd00::1")));
//! ```

use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use crate::LinkCost;
use slotmap::{new_key_type, Key, SlotMap};
use std::cmp::Ordering;
use std::collections::VecDeque;

new_key_type! {
    /// Arena key for heap nodes; the null key stands in for "no link".
    struct NodeKey;
}

/// Handle to an element in a [`LinkedBinaryHeap`].
///
/// Wraps a generational arena key, so it is cheap to copy and safe to keep
/// around: using it after the element was released (or the heap cleared)
/// yields `false`/`None`/[`HeapError::InvalidHandle`] rather than touching
/// freed storage. A handle survives every sift and swap inside the heap
/// because reordering moves links, never elements.
///
/// A handle is only meaningful to the heap that issued it. Generations are
/// tracked per arena, so presenting a handle to a different heap instance
/// cannot be detected: every operation stays memory safe, but the handle
/// may name an unrelated element there. Mixing handles across heaps is a
/// logic error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LinkedBinaryHandle {
    node: NodeKey,
}

impl Handle for LinkedBinaryHandle {}

/// Internal node record: ordering key, three tree links, payload.
///
/// All links are null for a detached (allocated but unqueued) node. A
/// queued node either has a parent or is the root.
#[derive(Debug)]
struct Node<T, P> {
    priority: P,
    parent: NodeKey,
    left: NodeKey,
    right: NodeKey,
    item: T,
}

/// Pointer-linked binary min-heap.
///
/// The controller tracks the queued count, the root, and the node occupying
/// the last position in level order (bottom level, rightmost occupied
/// slot). Both sift directions are expressed through the same two rotation
/// primitives, `swap_with_left` and `swap_with_right`, which exchange a
/// node with one of its children by relinking alone.
///
/// The default key type is [`LinkCost`], the routing path-cost type this
/// queue was built around; any `P: Ord` works.
///
/// # Example
///
/// ```rust
/// use linkstate_heap::linked_binary::LinkedBinaryHeap;
///
/// let mut heap = LinkedBinaryHeap::new();
/// let h = heap.push_with_handle(3u32, "entry");
/// let min = heap.extract_min().unwrap();
/// assert_eq!(min, h);                    // same element, same handle
/// assert!(!heap.contains(&h));           // parked, no longer queued
/// assert_eq!(heap.release(h), Ok((3, "entry")));
/// ```
#[derive(Debug)]
pub struct LinkedBinaryHeap<T, P: Ord = LinkCost> {
    nodes: SlotMap<NodeKey, Node<T, P>>,
    /// Queued count; the arena may hold additional detached nodes.
    len: usize,
    root: NodeKey,
    last: NodeKey,
}

impl<T, P: Ord> LinkedBinaryHeap<T, P> {
    /// Creates a new empty heap.
    pub fn new() -> Self {
        LinkedBinaryHeap {
            nodes: SlotMap::with_key(),
            len: 0,
            root: NodeKey::null(),
            last: NodeKey::null(),
        }
    }

    /// Creates a new empty heap with preallocated arena capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedBinaryHeap {
            nodes: SlotMap::with_capacity_and_key(capacity),
            len: 0,
            root: NodeKey::null(),
            last: NodeKey::null(),
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no elements are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the arena, queued or parked.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.nodes.len()
    }

    /// Empties the heap and frees every node, queued or parked.
    ///
    /// All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.len = 0;
        self.root = NodeKey::null();
        self.last = NodeKey::null();
    }

    /// Allocates a detached node carrying `priority` and `item`.
    ///
    /// The node is parked: it owns storage in the arena but is not queued
    /// until [`insert`](Self::insert) links it. Parked nodes are what a
    /// routing table keeps for entries that cycle in and out of the
    /// candidate queue without reallocating.
    pub fn alloc(&mut self, priority: P, item: T) -> LinkedBinaryHandle {
        let node = self.nodes.insert(Node {
            priority,
            parent: NodeKey::null(),
            left: NodeKey::null(),
            right: NodeKey::null(),
            item,
        });
        LinkedBinaryHandle { node }
    }

    /// Links a detached node into the heap.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the handle is stale,
    /// [`HeapError::AlreadyQueued`] if the node is already linked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkstate_heap::linked_binary::LinkedBinaryHeap;
    ///
    /// let mut heap = LinkedBinaryHeap::new();
    /// let parked = heap.alloc(7, "candidate");
    /// assert!(!heap.contains(&parked));
    /// heap.insert(&parked).unwrap();
    /// assert!(heap.contains(&parked));
    /// ```
    pub fn insert(&mut self, handle: &LinkedBinaryHandle) -> Result<(), HeapError> {
        if !self.nodes.contains_key(handle.node) {
            return Err(HeapError::InvalidHandle);
        }
        if self.is_linked(handle.node) {
            return Err(HeapError::AlreadyQueued);
        }
        self.link(handle.node);
        Ok(())
    }

    /// Allocates and immediately queues an element, returning its handle.
    pub fn push_with_handle(&mut self, priority: P, item: T) -> LinkedBinaryHandle {
        let handle = self.alloc(priority, item);
        self.link(handle.node);
        handle
    }

    /// Removes the minimum node from the queue and returns its handle, or
    /// `None` when the heap is empty.
    ///
    /// The node stays in the arena with its links cleared and its payload
    /// intact: the caller can read it, reprioritize it, reinsert it, or
    /// [`release`](Self::release) it. `None` on empty is the expected
    /// terminal condition of a drain loop, not an error.
    pub fn extract_min(&mut self) -> Option<LinkedBinaryHandle> {
        if self.len == 0 {
            return None;
        }
        let min = self.root;
        self.len -= 1;
        if self.len == 0 {
            self.root = NodeKey::null();
            self.last = NodeKey::null();
        } else if self.len == 1 {
            // the survivor is the old last node
            let survivor = self.last;
            self.nodes[survivor].parent = NodeKey::null();
            self.root = survivor;
        } else {
            // detach the last node, then relocate the last position
            let relocated = self.last;
            let parent = self.nodes[relocated].parent;
            if self.nodes[parent].left == relocated {
                self.nodes[parent].left = NodeKey::null();
                self.last = parent;
                self.last = self.pred_last();
            } else {
                self.nodes[parent].right = NodeKey::null();
                self.last = self.nodes[parent].left;
            }
            // read the root's children only after the detach above: when
            // the detached node was a child of the root its link is gone
            // already, so the promoted node can never point at itself
            let (left, right) = {
                let m = &self.nodes[min];
                (m.left, m.right)
            };
            self.nodes[relocated].left = left;
            if !left.is_null() {
                self.nodes[left].parent = relocated;
            }
            self.nodes[relocated].right = right;
            if !right.is_null() {
                self.nodes[right].parent = relocated;
            }
            self.nodes[relocated].parent = NodeKey::null();
            self.root = relocated;
            self.sift_down(relocated);
        }
        let extracted = &mut self.nodes[min];
        extracted.parent = NodeKey::null();
        extracted.left = NodeKey::null();
        extracted.right = NodeKey::null();
        Some(LinkedBinaryHandle { node: min })
    }

    /// Removes and returns the minimum priority and associated item,
    /// freeing the node's storage. `None` when the heap is empty.
    pub fn pop(&mut self) -> Option<(P, T)> {
        let handle = self.extract_min()?;
        let node = self.nodes.remove(handle.node)?;
        Some((node.priority, node.item))
    }

    /// Frees a parked node's storage, moving its key and payload out.
    ///
    /// # Errors
    /// [`HeapError::AlreadyQueued`] if the node is still linked (extract it
    /// first), [`HeapError::InvalidHandle`] if the handle is stale.
    pub fn release(&mut self, handle: LinkedBinaryHandle) -> Result<(P, T), HeapError> {
        if self.nodes.contains_key(handle.node) && self.is_linked(handle.node) {
            return Err(HeapError::AlreadyQueued);
        }
        let node = self.nodes.remove(handle.node).ok_or(HeapError::InvalidHandle)?;
        Ok((node.priority, node.item))
    }

    /// Lowers the key of the element identified by the handle and sifts it
    /// toward the root. Passing the current key is accepted as a no-op; on
    /// a parked node the key is simply assigned.
    ///
    /// # Errors
    /// [`HeapError::KeyNotDecreased`] if `new_priority` is greater than the
    /// current key, [`HeapError::InvalidHandle`] if the handle is stale.
    pub fn decrease_key(
        &mut self,
        handle: &LinkedBinaryHandle,
        new_priority: P,
    ) -> Result<(), HeapError> {
        let node = self
            .nodes
            .get_mut(handle.node)
            .ok_or(HeapError::InvalidHandle)?;
        if new_priority > node.priority {
            return Err(HeapError::KeyNotDecreased);
        }
        node.priority = new_priority;
        self.sift_up(handle.node);
        Ok(())
    }

    /// Moves the element's key in either direction and restores heap order,
    /// sifting up on a lowered key and down on a raised one.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the handle is stale.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkstate_heap::linked_binary::LinkedBinaryHeap;
    ///
    /// let mut heap = LinkedBinaryHeap::new();
    /// let a = heap.push_with_handle(1, 'a');
    /// heap.push_with_handle(2, 'b');
    /// heap.update_key(&a, 9).unwrap();       // demote the entry behind 'b'
    /// assert_eq!(heap.pop(), Some((2, 'b')));
    /// assert_eq!(heap.pop(), Some((9, 'a')));
    /// ```
    pub fn update_key(
        &mut self,
        handle: &LinkedBinaryHandle,
        new_priority: P,
    ) -> Result<(), HeapError> {
        let node = self
            .nodes
            .get_mut(handle.node)
            .ok_or(HeapError::InvalidHandle)?;
        let direction = new_priority.cmp(&node.priority);
        node.priority = new_priority;
        match direction {
            Ordering::Less => self.sift_up(handle.node),
            Ordering::Greater => self.sift_down(handle.node),
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Returns the minimum priority and associated item without removing
    /// anything.
    #[inline]
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.nodes.get(self.root).map(|n| (&n.priority, &n.item))
    }

    /// Returns a handle to the current minimum without removing it.
    #[inline]
    pub fn peek_handle(&self) -> Option<LinkedBinaryHandle> {
        if self.root.is_null() {
            None
        } else {
            Some(LinkedBinaryHandle { node: self.root })
        }
    }

    /// Returns true if the node is currently queued.
    ///
    /// O(1): a node is queued exactly when it has any link set or is the
    /// root (the one-element heap has a root with no links at all). A
    /// stale handle returns false.
    #[inline]
    pub fn contains(&self, handle: &LinkedBinaryHandle) -> bool {
        match self.nodes.get(handle.node) {
            Some(node) => {
                !node.parent.is_null()
                    || !node.left.is_null()
                    || !node.right.is_null()
                    || self.root == handle.node
            }
            None => false,
        }
    }

    /// Returns the element's current key, queued or parked.
    #[inline]
    pub fn priority(&self, handle: &LinkedBinaryHandle) -> Option<&P> {
        self.nodes.get(handle.node).map(|n| &n.priority)
    }

    /// Returns the element's payload, queued or parked.
    #[inline]
    pub fn item(&self, handle: &LinkedBinaryHandle) -> Option<&T> {
        self.nodes.get(handle.node).map(|n| &n.item)
    }

    /// Mutable access to the element's payload.
    ///
    /// Only the payload: the key can move solely through
    /// [`decrease_key`](Self::decrease_key) and
    /// [`update_key`](Self::update_key), which keep the tree ordered.
    #[inline]
    pub fn item_mut(&mut self, handle: &LinkedBinaryHandle) -> Option<&mut T> {
        self.nodes.get_mut(handle.node).map(|n| &mut n.item)
    }

    /// Walks the whole tree and checks every structural invariant: the
    /// node set forms a complete binary tree, every parent key is no
    /// greater than its children's, parent links mirror child links, the
    /// queued count matches the reachable count, and `last` names the
    /// final level-order position.
    ///
    /// O(n); intended for tests and debugging.
    pub fn verify_internal_structure(&self) -> bool {
        if self.len == 0 {
            return self.root.is_null() && self.last.is_null();
        }
        let root = match self.nodes.get(self.root) {
            Some(node) => node,
            None => return false,
        };
        if !root.parent.is_null() {
            return false;
        }
        // level-order walk assigning 1-based positions: a complete tree
        // occupies exactly 1..=len, and position len must hold `last`
        let mut queue = VecDeque::new();
        queue.push_back((self.root, 1usize));
        let mut seen = 0usize;
        let mut final_slot = NodeKey::null();
        while let Some((key, position)) = queue.pop_front() {
            if position > self.len {
                return false;
            }
            seen += 1;
            if position == self.len {
                final_slot = key;
            }
            let node = match self.nodes.get(key) {
                Some(node) => node,
                None => return false,
            };
            for (child, slot) in [(node.left, 2 * position), (node.right, 2 * position + 1)] {
                if child.is_null() {
                    continue;
                }
                let child_node = match self.nodes.get(child) {
                    Some(child_node) => child_node,
                    None => return false,
                };
                if child_node.parent != key {
                    return false;
                }
                if child_node.priority < node.priority {
                    return false;
                }
                queue.push_back((child, slot));
            }
        }
        seen == self.len && final_slot == self.last
    }

    /// True when the node participates in the tree (any link set, or root).
    fn is_linked(&self, node: NodeKey) -> bool {
        let n = &self.nodes[node];
        !n.parent.is_null() || !n.left.is_null() || !n.right.is_null() || self.root == node
    }

    /// Attaches a detached node at the next free level-order slot and
    /// sifts it up.
    fn link(&mut self, node: NodeKey) {
        debug_assert!(!self.is_linked(node));
        if self.len == 0 {
            self.root = node;
            self.last = node;
            self.len = 1;
            return;
        }
        let parent = self.insert_parent();
        if self.nodes[parent].left.is_null() {
            self.nodes[parent].left = node;
        } else {
            self.nodes[parent].right = node;
        }
        self.nodes[node].parent = parent;
        self.len += 1;
        self.last = node;
        self.sift_up(node);
    }

    /// Locates the parent of the next free level-order slot.
    ///
    /// Runs on the binary shape of the occupied count. With `n = len + 1`
    /// being the 1-based position the new node will take: a power of two
    /// opens a fresh level at the far left; an even `n` is a left-child
    /// slot reached by climbing past the right-child run above `last` and
    /// falling left; an odd `n` is the free right slot under `last`'s
    /// parent. O(log n), no full traversal.
    ///
    /// The heap must be non-empty.
    fn insert_parent(&self) -> NodeKey {
        let n = self.len + 1;
        if n.is_power_of_two() {
            // the bottom level is exactly full; descend to the left edge
            let mut cursor = self.root;
            while !self.nodes[cursor].left.is_null() {
                cursor = self.nodes[cursor].left;
            }
            cursor
        } else if n % 2 == 0 {
            let mut cursor = self.last;
            loop {
                let parent = self.nodes[cursor].parent;
                if self.nodes[parent].right != cursor {
                    break;
                }
                cursor = parent;
            }
            let parent = self.nodes[cursor].parent;
            if self.nodes[parent].right.is_null() {
                return parent;
            }
            let mut cursor = self.nodes[parent].right;
            while !self.nodes[cursor].left.is_null() {
                cursor = self.nodes[cursor].left;
            }
            cursor
        } else {
            self.nodes[self.last].parent
        }
    }

    /// Relocates the last position after the bottom-right node was
    /// detached as a left child.
    ///
    /// Mirror of [`Self::insert_parent`], with `n = len + 1` the position
    /// the detached node held and `last` already moved to its parent: a
    /// power of two means the detached node had the bottom level to
    /// itself, so the new last is the rightmost node of the now-perfect
    /// tree; otherwise climb past the left-child run, step to the sibling
    /// left subtree, and descend its right edge.
    fn pred_last(&self) -> NodeKey {
        let n = self.len + 1;
        let mut cursor = self.last;
        if n.is_power_of_two() {
            cursor = self.root;
            while !self.nodes[cursor].right.is_null() {
                cursor = self.nodes[cursor].right;
            }
        } else if n % 2 == 0 {
            loop {
                let parent = self.nodes[cursor].parent;
                if self.nodes[parent].left != cursor {
                    break;
                }
                cursor = parent;
            }
            cursor = self.nodes[self.nodes[cursor].parent].left;
            while !self.nodes[cursor].right.is_null() {
                cursor = self.nodes[cursor].right;
            }
        }
        cursor
    }

    /// Moves a node toward the root while it is smaller than its parent.
    ///
    /// Each step is a parent-side rotation: sifting `node` up past its
    /// parent is the same relink as swapping the parent with that child,
    /// so the two rotation primitives serve both sift directions. The
    /// last-pointer redirect happens inside the swap.
    fn sift_up(&mut self, node: NodeKey) {
        loop {
            let parent = self.nodes[node].parent;
            if parent.is_null() || self.nodes[parent].priority <= self.nodes[node].priority {
                break;
            }
            if self.nodes[parent].left == node {
                self.swap_with_left(parent);
            } else {
                self.swap_with_right(parent);
            }
        }
    }

    /// Moves a node toward the leaves while a child is smaller, swapping
    /// with the smaller child; the left child wins on equal keys.
    ///
    /// An explicit loop bounded by the tree height, not recursion.
    fn sift_down(&mut self, node: NodeKey) {
        loop {
            let left = self.nodes[node].left;
            let right = self.nodes[node].right;
            let left_smaller =
                !left.is_null() && self.nodes[left].priority < self.nodes[node].priority;
            let right_smaller =
                !right.is_null() && self.nodes[right].priority < self.nodes[node].priority;
            match (left_smaller, right_smaller) {
                (true, true) => {
                    if self.nodes[left].priority <= self.nodes[right].priority {
                        self.swap_with_left(node);
                    } else {
                        self.swap_with_right(node);
                    }
                }
                (true, false) => self.swap_with_left(node),
                (false, true) => self.swap_with_right(node),
                (false, false) => break,
            }
        }
    }

    /// Exchanges a node with its left child by relinking.
    ///
    /// The child takes the node's place under the grandparent (or as the
    /// root), the node absorbs the child's two links, and the former right
    /// subtree is rehung under the promoted child. If `last` named the
    /// promoted child it is redirected to the node, which now occupies
    /// that position.
    fn swap_with_left(&mut self, node: NodeKey) {
        let parent = self.nodes[node].parent;
        let left = self.nodes[node].left;
        let right = self.nodes[node].right;
        debug_assert!(!left.is_null());

        // the node drops into the child's slot and takes its subtrees
        let (grand_left, grand_right) = {
            let child = &self.nodes[left];
            (child.left, child.right)
        };
        self.nodes[node].left = grand_left;
        if !grand_left.is_null() {
            self.nodes[grand_left].parent = node;
        }
        self.nodes[node].right = grand_right;
        if !grand_right.is_null() {
            self.nodes[grand_right].parent = node;
        }
        self.nodes[node].parent = left;

        // the child takes the node's old place
        self.nodes[left].parent = parent;
        if parent.is_null() {
            self.root = left;
        } else if self.nodes[parent].left == node {
            self.nodes[parent].left = left;
        } else {
            self.nodes[parent].right = left;
        }
        self.nodes[left].left = node;
        self.nodes[left].right = right;
        if !right.is_null() {
            self.nodes[right].parent = left;
        }

        if self.last == left {
            self.last = node;
        }
    }

    /// Exchanges a node with its right child by relinking; mirror of
    /// [`Self::swap_with_left`].
    fn swap_with_right(&mut self, node: NodeKey) {
        let parent = self.nodes[node].parent;
        let left = self.nodes[node].left;
        let right = self.nodes[node].right;
        debug_assert!(!right.is_null());

        let (grand_left, grand_right) = {
            let child = &self.nodes[right];
            (child.left, child.right)
        };
        self.nodes[node].left = grand_left;
        if !grand_left.is_null() {
            self.nodes[grand_left].parent = node;
        }
        self.nodes[node].right = grand_right;
        if !grand_right.is_null() {
            self.nodes[grand_right].parent = node;
        }
        self.nodes[node].parent = right;

        self.nodes[right].parent = parent;
        if parent.is_null() {
            self.root = right;
        } else if self.nodes[parent].left == node {
            self.nodes[parent].left = right;
        } else {
            self.nodes[parent].right = right;
        }
        self.nodes[right].right = node;
        self.nodes[right].left = left;
        if !left.is_null() {
            self.nodes[left].parent = right;
        }

        if self.last == right {
            self.last = node;
        }
    }
}

impl<T, P: Ord> Default for LinkedBinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Heap<T, P> for LinkedBinaryHeap<T, P> {
    fn new() -> Self {
        LinkedBinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        LinkedBinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        LinkedBinaryHeap::len(self)
    }

    fn push(&mut self, priority: P, item: T) {
        self.push_with_handle(priority, item);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        LinkedBinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(P, T)> {
        LinkedBinaryHeap::pop(self)
    }
}

impl<T, P: Ord> DecreaseKeyHeap<T, P> for LinkedBinaryHeap<T, P> {
    type Handle = LinkedBinaryHandle;

    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle {
        LinkedBinaryHeap::push_with_handle(self, priority, item)
    }

    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError> {
        LinkedBinaryHeap::decrease_key(self, handle, new_priority)
    }
}
