//! Circular sentinel-linked double-ended queue.
//!
//! # Implementation details
//! - **Arena of nodes**: nodes live in a `Vec` and link to each other by index
//!   ([`IndexType`]) instead of by pointer.
//! - **Sentinel ring**: slot 0 is a sentinel holding no value. Its `next` is the
//!   front element and its `prev` the back element, so the ring is always closed
//!   and an empty deque is the sentinel linked to itself in both directions.
//! - **Free list**: released slots are threaded through `next` (terminated by
//!   [`IndexType::NONE`]) and reused before the arena grows.
//! - **Compaction**: once fewer than a quarter of the slots hold elements, the
//!   live nodes are moved, in order, into a fresh arena sized to fit them. Like
//!   [`ArrayDeque`](super::ArrayDeque)'s shrink, this keeps pops amortized O(1).
//!
//! Pushes and pops at either end are O(1). Positional reads walk from the
//! sentinel and are O(i), the classic trade-off against
//! [`ArrayDeque`](super::ArrayDeque).

use core::fmt;
use core::iter::FusedIterator;

use tracing::{event, warn, Level};

use super::{write_spaced, AnyDeque};
use crate::error::{DequeError, Result};
use crate::utils::index_type::IndexType;

#[derive(Clone)]
struct Node<T, I> {
    value: Option<T>,
    prev: I,
    next: I,
}

/// A double-ended queue backed by a doubly-linked ring with one sentinel node.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type |
/// | `I` | Node link type; bounds the node count to `I::NONE` (sentinel included) |
#[derive(Clone)]
pub struct LinkedDeque<T, I: IndexType = u32> {
    nodes: Vec<Node<T, I>>,
    free_head: I,
    len: usize,
}

impl<T, I: IndexType> AnyDeque<T> for LinkedDeque<T, I> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn iter(&self) -> super::Iter<'_, T> {
        super::Iter::new(self.iter())
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T, I: IndexType> LinkedDeque<T, I> {
    const SENTINEL: I = I::ZERO;

    /// Deepest call stack [`get_recursive`](Self::get_recursive) builds.
    pub const MAX_RECURSION_DEPTH: usize = 4096;

    /// The arena is compacted once fewer than a quarter of its slots are live,
    /// but only from this many slots up.
    const COMPACT_THRESHOLD: usize = 16;

    /// Creates a new empty deque: a lone sentinel pointing at itself.
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::sentinel()],
            free_head: I::NONE,
            len: 0,
        }
    }

    fn sentinel() -> Node<T, I> {
        Node {
            value: None,
            prev: Self::SENTINEL,
            next: Self::SENTINEL,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn node(&self, idx: I) -> &Node<T, I> {
        &self.nodes[idx.as_usize()]
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: I) -> &mut Node<T, I> {
        &mut self.nodes[idx.as_usize()]
    }

    #[inline(always)]
    fn first(&self) -> I {
        self.node(Self::SENTINEL).next
    }

    #[inline(always)]
    fn last(&self) -> I {
        self.node(Self::SENTINEL).prev
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    ///
    /// On an empty deque the sentinel is its own successor and holds no value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.node(self.first()).value.as_ref()
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.node(self.last()).value.as_ref()
    }

    /// Walks `index` links forward from the front. Caller checks the bound.
    fn walk(&self, index: usize) -> I {
        let mut cur = self.first();
        for _ in 0..index {
            cur = self.node(cur).next;
        }
        cur
    }

    /// Returns the element at logical `index`, or `None` if out of bounds.
    ///
    /// Walks from the sentinel: O(`index`).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.node(self.walk(index)).value.as_ref()
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let idx = self.walk(index);
        self.node_mut(idx).value.as_mut()
    }

    /// Same lookup as [`get`](Self::get), expressed as a recursive walk.
    ///
    /// Recursion stops at [`MAX_RECURSION_DEPTH`](Self::MAX_RECURSION_DEPTH)
    /// frames; the rest of the walk is iterative, so any in-range index is safe.
    pub fn get_recursive(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.get_recursive_from(self.first(), index, Self::MAX_RECURSION_DEPTH)
    }

    fn get_recursive_from(&self, idx: I, remaining: usize, depth: usize) -> Option<&T> {
        if depth == 0 {
            let mut cur = idx;
            for _ in 0..remaining {
                cur = self.node(cur).next;
            }
            return self.node(cur).value.as_ref();
        }
        let node = self.node(idx);
        if remaining == 0 {
            node.value.as_ref()
        } else {
            self.get_recursive_from(node.next, remaining - 1, depth - 1)
        }
    }

    /// Appends `item` to the back of the deque.
    ///
    /// # Panics
    /// Panics if the node arena is exhausted for index type `I`. Use
    /// [`try_push_back`](Self::try_push_back) to handle that case.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        if let Err(err) = self.try_push_back(item) {
            panic!("LinkedDeque::push_back: {err}");
        }
    }

    /// Prepends `item` to the front of the deque.
    ///
    /// # Panics
    /// Panics if the node arena is exhausted for index type `I`. Use
    /// [`try_push_front`](Self::try_push_front) to handle that case.
    #[inline]
    pub fn push_front(&mut self, item: T) {
        if let Err(err) = self.try_push_front(item) {
            panic!("LinkedDeque::push_front: {err}");
        }
    }

    /// Appends `item` to the back of the deque.
    ///
    /// # Errors
    /// Returns [`DequeError::CapacityOverflow`] when no free slot is left and the
    /// next arena position is not representable as `I`, or
    /// [`DequeError::AllocationFailed`] if the arena cannot grow. The deque is
    /// left unmodified and `item` is dropped.
    pub fn try_push_back(&mut self, item: T) -> Result<()> {
        let last = self.last();
        self.link(item, last, Self::SENTINEL)
    }

    /// Prepends `item` to the front of the deque.
    ///
    /// # Errors
    /// Same conditions as [`try_push_back`](Self::try_push_back).
    pub fn try_push_front(&mut self, item: T) -> Result<()> {
        let first = self.first();
        self.link(item, Self::SENTINEL, first)
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let first = self.first();
        let item = self.unlink(first);
        self.compact_if_sparse();
        item
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let last = self.last();
        let item = self.unlink(last);
        self.compact_if_sparse();
        item
    }

    /// Removes all elements and releases every node but the sentinel.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Self::sentinel();
        self.free_head = I::NONE;
        self.len = 0;
    }

    /// Returns a front-to-back iterator over the deque.
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            nodes: &self.nodes,
            front: self.first(),
            back: self.last(),
            remaining: self.len,
        }
    }

    /// Places a new node holding `value` between `prev` and `next`.
    fn link(&mut self, value: T, prev: I, next: I) -> Result<()> {
        let idx = self.alloc(value, prev, next)?;
        self.node_mut(prev).next = idx;
        self.node_mut(next).prev = idx;
        self.len += 1;
        Ok(())
    }

    /// Takes a slot from the free list, or appends one to the arena.
    fn alloc(&mut self, value: T, prev: I, next: I) -> Result<I> {
        let node = Node {
            value: Some(value),
            prev,
            next,
        };
        if self.free_head != I::NONE {
            let idx = self.free_head;
            self.free_head = self.node(idx).next;
            *self.node_mut(idx) = node;
            return Ok(idx);
        }

        let position = self.nodes.len();
        let idx = I::try_from_usize(position).ok_or(DequeError::CapacityOverflow {
            requested: position + 1,
        })?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| DequeError::AllocationFailed {
                requested: position + 1,
            })?;
        self.nodes.push(node);
        Ok(idx)
    }

    /// Detaches `idx` from the ring, returns its value and frees the slot.
    fn unlink(&mut self, idx: I) -> Option<T> {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;

        let free_head = self.free_head;
        let node = self.node_mut(idx);
        let value = node.value.take();
        node.prev = I::NONE;
        node.next = free_head;
        self.free_head = idx;
        self.len -= 1;
        value
    }

    /// Rebuilds the arena around the live nodes once it has become sparse.
    ///
    /// Live nodes land in slots `1..=len` in logical order and the free list is
    /// emptied. A failed allocation is not fatal: the current arena is still
    /// consistent.
    fn compact_if_sparse(&mut self) {
        let slots = self.nodes.len();
        let len = self.len;
        if slots < Self::COMPACT_THRESHOLD || len + 1 >= slots / 4 {
            return;
        }
        // Every position up to `len` is representable once `len` is.
        let Some(last) = I::try_from_usize(len) else {
            return;
        };
        let index = |position: usize| I::try_from_usize(position).unwrap_or(Self::SENTINEL);

        let mut compacted: Vec<Node<T, I>> = Vec::new();
        if let Err(err) = compacted.try_reserve_exact(len + 1) {
            warn!(%err, slots, len, "keeping sparse node arena");
            return;
        }
        compacted.push(Node {
            value: None,
            prev: last,
            next: index(usize::from(len > 0)),
        });
        let mut cur = self.first();
        for position in 1..=len {
            let node = &mut self.nodes[cur.as_usize()];
            cur = node.next;
            let next = if position == len { 0 } else { position + 1 };
            compacted.push(Node {
                value: node.value.take(),
                prev: index(position - 1),
                next: index(next),
            });
        }

        self.nodes = compacted;
        self.free_head = I::NONE;
        event!(
            name: "arena_compact",
            Level::DEBUG,
            from = slots,
            to = len + 1,
            "compacted node arena"
        );
    }
}

// ─── iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator over a [`LinkedDeque`], front to back.
pub struct Iter<'a, T, I: IndexType = u32> {
    nodes: &'a [Node<T, I>],
    front: I,
    back: I,
    remaining: usize,
}

impl<T, I: IndexType> Clone for Iter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front.as_usize()];
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for Iter<'_, T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back.as_usize()];
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}

impl<T, I: IndexType> FusedIterator for Iter<'_, T, I> {}

/// Owning iterator over a [`LinkedDeque`], front to back.
pub struct IntoIter<T, I: IndexType = u32> {
    deque: LinkedDeque<T, I>,
}

impl<T, I: IndexType> Iterator for IntoIter<T, I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for IntoIter<T, I> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, I: IndexType> ExactSizeIterator for IntoIter<T, I> {}

impl<T, I: IndexType> FusedIterator for IntoIter<T, I> {}

impl<T, I: IndexType> IntoIterator for LinkedDeque<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;

    fn into_iter(self) -> IntoIter<T, I> {
        IntoIter { deque: self }
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a LinkedDeque<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Iter<'a, T, I> {
        self.iter()
    }
}

// ─── std traits ───────────────────────────────────────────────────────────────

impl<T: fmt::Debug, I: IndexType> fmt::Debug for LinkedDeque<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, I: IndexType> fmt::Display for LinkedDeque<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

impl<T, I: IndexType> Default for LinkedDeque<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq, I: IndexType> Eq for LinkedDeque<T, I> {}

impl<T, I: IndexType> Extend<T> for LinkedDeque<T, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, I: IndexType> FromIterator<T> for LinkedDeque<T, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayDeque;

    /// Walks the ring in both directions and checks it closes after `len + 1`
    /// steps with consistent back-links.
    fn assert_ring_closed<T, I: IndexType>(d: &LinkedDeque<T, I>) {
        let sentinel = LinkedDeque::<T, I>::SENTINEL;
        let mut cur = sentinel;
        for _ in 0..=d.len() {
            let next = d.node(cur).next;
            assert_eq!(d.node(next).prev, cur);
            cur = next;
        }
        assert_eq!(cur, sentinel);

        let mut cur = sentinel;
        for _ in 0..=d.len() {
            cur = d.node(cur).prev;
        }
        assert_eq!(cur, sentinel);
        assert!(d.node(sentinel).value.is_none());
    }

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_ops_basic() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        assert!(d.is_empty());
        d.push_back(1);
        d.push_back(2);
        d.push_front(0);
        assert_eq!(d.len(), 3);
        assert_eq!(d.front(), Some(&0));
        assert_eq!(d.back(), Some(&2));
        assert_ring_closed(&d);
        assert_eq!(d.pop_front(), Some(0));
        assert_eq!(d.pop_back(), Some(2));
        assert_eq!(d.len(), 1);
        assert_ring_closed(&d);
    }

    #[test]
    fn test_linked_ops_empty_is_self_linked_sentinel() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        let sentinel = LinkedDeque::<i32>::SENTINEL;
        assert_eq!(d.first(), sentinel);
        assert_eq!(d.last(), sentinel);
        assert_eq!(d.pop_front(), None);
        assert_eq!(d.pop_back(), None);
        assert_eq!(d.front(), None);
        assert_eq!(d.back(), None);

        d.push_back(5);
        d.pop_front();
        assert_eq!(d.first(), sentinel);
        assert_eq!(d.last(), sentinel);
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn test_linked_ops_get() {
        let d: LinkedDeque<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(d.get(0), Some(&10));
        assert_eq!(d.get(2), Some(&30));
        assert_eq!(d.get(3), None);
        assert_eq!(d.get(usize::MAX), None);
    }

    #[test]
    fn test_linked_ops_get_recursive_matches_get() {
        let d: LinkedDeque<i32> = (0..50).collect();
        for i in 0..=50 {
            assert_eq!(d.get_recursive(i), d.get(i));
        }
        assert_eq!(LinkedDeque::<i32>::new().get_recursive(0), None);
    }

    #[test]
    fn test_linked_ops_get_recursive_long_deque() {
        let d: LinkedDeque<u64> = (0..1_000_000).collect();
        assert_eq!(d.get_recursive(999_999), Some(&999_999));
        assert_eq!(d.get_recursive(999_999), d.get(999_999));
        let depth = LinkedDeque::<u64>::MAX_RECURSION_DEPTH;
        assert_eq!(d.get_recursive(depth - 1), Some(&(depth as u64 - 1)));
        assert_eq!(d.get_recursive(depth), Some(&(depth as u64)));
        assert_eq!(d.get_recursive(depth + 1), Some(&(depth as u64 + 1)));
        assert_eq!(d.get_recursive(1_000_000), None);
    }

    #[test]
    fn test_linked_ops_get_mut() {
        let mut d: LinkedDeque<i32> = [1, 2, 3].into_iter().collect();
        *d.get_mut(2).unwrap() = 33;
        assert_eq!(d.back(), Some(&33));
        assert_eq!(d.get_mut(3), None);
    }

    // ─── round trips ──────────────────────────────────────────────────────────
    #[test]
    fn test_linked_round_trip_fifo_and_reversed() {
        let input: Vec<i32> = (0..64).collect();

        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        for &x in &input {
            d.push_back(x);
        }
        let out: Vec<i32> = core::iter::from_fn(|| d.pop_front()).collect();
        assert_eq!(out, input);

        for &x in &input {
            d.push_front(x);
        }
        assert_ring_closed(&d);
        let out: Vec<i32> = core::iter::from_fn(|| d.pop_front()).collect();
        assert_eq!(out, input.iter().rev().copied().collect::<Vec<_>>());
    }

    // ─── arena & free list ────────────────────────────────────────────────────
    #[test]
    fn test_linked_free_list_reuses_slots() {
        let mut d: LinkedDeque<i32> = (0..4).collect();
        assert_eq!(d.nodes.len(), 5);
        for i in 0..100 {
            d.pop_front();
            d.push_back(i);
        }
        assert_eq!(d.nodes.len(), 5);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![96, 97, 98, 99]);
        assert_ring_closed(&d);
    }

    #[test]
    fn test_linked_arena_compacts_after_drain() {
        let mut d: LinkedDeque<u32> = (0..10_000).collect();
        assert_eq!(d.nodes.len(), 10_001);
        while d.len() > 100 {
            d.pop_front();
        }
        assert!(
            d.nodes.len() < 4 * (d.len() + 1),
            "arena holds {} slots for {} elements",
            d.nodes.len(),
            d.len()
        );
        assert_ring_closed(&d);
        assert_eq!(
            d.iter().copied().collect::<Vec<_>>(),
            (9_900..10_000).collect::<Vec<_>>()
        );
        assert_eq!(d.get(50), Some(&9_950));
        assert_eq!(d.get_recursive(99), Some(&9_999));

        while d.pop_back().is_some() {}
        assert!(d.nodes.len() < LinkedDeque::<u32>::COMPACT_THRESHOLD);
        assert_ring_closed(&d);
        d.push_back(7);
        d.push_front(6);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![6, 7]);
    }

    #[test]
    fn test_linked_arena_compaction_mixed_ends() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        let mut model = std::collections::VecDeque::new();
        for i in 0..2_000 {
            if i % 2 == 0 {
                d.push_front(i);
                model.push_front(i);
            } else {
                d.push_back(i);
                model.push_back(i);
            }
        }
        for i in 0..1_990 {
            if i % 3 == 0 {
                assert_eq!(d.pop_back(), model.pop_back());
            } else {
                assert_eq!(d.pop_front(), model.pop_front());
            }
        }
        assert!(d.nodes.len() < 4 * (d.len() + 1));
        assert_ring_closed(&d);
        assert_eq!(d, model);
    }

    #[test]
    fn test_linked_index_type_exhaustion() {
        let mut d: LinkedDeque<i32, u8> = LinkedDeque::new();
        // Slots 1..=254 are usable; 255 is the reserved NONE marker.
        for i in 0..254 {
            d.try_push_back(i).unwrap();
        }
        assert_eq!(
            d.try_push_back(254),
            Err(DequeError::CapacityOverflow { requested: 256 })
        );
        assert_eq!(d.len(), 254);
        assert_eq!(d.back(), Some(&253));
        assert_ring_closed(&d);

        // A freed slot makes room again.
        assert_eq!(d.pop_front(), Some(0));
        d.try_push_front(-1).unwrap();
        assert_eq!(d.front(), Some(&-1));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_linked_index_type_exhaustion_panics() {
        let mut d: LinkedDeque<u8, u8> = LinkedDeque::new();
        for i in 0..=255u8 {
            d.push_back(i);
        }
    }

    #[test]
    fn test_linked_clear() {
        let mut d: LinkedDeque<i32> = (0..10).collect();
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.nodes.len(), 1);
        assert_ring_closed(&d);
        d.push_front(1);
        assert_eq!(d.pop_back(), Some(1));
    }

    // ─── iterators ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_iter_double_ended() {
        let d: LinkedDeque<i32> = (1..=5).collect();
        let mut it = d.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.clone().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(it.rev().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    }

    #[test]
    fn test_linked_into_iter() {
        let d: LinkedDeque<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let v: Vec<String> = d.into_iter().collect();
        assert_eq!(v, vec!["a", "b", "c"]);
    }

    // ─── traits ───────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_traits_debug_and_display() {
        let d: LinkedDeque<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{d:?}"), "[1, 2, 3]");
        assert_eq!(d.to_string(), "1 2 3");
    }

    #[test]
    fn test_linked_traits_equality_with_array() {
        let l: LinkedDeque<i32, u16> = (0..20).collect();
        let a: ArrayDeque<i32> = (0..20).collect();
        assert_eq!(l, a);
        assert_eq!(a, l);

        let mut other: LinkedDeque<i32> = (0..20).collect();
        assert_eq!(l, other);
        other.pop_back();
        assert_ne!(l, other);
    }

    #[test]
    fn test_linked_get_out_of_range_matches_array() {
        let l: LinkedDeque<i32> = (0..3).collect();
        let a: ArrayDeque<i32> = (0..3).collect();
        for i in 0..6 {
            assert_eq!(l.get(i), a.get(i));
        }
    }
}
