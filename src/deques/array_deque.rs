//! Growable circular-array double-ended queue.
//!
//! # Layout
//! Elements live in a ring of `Option<T>` slots addressed by two cursors:
//!
//! ```text
//!            next_first           next_last
//!                 v                   v
//! | c | d |   |   |   | a | b | ...  |   |
//!   ^ wraps around       ^ logical index 0
//! ```
//!
//! `next_first` is the slot *immediately before* the front element and
//! `next_last` the slot *immediately after* the back element. Pushing writes at a
//! cursor and moves it outward; popping moves it inward. Logical index `i`
//! therefore lives at slot `(next_first + 1 + i) % capacity`, which keeps `get`
//! O(1) with no traversal.
//!
//! # Resizing
//! * **Grow** when a push finds the ring full: capacity doubles.
//! * **Shrink** after a pop leaves fewer than `capacity / 4` elements, but only
//!   once capacity has reached 16, so the ring never oscillates around the
//!   minimum of [`ArrayDeque::MIN_CAPACITY`].
//!
//! Both directions re-linearize the elements into slots `[0, len)` of the new
//! storage. The new storage is fully reserved before any element moves, so a
//! failed allocation leaves the deque exactly as it was.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use tracing::{event, warn, Level};

use super::{write_spaced, AnyDeque};
use crate::error::{DequeError, Result};

/// A double-ended queue backed by a growable ring buffer.
///
/// Pushes and pops at either end are amortized O(1); positional reads are O(1).
/// Capacity starts at [`MIN_CAPACITY`](Self::MIN_CAPACITY) and only changes
/// through the grow/shrink policy described in the [module docs](self).
#[derive(Clone)]
pub struct ArrayDeque<T> {
    items: Vec<Option<T>>,
    next_first: usize,
    next_last: usize,
    len: usize,
}

impl<T> AnyDeque<T> for ArrayDeque<T> {
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
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> ArrayDeque<T> {
    /// Capacity of a freshly created deque, and the floor capacity never shrinks
    /// below.
    pub const MIN_CAPACITY: usize = 8;

    /// Shrinking is only considered at or above this capacity.
    const SHRINK_THRESHOLD: usize = Self::MIN_CAPACITY * 2;

    /// Creates a new empty deque with [`MIN_CAPACITY`](Self::MIN_CAPACITY) slots.
    pub fn new() -> Self {
        Self {
            items: Self::vacant_slots(Self::MIN_CAPACITY),
            next_first: Self::MIN_CAPACITY / 2,
            next_last: Self::MIN_CAPACITY / 2 + 1,
            len: 0,
        }
    }

    fn vacant_slots(count: usize) -> Vec<Option<T>> {
        let mut slots = Vec::with_capacity(count);
        slots.resize_with(count, || None);
        slots
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Moves a slot index forward around the ring.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity()
    }

    /// Moves a slot index backward around the ring. `sub` must not exceed the
    /// capacity.
    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        (idx + self.capacity() - sub) % self.capacity()
    }

    /// Translates logical `index` to its physical slot.
    #[inline(always)]
    fn slot_of(&self, index: usize) -> usize {
        self.wrap_add(self.next_first, 1 + index)
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front (oldest element pushed with `push_back`).
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.items[self.slot_of(index)].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.slot_of(index);
            self.items[slot].as_mut()
        } else {
            None
        }
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Appends `item` to the back of the deque, growing the ring if it is full.
    ///
    /// # Panics
    /// Panics if the grown ring cannot be addressed or allocated. Use
    /// [`try_push_back`](Self::try_push_back) to handle that case.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        if let Err(err) = self.try_push_back(item) {
            panic!("ArrayDeque::push_back: {err}");
        }
    }

    /// Prepends `item` to the front of the deque, growing the ring if it is full.
    ///
    /// # Panics
    /// Panics if the grown ring cannot be addressed or allocated. Use
    /// [`try_push_front`](Self::try_push_front) to handle that case.
    #[inline]
    pub fn push_front(&mut self, item: T) {
        if let Err(err) = self.try_push_front(item) {
            panic!("ArrayDeque::push_front: {err}");
        }
    }

    /// Appends `item` to the back of the deque.
    ///
    /// # Errors
    /// Returns [`DequeError::CapacityOverflow`] or [`DequeError::AllocationFailed`]
    /// when the ring is full and cannot grow. The deque is left unmodified and
    /// `item` is dropped.
    pub fn try_push_back(&mut self, item: T) -> Result<()> {
        self.reserve_one()?;
        self.items[self.next_last] = Some(item);
        self.next_last = self.wrap_add(self.next_last, 1);
        self.len += 1;
        Ok(())
    }

    /// Prepends `item` to the front of the deque.
    ///
    /// # Errors
    /// Same conditions as [`try_push_back`](Self::try_push_back).
    pub fn try_push_front(&mut self, item: T) -> Result<()> {
        self.reserve_one()?;
        self.items[self.next_first] = Some(item);
        self.next_first = self.wrap_sub(self.next_first, 1);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the first element, or `None` if empty.
    ///
    /// May halve the capacity afterwards.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        let item = self.take_front();
        if item.is_some() {
            self.shrink_if_sparse();
        }
        item
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// May halve the capacity afterwards.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        let item = self.take_back();
        if item.is_some() {
            self.shrink_if_sparse();
        }
        item
    }

    /// Removes the front element without applying the shrink policy.
    fn take_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let first = self.wrap_add(self.next_first, 1);
        let item = self.items[first].take();
        self.next_first = first;
        self.len -= 1;
        item
    }

    /// Removes the back element without applying the shrink policy.
    fn take_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let last = self.wrap_sub(self.next_last, 1);
        let item = self.items[last].take();
        self.next_last = last;
        self.len -= 1;
        item
    }

    /// Removes all elements and returns the ring to its initial capacity.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns a front-to-back iterator over the deque.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            items: &self.items,
            front: self.wrap_add(self.next_first, 1),
            back: self.wrap_sub(self.next_last, 1),
            remaining: self.len,
        }
    }

    /// Doubles the ring when it is full.
    fn reserve_one(&mut self) -> Result<()> {
        if self.is_full() {
            let target = self
                .capacity()
                .checked_mul(2)
                .ok_or(DequeError::CapacityOverflow { requested: usize::MAX })?;
            self.try_resize(target)?;
        }
        Ok(())
    }

    /// Halves the ring when it has become sparse.
    ///
    /// A failed shrink is not fatal: the current storage is still consistent.
    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if capacity >= Self::SHRINK_THRESHOLD && self.len < capacity / 4 {
            let target = (capacity / 2).max(Self::MIN_CAPACITY);
            if let Err(err) = self.try_resize(target) {
                warn!(%err, capacity, len = self.len, "keeping oversized ring storage");
            }
        }
    }

    /// Moves every element, in logical order, into slots `[0, len)` of a new ring
    /// of `new_capacity` slots.
    ///
    /// Nothing is moved until the new storage is reserved; on error the deque is
    /// untouched.
    fn try_resize(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity > self.len, "resize target must leave a vacant slot");
        let fits = new_capacity
            .checked_mul(mem::size_of::<Option<T>>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(DequeError::CapacityOverflow {
                requested: new_capacity,
            });
        }

        let mut resized: Vec<Option<T>> = Vec::new();
        resized
            .try_reserve_exact(new_capacity)
            .map_err(|_| DequeError::AllocationFailed {
                requested: new_capacity,
            })?;

        let old_capacity = self.capacity();
        let mut slot = self.wrap_add(self.next_first, 1);
        for _ in 0..self.len {
            resized.push(self.items[slot].take());
            slot = self.wrap_add(slot, 1);
        }
        resized.resize_with(new_capacity, || None);

        self.items = resized;
        self.next_first = new_capacity - 1;
        self.next_last = self.len;

        event!(
            name: "ring_resize",
            Level::DEBUG,
            from = old_capacity,
            to = new_capacity,
            len = self.len,
            "resized ring storage"
        );
        Ok(())
    }
}

// ─── iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator over an [`ArrayDeque`], front to back.
pub struct Iter<'a, T> {
    items: &'a [Option<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = (self.front + 1) % self.items.len();
        self.remaining -= 1;
        self.items[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back;
        self.back = (self.back + self.items.len() - 1) % self.items.len();
        self.remaining -= 1;
        self.items[slot].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`ArrayDeque`], front to back.
///
/// Draining never shrinks the ring; the storage is released when the iterator
/// is dropped.
pub struct IntoIter<T> {
    deque: ArrayDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ─── std traits ───────────────────────────────────────────────────────────────

impl<T: fmt::Debug> fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space-separated elements, front to back.
impl<T: fmt::Display> fmt::Display for ArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> Eq for ArrayDeque<T> {}

impl<T> Extend<T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
