//! The shared deque contract and the backing stores that implement it.
//!
//! [`AnyDeque`] is the capability every backing store exposes. Code written against
//! it (the [`GuitarString`](crate::GuitarString) synthesizer, [`MaxDeque`], the
//! cross-implementation equality in [`deque_eq`]) works unchanged over a circular
//! array, a sentinel ring, or `std`'s own `VecDeque`.

use core::fmt;
use core::iter::FusedIterator;
use std::collections::VecDeque;

use crate::error::{DequeError, Result};

pub mod array_deque;
mod eq;
#[cfg(feature = "linked")]
pub mod linked_deque;
#[cfg(feature = "max")]
pub mod max_deque;

pub use array_deque::ArrayDeque;
#[cfg(feature = "linked")]
pub use linked_deque::LinkedDeque;
#[cfg(feature = "max")]
pub use max_deque::{Comparator, MaxDeque};

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by [`ArrayDeque`], [`LinkedDeque`], [`MaxDeque`] and
/// `VecDeque<T>` so that code can operate on a deque without knowing which
/// backing store is active.
///
/// Absence is not an error: popping an empty deque or reading past the end
/// returns `None`.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Returns the element at logical `index` (0 is the front), or `None` if out
    /// of bounds.
    fn get(&self, index: usize) -> Option<&T>;
    /// Returns a front-to-back iterator. Calling it again restarts from the front.
    ///
    /// The returned [`Iter`] boxes the store's concrete iterator, so every call
    /// allocates. Generic code that knows its store should iterate through
    /// `&D: IntoIterator` instead, as [`MaxDeque::max`] and the concrete
    /// `PartialEq` impls do.
    fn iter(&self) -> Iter<'_, T>;
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T> {
        self.get(0)
    }
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }
    /// Removes all elements.
    fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }
    fn push_front(&mut self, item: T) {
        VecDeque::push_front(self, item);
    }
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
    fn iter(&self) -> Iter<'_, T> {
        Iter::new(VecDeque::iter(self))
    }
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// ─── Iter ─────────────────────────────────────────────────────────────────────

/// Front-to-back iterator returned by [`AnyDeque::iter`].
///
/// As an [`Iterator`] it yields `None` once drained and keeps doing so. Callers
/// that treat reading past the end as a bug use [`next_item`](Iter::next_item),
/// which reports [`DequeError::IteratorExhausted`] instead.
pub struct Iter<'a, T> {
    inner: Box<dyn Iterator<Item = &'a T> + 'a>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Wraps a backing store's concrete iterator.
    pub fn new<I>(inner: I) -> Self
    where
        I: ExactSizeIterator<Item = &'a T> + 'a,
    {
        let remaining = inner.len();
        Self {
            inner: Box::new(inner),
            remaining,
        }
    }

    /// Returns the next element, or [`DequeError::IteratorExhausted`] if every
    /// element has already been yielded.
    ///
    /// # Errors
    ///
    /// Fails when called on a drained iterator.
    pub fn next_item(&mut self) -> Result<&'a T> {
        self.next().ok_or(DequeError::IteratorExhausted)
    }

    /// Returns `true` while at least one element remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

// ─── Equality ─────────────────────────────────────────────────────────────────

/// Structural equality over any two deques, regardless of backing store.
///
/// Two deques are equal iff they have the same length and their elements are
/// pairwise equal front to back. Element comparison is by value; with
/// `Option<_>` elements, `None` equals `None`.
///
/// Works through [`AnyDeque::iter`], so each call boxes two iterators.
pub fn deque_eq<T, U, A, B>(lhs: &A, rhs: &B) -> bool
where
    A: AnyDeque<T> + ?Sized,
    B: AnyDeque<U> + ?Sized,
    T: PartialEq<U>,
{
    lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(a, b)| a == b)
}

/// [`deque_eq`] over the stores' own borrowing iterators. Nothing is boxed.
pub(crate) fn iter_eq<'a, T, U, A, B>(lhs: &'a A, rhs: &'a B) -> bool
where
    A: AnyDeque<T>,
    B: AnyDeque<U>,
    &'a A: IntoIterator<Item = &'a T>,
    &'a B: IntoIterator<Item = &'a U>,
    T: PartialEq<U> + 'a,
    U: 'a,
{
    lhs.len() == rhs.len() && lhs.into_iter().zip(rhs).all(|(a, b)| a == b)
}

impl<'a, 'b, T, U> PartialEq<dyn AnyDeque<U> + 'b> for dyn AnyDeque<T> + 'a
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &(dyn AnyDeque<U> + 'b)) -> bool {
        deque_eq::<T, U, _, _>(self, other)
    }
}

/// Writes `items` separated by single spaces. Shared by the `Display` impls.
pub(crate) fn write_spaced<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        write!(f, "{first}")?;
        for item in items {
            write!(f, " {item}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<D: AnyDeque<i32> + ?Sized>(d: &mut D) -> Vec<i32> {
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        let mut out = Vec::new();
        while let Some(x) = d.pop_front() {
            out.push(x);
        }
        out
    }

    // ─── trait dispatch over every backing store ──────────────────────────────
    #[test]
    fn test_any_deque_vecdeque_dispatch() {
        let mut d: VecDeque<i32> = VecDeque::new();
        let any: &mut dyn AnyDeque<i32> = &mut d;
        assert_eq!(drive(&mut *any), vec![1, 2, 3]);
        assert!(any.is_empty());
        assert_eq!(any.front(), None);
        assert_eq!(any.back(), None);
    }

    #[test]
    fn test_any_deque_array_dispatch() {
        let mut d: ArrayDeque<i32> = ArrayDeque::new();
        assert_eq!(drive(&mut d as &mut dyn AnyDeque<i32>), vec![1, 2, 3]);
    }

    #[cfg(feature = "linked")]
    #[test]
    fn test_any_deque_linked_dispatch() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        assert_eq!(drive(&mut d as &mut dyn AnyDeque<i32>), vec![1, 2, 3]);
    }

    #[test]
    fn test_any_deque_front_back_defaults() {
        let mut d: VecDeque<i32> = VecDeque::new();
        AnyDeque::push_back(&mut d, 5);
        AnyDeque::push_back(&mut d, 6);
        assert_eq!(AnyDeque::front(&d), Some(&5));
        assert_eq!(AnyDeque::back(&d), Some(&6));
        AnyDeque::clear(&mut d);
        assert!(AnyDeque::is_empty(&d));
    }

    // ─── Iter ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_iter_next_item_exhaustion_is_error() {
        let d: ArrayDeque<i32> = [1, 2].into_iter().collect();
        let mut it = AnyDeque::iter(&d);
        assert!(it.has_next());
        assert_eq!(it.next_item(), Ok(&1));
        assert_eq!(it.next_item(), Ok(&2));
        assert!(!it.has_next());
        assert_eq!(it.next_item(), Err(DequeError::IteratorExhausted));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iter_restartable() {
        let d: ArrayDeque<i32> = [4, 5, 6].into_iter().collect();
        let first: Vec<_> = AnyDeque::iter(&d).copied().collect();
        let second: Vec<_> = AnyDeque::iter(&d).copied().collect();
        assert_eq!(first, vec![4, 5, 6]);
        assert_eq!(first, second);
        assert_eq!(AnyDeque::iter(&d).len(), 3);
    }

    #[test]
    fn test_iter_empty() {
        let d: VecDeque<i32> = VecDeque::new();
        let mut it = AnyDeque::iter(&d);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next_item(), Err(DequeError::IteratorExhausted));
    }

    // ─── equality ─────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_eq_array_vs_vecdeque() {
        let a: ArrayDeque<i32> = [1, 2, 3].into_iter().collect();
        let v: VecDeque<i32> = [1, 2, 3].into_iter().collect();
        assert!(deque_eq(&a, &v));
        assert_eq!(a, v);
        assert_eq!(v, a);

        let shorter: VecDeque<i32> = [1, 2].into_iter().collect();
        assert!(!deque_eq(&a, &shorter));
        assert_ne!(a, shorter);
    }

    #[cfg(feature = "linked")]
    #[test]
    fn test_deque_eq_dyn_objects() {
        let a: ArrayDeque<i32> = [7, 8].into_iter().collect();
        let l: LinkedDeque<i32> = [7, 8].into_iter().collect();
        let lhs: &dyn AnyDeque<i32> = &a;
        let rhs: &dyn AnyDeque<i32> = &l;
        assert!(lhs == rhs);
    }

    #[cfg(feature = "linked")]
    #[test]
    fn test_deque_eq_same_operations_then_mutation() {
        let mut a: ArrayDeque<i32> = ArrayDeque::new();
        let mut l: LinkedDeque<i32> = LinkedDeque::new();
        for i in 0..40 {
            if i % 3 == 0 {
                a.push_front(i);
                l.push_front(i);
            } else {
                a.push_back(i);
                l.push_back(i);
            }
            if i % 7 == 6 {
                assert_eq!(a.pop_back(), l.pop_back());
            }
        }
        assert_eq!(a, l);
        assert_eq!(l, a);

        l.push_back(99);
        assert_ne!(a, l);
        a.push_back(99);
        assert_eq!(a, l);
        a.pop_front();
        assert_ne!(l, a);
    }

    #[cfg(feature = "linked")]
    #[test]
    fn test_deque_eq_absent_elements_are_equal() {
        let a: ArrayDeque<Option<i32>> = [Some(1), None, Some(3)].into_iter().collect();
        let l: LinkedDeque<Option<i32>> = [Some(1), None, Some(3)].into_iter().collect();
        assert_eq!(a, l);

        let other: LinkedDeque<Option<i32>> = [Some(1), Some(2), Some(3)].into_iter().collect();
        assert_ne!(a, other);
    }

    #[test]
    fn test_deque_eq_value_not_identity() {
        let a: ArrayDeque<String> = ["x".to_string(), "y".to_string()].into_iter().collect();
        let b: ArrayDeque<String> = ["x".to_string(), "y".to_string()].into_iter().collect();
        assert_eq!(a, b);
        assert!(!core::ptr::eq(a.get(0).unwrap(), b.get(0).unwrap()));
    }

    #[test]
    fn test_deque_eq_concrete_iterators_agree() {
        let a: ArrayDeque<i32> = (0..50).collect();
        let v: VecDeque<i32> = (0..50).collect();
        assert!(iter_eq::<i32, i32, ArrayDeque<i32>, VecDeque<i32>>(&a, &v));
        assert_eq!(iter_eq::<i32, i32, ArrayDeque<i32>, VecDeque<i32>>(&a, &v), deque_eq(&a, &v));

        let mut shifted = v.clone();
        shifted.pop_front();
        shifted.push_back(50);
        assert!(!iter_eq::<i32, i32, ArrayDeque<i32>, VecDeque<i32>>(&a, &shifted));
        assert!(!iter_eq::<i32, i32, ArrayDeque<i32>, VecDeque<i32>>(&a, &VecDeque::<i32>::new()));
        assert!(iter_eq::<i32, i32, ArrayDeque<i32>, VecDeque<i32>>(&ArrayDeque::<i32>::new(), &VecDeque::<i32>::new()));
    }

    #[test]
    fn test_deque_eq_mixed_element_types() {
        let owned: ArrayDeque<String> = ["a".to_string()].into_iter().collect();
        let borrowed: VecDeque<&str> = ["a"].into_iter().collect();
        assert!(deque_eq(&owned, &borrowed));
    }
}
