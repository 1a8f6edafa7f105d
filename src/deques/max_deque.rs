//! A deque wrapper that answers "which element is largest?" under an injected
//! comparison function.
//!
//! `MaxDeque` owns a backing store and a default comparator. It adds
//! [`max`](MaxDeque::max) and [`max_by`](MaxDeque::max_by) and otherwise
//! behaves exactly like the deque it wraps: it implements [`AnyDeque`] by
//! delegation and dereferences to the backing store for everything else.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Deref, DerefMut};

use super::{AnyDeque, ArrayDeque, Iter};
use crate::error::{DequeError, Result};

/// Three-way comparison owned by a [`MaxDeque`].
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// A deque of `T` over backing store `D` with an order-statistic query.
pub struct MaxDeque<T, D: AnyDeque<T> = ArrayDeque<T>> {
    deque: D,
    comparator: Comparator<T>,
}

impl<T> MaxDeque<T> {
    /// Creates an empty `MaxDeque` over an [`ArrayDeque`].
    pub fn new<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_deque(ArrayDeque::new(), comparator)
    }
}

impl<T: Ord + 'static> MaxDeque<T> {
    /// Creates an empty `MaxDeque` ordered by `T`'s own [`Ord`].
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, D: AnyDeque<T>> MaxDeque<T, D> {
    /// Wraps an existing deque. Its current elements take part in `max`.
    pub fn with_deque<F>(deque: D, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            deque,
            comparator: Box::new(comparator),
        }
    }

    /// Wraps `deque` with an optional comparator.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidArgument`] when `comparator` is `None`; a
    /// `MaxDeque` always owns a default ordering.
    pub fn try_from_parts(deque: D, comparator: Option<Comparator<T>>) -> Result<Self> {
        let comparator =
            comparator.ok_or(DequeError::InvalidArgument("MaxDeque requires a comparator"))?;
        Ok(Self { deque, comparator })
    }

    /// Returns the largest element under the owned comparator, or `None` if empty.
    ///
    /// When several elements compare equal to the maximum, the one closest to
    /// the front is returned. The scan runs on the backing store's own borrowing
    /// iterator and does not allocate.
    pub fn max<'a>(&'a self) -> Option<&'a T>
    where
        &'a D: IntoIterator<Item = &'a T>,
    {
        leftmost_max(&self.deque, |a, b| (self.comparator)(a, b))
    }

    /// Same as [`max`](Self::max) but ordered by `comparator`. The owned default
    /// comparator is left as it is.
    pub fn max_by<'a, F>(&'a self, comparator: F) -> Option<&'a T>
    where
        &'a D: IntoIterator<Item = &'a T>,
        F: FnMut(&T, &T) -> Ordering,
    {
        leftmost_max(&self.deque, comparator)
    }

    /// Returns the backing deque.
    pub fn inner(&self) -> &D {
        &self.deque
    }

    /// Returns the backing deque mutably.
    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.deque
    }

    /// Unwraps the backing deque, dropping the comparator.
    pub fn into_inner(self) -> D {
        self.deque
    }
}

/// Single left-to-right scan. A later element replaces the running maximum only
/// when it compares strictly greater, so ties resolve to the leftmost element.
/// (`Iterator::max_by` keeps the last maximum instead.)
fn leftmost_max<'a, T, It, F>(items: It, mut cmp: F) -> Option<&'a T>
where
    It: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = items.into_iter();
    let mut best = items.next()?;
    for item in items {
        if cmp(item, best) == Ordering::Greater {
            best = item;
        }
    }
    Some(best)
}

impl<T, D: AnyDeque<T>> AnyDeque<T> for MaxDeque<T, D> {
    fn len(&self) -> usize {
        self.deque.len()
    }
    fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }
    fn push_back(&mut self, item: T) {
        self.deque.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.deque.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.deque.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.deque.get(index)
    }
    fn iter(&self) -> Iter<'_, T> {
        self.deque.iter()
    }
    fn front(&self) -> Option<&T> {
        self.deque.front()
    }
    fn back(&self) -> Option<&T> {
        self.deque.back()
    }
    fn clear(&mut self) {
        self.deque.clear();
    }
}

impl<T, D: AnyDeque<T>> Deref for MaxDeque<T, D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.deque
    }
}

impl<T, D: AnyDeque<T>> DerefMut for MaxDeque<T, D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.deque
    }
}

impl<'a, T, D> IntoIterator for &'a MaxDeque<T, D>
where
    D: AnyDeque<T>,
    &'a D: IntoIterator<Item = &'a T>,
{
    type Item = &'a T;
    type IntoIter = <&'a D as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.deque).into_iter()
    }
}

impl<T, D: AnyDeque<T>> Extend<T> for MaxDeque<T, D> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.deque.push_back(item);
        }
    }
}

impl<T, D: AnyDeque<T> + fmt::Debug> fmt::Debug for MaxDeque<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxDeque")
            .field("deque", &self.deque)
            .finish_non_exhaustive()
    }
}

impl<T, D: AnyDeque<T> + fmt::Display> fmt::Display for MaxDeque<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.deque, f)
    }
}
