//! Compact integer types used as node links in arena-backed lists.

use core::hash::Hash;
use std::fmt::Debug;

/// An integer type used as a **node index** inside an arena-backed linked list.
///
/// Instead of pointer-based links, [`LinkedDeque`](crate::LinkedDeque) stores its
/// nodes in a `Vec` and links them by position. A narrower index type shrinks
/// every node by the difference in width on 64-bit platforms, at the cost of a
/// lower node ceiling.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Reserved value meaning "no node". It terminates the free list and is never
    /// handed out as a live slot, so an arena holds at most `NONE` nodes.
    const NONE: Self;

    /// The first slot. Linked deques keep their sentinel here.
    const ZERO: Self;

    /// Converts this index to a `usize` for slice access.
    fn as_usize(self) -> usize;

    /// Converts a slot position to this index type, or `None` when the position
    /// collides with [`NONE`](Self::NONE) or does not fit at all.
    fn try_from_usize(i: usize) -> Option<Self>;
}

macro_rules! impl_index_type {
    ($($ty:ty),*) => {$(
        impl IndexType for $ty {
            const NONE: Self = <$ty>::MAX;
            const ZERO: Self = 0;
            #[inline(always)]
            fn as_usize(self) -> usize {
                self as usize
            }
            #[inline(always)]
            fn try_from_usize(i: usize) -> Option<Self> {
                <$ty>::try_from(i).ok().filter(|&idx| idx != Self::NONE)
            }
        }
    )*};
}

impl_index_type!(u8, u16, u32, usize);
