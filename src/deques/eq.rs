//! `PartialEq` across every pair of deque types.
//!
//! All comparisons share one rule, so an [`ArrayDeque`] and a [`LinkedDeque`]
//! holding the same elements in the same order are equal, and either compares
//! equal to the matching `VecDeque`. Pairs of concrete stores walk their own
//! borrowing iterators; pairs involving a [`MaxDeque`] go through [`deque_eq`].

use std::collections::VecDeque;

use super::{iter_eq, ArrayDeque};
#[cfg(feature = "max")]
use super::deque_eq;
#[cfg(feature = "linked")]
use super::LinkedDeque;
#[cfg(feature = "max")]
use super::MaxDeque;
#[cfg(feature = "max")]
use super::AnyDeque;
#[cfg(feature = "linked")]
use crate::utils::index_type::IndexType;

macro_rules! gen_eq {
    ($cmp:ident;) => {};
    ($cmp:ident; $lhs:ty, $rhs:ty;$($next:tt)*) => {
        gen_eq! { $cmp; $lhs, $rhs [];$($next)* }
    };
    ($cmp:ident; $lhs:ty, $rhs:ty [$($params:tt)*];$($next:tt)*) => {
        impl<T: PartialEq<U>, U, $($params)*> PartialEq<$rhs> for $lhs {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                $cmp::<T, U, Self, $rhs>(self, other)
            }
        }
        gen_eq! { $cmp; $($next)* }
    };
}

gen_eq! {
    iter_eq;
    ArrayDeque<T>, ArrayDeque<U>;
    ArrayDeque<T>, VecDeque<U>;
    VecDeque<T>, ArrayDeque<U>;
}

#[cfg(feature = "linked")]
gen_eq! {
    iter_eq;
    LinkedDeque<T, I>, LinkedDeque<U, J> [I: IndexType, J: IndexType];
    ArrayDeque<T>, LinkedDeque<U, J>     [J: IndexType];
    LinkedDeque<T, I>, ArrayDeque<U>     [I: IndexType];
    LinkedDeque<T, I>, VecDeque<U>       [I: IndexType];
    VecDeque<T>, LinkedDeque<U, J>       [J: IndexType];
}

#[cfg(feature = "max")]
gen_eq! {
    deque_eq;
    MaxDeque<T, D>, MaxDeque<U, E> [D: AnyDeque<T>, E: AnyDeque<U>];
    MaxDeque<T, D>, ArrayDeque<U>  [D: AnyDeque<T>];
    ArrayDeque<T>, MaxDeque<U, E>  [E: AnyDeque<U>];
    MaxDeque<T, D>, VecDeque<U>    [D: AnyDeque<T>];
    VecDeque<T>, MaxDeque<U, E>    [E: AnyDeque<U>];
}

#[cfg(all(feature = "linked", feature = "max"))]
gen_eq! {
    deque_eq;
    MaxDeque<T, D>, LinkedDeque<U, J> [D: AnyDeque<T>, J: IndexType];
    LinkedDeque<T, I>, MaxDeque<U, E> [I: IndexType, E: AnyDeque<U>];
}
