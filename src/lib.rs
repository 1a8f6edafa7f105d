//! # Twin Deque
//!
//! Two double-ended queues behind one contract, plus a comparator-driven wrapper.
//!
//! * [`ArrayDeque`]: a growable ring buffer. O(1) positional reads, amortized
//!   O(1) pushes and pops at both ends, capacity doubling when full and halving
//!   when sparse.
//! * [`LinkedDeque`]: a doubly-linked ring anchored by a sentinel node. O(1)
//!   pushes and pops, O(i) positional reads.
//! * [`MaxDeque`]: wraps either store and answers `max()` under an injected
//!   comparison function.
//!
//! Everything implements [`AnyDeque`], so consumers such as the [`GuitarString`]
//! synthesizer can be driven by any backing store (including `std`'s
//! `VecDeque`), and equality is structural across implementations.
//!
//! ## Absence vs. misuse
//!
//! Popping an empty deque or reading out of range is routine and returns `None`.
//! Misuse (reading past an exhausted [`Iter`] with [`Iter::next_item`], building a
//! `MaxDeque` without a comparator) and resource exhaustion are reported as
//! [`DequeError`].
//!
//! ## Feature flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `linked` | yes | [`LinkedDeque`] |
//! | `max`    | yes | [`MaxDeque`] |
//! | `synth`  | yes | [`GuitarString`] (pulls in `rand`) |
//!
//! ## Examples
//!
//! ### ArrayDeque
//!
//! ```rust
//! use twin_deque::ArrayDeque;
//!
//! let mut d: ArrayDeque<i32> = ArrayDeque::new();
//! assert_eq!(d.capacity(), 8);
//!
//! for i in 0..9 {
//!     d.push_back(i);
//! }
//! // The ninth push doubled the ring.
//! assert_eq!(d.capacity(), 16);
//! assert_eq!(d.get(8), Some(&8));
//! assert_eq!(d.pop_front(), Some(0));
//! ```
//!
//! ### Cross-implementation equality
//!
//! ```rust
//! # #[cfg(feature = "linked")]
//! # {
//! use twin_deque::{ArrayDeque, LinkedDeque};
//!
//! let a: ArrayDeque<&str> = ["a", "b"].into_iter().collect();
//! let mut l: LinkedDeque<&str> = LinkedDeque::new();
//! l.push_front("b");
//! l.push_front("a");
//!
//! assert_eq!(a, l);
//! l.pop_back();
//! assert_ne!(a, l);
//! # }
//! ```
//!
//! ### MaxDeque
//!
//! ```rust
//! # #[cfg(feature = "max")]
//! # {
//! use twin_deque::MaxDeque;
//!
//! let mut d = MaxDeque::new(|a: &i32, b: &i32| a.cmp(b));
//! d.extend([3, 1, 4, 1, 5]);
//! assert_eq!(d.max(), Some(&5));
//! assert_eq!(d.max_by(|a, b| b.cmp(a)), Some(&1));
//! # }
//! ```

#![cfg_attr(
    not(all(feature = "linked", feature = "max", feature = "synth")),
    allow(rustdoc::broken_intra_doc_links)
)]

// --- Module Declarations ---

pub mod deques;
pub mod error;
#[cfg(feature = "synth")]
pub mod synth;
pub mod utils;

// --- Re-exports ---

pub use deques::{deque_eq, AnyDeque, ArrayDeque, Iter};
#[cfg(feature = "linked")]
pub use deques::LinkedDeque;
#[cfg(feature = "max")]
pub use deques::{Comparator, MaxDeque};
pub use error::{DequeError, Result};
#[cfg(feature = "synth")]
pub use synth::{GuitarString, SynthConfig};
pub use utils::IndexType;
