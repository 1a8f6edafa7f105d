//! Failure family for programmer misuse and resource exhaustion.
//!
//! Expected absence (popping an empty deque, reading past the end) is never an
//! error here; those paths return `None`.

use thiserror::Error;

pub type Result<T, E = DequeError> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DequeError {
    /// An iterator was asked for an element after it had already been drained.
    #[error("iterator exhausted: no elements remain")]
    IteratorExhausted,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The requested slot count does not fit the storage's index space.
    #[error("capacity overflow: cannot address {requested} slots")]
    CapacityOverflow { requested: usize },
    #[error("allocation failed while resizing to {requested} slots")]
    AllocationFailed { requested: usize },
}
