//! Audio consumers built on the deque contract.

mod guitar_string;

pub use guitar_string::{GuitarString, SynthConfig};
