//! Core domain types for the game
//!
//! Pure, synchronous building blocks: letters, words, modes and guess evaluation.
//! Nothing in here performs I/O.

mod alphabet;
mod mode;
mod normalize;
mod verdict;
mod word;

pub use alphabet::{Alphabet, AlphabetError};
pub use mode::Mode;
pub use normalize::{lowercase_tr, normalize, normalize_char};
pub use verdict::{Feedback, Verdict};
pub use word::{Word, WordError};

/// Attempts allowed per session
pub const MAX_GUESSES: usize = 6;
