//! What a session tells the presentation layer

use super::row::FixedSlot;
use crate::core::{Mode, Verdict};
use std::fmt;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    /// All guesses used without finding the word
    Exhausted,
}

impl Outcome {
    /// First line of the end notice
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Won => "Tebrikler!",
            Self::Exhausted => "Tahmin hakkınız bitti!",
        }
    }
}

/// Why a submitted row was refused
///
/// Rejections leave the session as it was; the player keeps editing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    IncompleteGuess { length: usize },
    InvalidWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { length } => write!(f, "Kelime {length} harften oluşmalı!"),
            Self::InvalidWord => write!(f, "Geçersiz kelime!"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Error type for sessions that cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The word source came back empty (or timed out)
    WordListUnavailable { mode: Mode },
    TargetLength { expected: usize, actual: usize },
    /// The mode needs a revealed slot and none, or an out-of-range one, was given
    InvalidReveal { index: Option<usize>, length: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListUnavailable { .. } => write!(f, "Kelime listesi alınamadı!"),
            Self::TargetLength { expected, actual } => {
                write!(f, "Target word must be {expected} letters, got {actual}")
            }
            Self::InvalidReveal {
                index: Some(index),
                length,
            } => write!(f, "Reveal index {index} is outside a {length}-letter word"),
            Self::InvalidReveal { index: None, .. } => {
                write!(f, "This mode needs a revealed letter")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Discrete change for the presentation layer
///
/// Events of one command are queued in order; verdicts of a row come left to
/// right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new session replaced whatever was on the board
    SessionStarted {
        mode: Mode,
        word_length: usize,
        fixed: Option<FixedSlot>,
    },
    /// A slot got a letter, or lost it when `letter` is `None`
    TileUpdated {
        row: usize,
        slot: usize,
        letter: Option<char>,
    },
    VerdictRevealed {
        row: usize,
        slot: usize,
        verdict: Verdict,
    },
    KeyDisabled(char),
    /// Sent once the meaning lookup after the final guess has settled
    GameEnded {
        outcome: Outcome,
        word: String,
        meaning: String,
    },
    Rejected(Rejection),
}
