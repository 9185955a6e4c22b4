//! Word representation
//!
//! A Word keeps the spelling it came with (used for meaning lookups and display)
//! next to its accent-folded letters (used for every comparison).

use super::normalize::{lowercase_tr, normalize};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A lowercase word of any fixed length
///
/// Equality and hashing only look at the normalized letters, so `kâğıt` and
/// `kağıt` are the same word.
#[derive(Debug, Clone)]
pub struct Word {
    original: String,
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacter(c) => write!(f, "Word contains a non-letter: {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased with Turkish casing; the folded form is derived
    /// from it.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains a non-alphabetic char.
    ///
    /// # Examples
    /// ```
    /// use kelime::core::Word;
    ///
    /// let word = Word::new("Kâğıt").unwrap();
    /// assert_eq!(word.original(), "kâğıt");
    /// assert_eq!(word.text(), "kağıt");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("ab ay").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let original = lowercase_tr(&text.into());

        if original.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = original.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text = normalize(&original);
        let letters = text.chars().collect();

        Ok(Self {
            original,
            text,
            letters,
        })
    }

    /// Create a Word and require an exact letter count
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a count mismatch, or any error of [`Word::new`].
    pub fn with_length(text: impl Into<String>, expected: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == expected {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected,
                actual: word.len(),
            })
        }
    }

    /// Assemble a word from already folded letters
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn from_letters(letters: &[char]) -> Result<Self, WordError> {
        Self::new(letters.iter().collect::<String>())
    }

    /// The normalized (accent-folded) spelling
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The spelling the word was created with, lowercased
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Normalized letters, one per slot
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false, a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Occurrence count of each letter
    ///
    /// Used by evaluation to budget Present verdicts for duplicate letters.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
