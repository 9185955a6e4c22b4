//! Guess evaluation
//!
//! Each slot of a submitted guess gets one [`Verdict`]:
//! - Correct: same letter at the same position in the target
//! - Present: letter occurs elsewhere in the target and is not used up yet
//! - Absent: letter is not (or no longer) available in the target

use super::Word;
use std::fmt;

/// Per-slot feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji square used when sharing a result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for a whole row, one per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Two passes over the guess:
    /// 1. Exact position matches become Correct and use up that target letter
    /// 2. Remaining slots become Present while unused copies of the letter are
    ///    left in the target, left to right; otherwise Absent
    ///
    /// A target letter satisfies at most one guess slot, so the Correct+Present
    /// count for a letter never exceeds its count in the target.
    ///
    /// # Panics
    /// Panics if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use kelime::core::{Feedback, Verdict::*, Word};
    ///
    /// let target = Word::new("kalem").unwrap();
    /// let guess = Word::new("limon").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    /// assert_eq!(feedback.verdicts(), &[Present, Absent, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        assert_eq!(
            target.len(),
            guess.len(),
            "target and guess must have the same length"
        );

        let mut verdicts = vec![Verdict::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                verdicts[i] = Verdict::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count -= 1;
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, &g) in guess.letters().iter().enumerate() {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    /// The verdicts, left to right
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length row
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every slot is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Letters of `guess` that received an Absent verdict
    ///
    /// Every Absent slot counts, including a surplus duplicate of a letter
    /// whose other copy matched. Each letter appears once, in slot order.
    #[must_use]
    pub fn absent_letters(&self, guess: &Word) -> Vec<char> {
        let mut absent: Vec<char> = Vec::new();
        for (&letter, &verdict) in guess.letters().iter().zip(&self.0) {
            if verdict == Verdict::Absent && !absent.contains(&letter) {
                absent.push(letter);
            }
        }
        absent
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl From<Vec<Verdict>> for Feedback {
    fn from(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
