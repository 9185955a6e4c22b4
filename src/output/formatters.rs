//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Uppercase a letter with Turkish dotted and dotless I
#[must_use]
pub fn upper_tr(letter: char) -> String {
    match letter {
        'i' => "İ".to_string(),
        'ı' => "I".to_string(),
        c => c.to_uppercase().collect(),
    }
}

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", upper_tr(letter)).bold();
    match verdict {
        Verdict::Correct => text.black().on_green(),
        Verdict::Present => text.black().on_yellow(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row of the guess letters in plain text, e.g. "K A L E M"
#[must_use]
pub fn plain_row(guess: &Word) -> String {
    guess
        .letters()
        .iter()
        .map(|&c| upper_tr(c))
        .collect::<Vec<_>>()
        .join(" ")
}
