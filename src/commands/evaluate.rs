//! Guess evaluation command
//!
//! Scores one guess against a target without starting a game.

use crate::core::{Alphabet, Feedback, Word};

/// Result of evaluating a guess
pub struct EvaluationResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Both words are read through the alphabet first, so case and accents do not
/// matter.
///
/// # Errors
///
/// Returns an error if:
/// - Either word holds a character outside the alphabet
/// - The two words differ in length
pub fn evaluate_guess(
    target: &str,
    guess: &str,
    alphabet: &Alphabet,
) -> Result<EvaluationResult, String> {
    let target = read_word(target, alphabet)?;
    let guess = read_word(guess, alphabet)?;

    if target.len() != guess.len() {
        return Err(format!(
            "Kelime {} harften oluşmalı! ('{}' {} harf)",
            target.len(),
            guess.original(),
            guess.len()
        ));
    }

    let feedback = Feedback::evaluate(&target, &guess);
    Ok(EvaluationResult {
        target,
        guess,
        feedback,
    })
}

fn read_word(text: &str, alphabet: &Alphabet) -> Result<Word, String> {
    let letters = text
        .trim()
        .chars()
        .map(|c| {
            alphabet
                .accept(c)
                .ok_or_else(|| format!("Geçersiz harf: {c:?} ('{text}')"))
        })
        .collect::<Result<Vec<char>, String>>()?;
    Word::from_letters(&letters).map_err(|e| format!("Geçersiz kelime '{text}': {e}"))
}
