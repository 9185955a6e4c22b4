//! Game session state machine
//!
//! A [`GameSession`] is one target word played in one mode. It starts in
//! `Playing`, passes through `Submitting` while a row is being checked, and
//! ends in `Terminal`. Setup (fetching the word list) happens before a session
//! exists; see [`crate::game`].
//!
//! Every visible change is queued as an [`Event`] and handed out by
//! [`GameSession::drain_events`], so the board on screen is a projection of
//! the session and never the other way around.

mod event;
mod keyboard;
mod row;

pub use event::{Event, Outcome, Rejection, SessionError};
pub use keyboard::{KeyState, KeyboardState};
pub use row::{FixedSlot, Row};

use crate::core::{Feedback, MAX_GUESSES, Mode, Word, normalize_char};
use crate::wordsource::Dictionary;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// A submitted row is being checked; further submits are ignored
    Submitting,
    Terminal(Outcome),
}

/// Result of a submit command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The session is over or already checking a row
    Ignored,
    Rejected(Rejection),
    Scored {
        feedback: Feedback,
        /// Set when this guess ended the session
        outcome: Option<Outcome>,
    },
}

/// One target word played in one mode
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    target: Word,
    dictionary: Arc<Dictionary>,
    rows: Vec<Row>,
    fixed: Option<FixedSlot>,
    keyboard: KeyboardState,
    outcome: Option<Outcome>,
    submitting: bool,
    events: Vec<Event>,
}

impl GameSession {
    /// Start a session on a random word of `dictionary`
    ///
    /// In Easy mode a random slot of the target is revealed and locked in the
    /// first row.
    ///
    /// # Errors
    /// Returns `SessionError::WordListUnavailable` if the dictionary is empty.
    pub fn start<R: Rng + ?Sized>(
        mode: Mode,
        dictionary: Arc<Dictionary>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let target = dictionary
            .pick(rng)
            .cloned()
            .ok_or(SessionError::WordListUnavailable { mode })?;
        let reveal = mode
            .reveals_letter()
            .then(|| rng.random_range(0..target.len()));
        Self::with_target(mode, dictionary, target, reveal)
    }

    /// Start a session on a chosen word
    ///
    /// `reveal` is the locked slot for modes that reveal a letter and is ignored
    /// by the others.
    ///
    /// # Errors
    /// Returns `SessionError` if the target does not fit the mode, or the mode
    /// reveals a letter and `reveal` is missing or out of range.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use kelime::core::{Alphabet, Mode, Word};
    /// use kelime::session::GameSession;
    /// use kelime::wordsource::Dictionary;
    ///
    /// let dict = Dictionary::build(&["kalem".to_string()], 5, &Alphabet::turkish());
    /// let target = Word::new("kalem").unwrap();
    /// let session = GameSession::with_target(Mode::Easy, Arc::new(dict), target, Some(2)).unwrap();
    /// assert_eq!(session.fixed_slot().unwrap().letter, 'l');
    /// ```
    pub fn with_target(
        mode: Mode,
        dictionary: Arc<Dictionary>,
        target: Word,
        reveal: Option<usize>,
    ) -> Result<Self, SessionError> {
        let length = mode.word_length();
        if target.len() != length {
            return Err(SessionError::TargetLength {
                expected: length,
                actual: target.len(),
            });
        }

        let fixed = if mode.reveals_letter() {
            match reveal {
                Some(index) if index < length => Some(FixedSlot {
                    index,
                    letter: target.letter_at(index),
                }),
                index => return Err(SessionError::InvalidReveal { index, length }),
            }
        } else {
            None
        };

        let first_row = fixed.map_or_else(|| Row::empty(length), |f| Row::with_fixed(length, f));

        let mut events = vec![Event::SessionStarted {
            mode,
            word_length: length,
            fixed,
        }];
        if let Some(f) = fixed {
            events.push(Event::TileUpdated {
                row: 0,
                slot: f.index,
                letter: Some(f.letter),
            });
        }

        info!(%mode, length, "session started");
        debug!(word = %target, "selected word");

        Ok(Self {
            mode,
            target,
            dictionary,
            rows: vec![first_row],
            fixed,
            keyboard: KeyboardState::new(),
            outcome: None,
            submitting: false,
            events,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.mode.word_length()
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Rows so far; the last one is the row being edited unless the session is over
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the row that receives letters
    #[must_use]
    pub fn current_row_index(&self) -> usize {
        self.rows.len() - 1
    }

    #[must_use]
    pub fn current_row(&self) -> &Row {
        &self.rows[self.current_row_index()]
    }

    /// Slot the next typed letter would land on
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        if self.is_over() {
            return None;
        }
        self.current_row().cursor()
    }

    /// Number of scored rows
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.iter().filter(|r| r.is_scored()).count()
    }

    #[must_use]
    pub fn fixed_slot(&self) -> Option<FixedSlot> {
        self.fixed
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::Terminal(outcome),
            None if self.submitting => Phase::Submitting,
            None => Phase::Playing,
        }
    }

    /// Take the queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Put a letter into the first empty editable slot of the current row
    ///
    /// Ignored once the session is over or the row is full.
    pub fn type_letter(&mut self, letter: char) {
        if self.is_over() {
            return;
        }
        let letter = normalize_char(letter);
        let row = self.current_row_index();
        if let Some(slot) = self.rows[row].push(letter) {
            self.events.push(Event::TileUpdated {
                row,
                slot,
                letter: Some(letter),
            });
        }
    }

    /// Remove the last letter of the current row, never the fixed one
    pub fn delete_letter(&mut self) {
        if self.is_over() {
            return;
        }
        let row = self.current_row_index();
        if let Some(slot) = self.rows[row].pop() {
            self.events.push(Event::TileUpdated {
                row,
                slot,
                letter: None,
            });
        }
    }

    /// Check and score the current row
    ///
    /// Ignored while the session is over or another submit is in progress.
    pub fn submit(&mut self) -> Submission {
        if self.is_over() || self.submitting {
            return Submission::Ignored;
        }
        self.submitting = true;
        let submission = self.score_current_row();
        self.submitting = false;
        submission
    }

    fn score_current_row(&mut self) -> Submission {
        let row_index = self.current_row_index();
        let row = &self.rows[row_index];

        if !row.is_complete() {
            return self.reject(Rejection::IncompleteGuess {
                length: self.word_length(),
            });
        }
        let Some(guess) = row.word().filter(|word| self.dictionary.contains(word)) else {
            return self.reject(Rejection::InvalidWord);
        };

        let feedback = Feedback::evaluate(&self.target, &guess);
        debug!(row = row_index, guess = %guess, feedback = %feedback, "guess scored");

        for (slot, &verdict) in feedback.verdicts().iter().enumerate() {
            self.events.push(Event::VerdictRevealed {
                row: row_index,
                slot,
                verdict,
            });
        }
        for letter in feedback.absent_letters(&guess) {
            if self.keyboard.disable(letter) {
                self.events.push(Event::KeyDisabled(letter));
            }
        }
        self.rows[row_index].score(feedback.clone());

        let outcome = if feedback.is_perfect() {
            Some(Outcome::Won)
        } else if self.rows.len() >= MAX_GUESSES {
            Some(Outcome::Exhausted)
        } else {
            self.rows.push(Row::empty(self.word_length()));
            None
        };

        if let Some(outcome) = outcome {
            info!(?outcome, guesses = self.guesses_used(), "session ended");
            self.outcome = Some(outcome);
        }

        Submission::Scored { feedback, outcome }
    }

    fn reject(&mut self, rejection: Rejection) -> Submission {
        debug!(%rejection, "guess rejected");
        self.events.push(Event::Rejected(rejection));
        Submission::Rejected(rejection)
    }
}
