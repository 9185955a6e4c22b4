//! One attempt on the board

use crate::core::{Feedback, Word};

/// A pre-filled, locked slot of the first row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSlot {
    pub index: usize,
    pub letter: char,
}

/// Letter slots of a single attempt
///
/// A row is editable until it is scored; afterwards it also carries its
/// [`Feedback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    slots: Vec<Option<char>>,
    fixed: Option<usize>,
    feedback: Option<Feedback>,
}

impl Row {
    /// A row of `length` empty slots
    #[must_use]
    pub fn empty(length: usize) -> Self {
        Self {
            slots: vec![None; length],
            fixed: None,
            feedback: None,
        }
    }

    /// A row with one slot filled and locked
    ///
    /// # Panics
    /// Panics if the fixed index is out of range.
    #[must_use]
    pub fn with_fixed(length: usize, fixed: FixedSlot) -> Self {
        let mut row = Self::empty(length);
        row.slots[fixed.index] = Some(fixed.letter);
        row.fixed = Some(fixed.index);
        row
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True for the locked slot, if this row has one
    #[must_use]
    pub fn is_fixed(&self, index: usize) -> bool {
        self.fixed == Some(index)
    }

    /// Write into the first empty editable slot
    ///
    /// Returns the slot written, or `None` when the row is full or scored.
    pub fn push(&mut self, letter: char) -> Option<usize> {
        if self.is_scored() {
            return None;
        }
        let index = (0..self.slots.len()).find(|&i| !self.is_fixed(i) && self.slots[i].is_none())?;
        self.slots[index] = Some(letter);
        Some(index)
    }

    /// Clear the last filled editable slot
    ///
    /// Returns the slot cleared, or `None` when nothing can be removed.
    pub fn pop(&mut self) -> Option<usize> {
        if self.is_scored() {
            return None;
        }
        let index = (0..self.slots.len())
            .rev()
            .find(|&i| !self.is_fixed(i) && self.slots[i].is_some())?;
        self.slots[index] = None;
        Some(index)
    }

    /// Position the next typed letter would land on
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        (0..self.slots.len()).find(|&i| !self.is_fixed(i) && self.slots[i].is_none())
    }

    /// Every slot holds a letter; a fixed slot always counts as filled
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The word spelled by a complete row
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let letters = self.slots.iter().copied().collect::<Option<Vec<char>>>()?;
        Word::from_letters(&letters).ok()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.feedback.is_some()
    }

    pub(crate) fn score(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    fn fill(row: &mut Row, letters: &str) {
        for c in letters.chars() {
            row.push(c);
        }
    }

    #[test]
    fn push_fills_left_to_right() {
        let mut row = Row::empty(5);
        assert_eq!(row.push('k'), Some(0));
        assert_eq!(row.push('a'), Some(1));
        assert_eq!(row.cursor(), Some(2));
        assert!(!row.is_complete());
    }

    #[test]
    fn push_on_full_row_is_ignored() {
        let mut row = Row::empty(5);
        fill(&mut row, "kalem");
        assert!(row.is_complete());
        assert_eq!(row.push('x'), None);
        assert_eq!(row.word().unwrap().text(), "kalem");
    }

    #[test]
    fn pop_removes_last_letter() {
        let mut row = Row::empty(5);
        fill(&mut row, "kal");
        assert_eq!(row.pop(), Some(2));
        assert_eq!(row.pop(), Some(1));
        assert_eq!(row.pop(), Some(0));
        assert_eq!(row.pop(), None);
    }

    #[test]
    fn fixed_slot_is_skipped() {
        let fixed = FixedSlot {
            index: 2,
            letter: 'l',
        };
        let mut row = Row::with_fixed(5, fixed);
        assert!(row.is_fixed(2));
        fill(&mut row, "kaem");
        assert!(row.is_complete());
        assert_eq!(row.word().unwrap().text(), "kalem");

        // pop never touches the fixed letter
        for _ in 0..10 {
            row.pop();
        }
        assert_eq!(row.slots(), &[None, None, Some('l'), None, None]);
    }

    #[test]
    fn incomplete_row_has_no_word() {
        let mut row = Row::empty(5);
        fill(&mut row, "kale");
        assert!(row.word().is_none());
    }

    #[test]
    fn scored_row_is_frozen() {
        let mut row = Row::empty(3);
        fill(&mut row, "abc");
        row.score(Feedback::from(vec![Verdict::Correct; 3]));
        assert!(row.is_scored());
        assert_eq!(row.pop(), None);
        assert_eq!(row.push('x'), None);
    }
}
