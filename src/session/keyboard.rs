//! On-screen keyboard bookkeeping

use rustc_hash::FxHashSet;

/// State of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Unknown,
    /// The letter received an Absent verdict
    Disabled,
}

/// Per-letter key states for one session
///
/// Keys only ever move from Unknown to Disabled. A fresh session gets a fresh
/// keyboard; there is no way to re-enable a key.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    disabled: FxHashSet<char>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self, letter: char) -> KeyState {
        if self.disabled.contains(&letter) {
            KeyState::Disabled
        } else {
            KeyState::Unknown
        }
    }

    #[must_use]
    pub fn is_disabled(&self, letter: char) -> bool {
        self.disabled.contains(&letter)
    }

    /// Disable a key; returns true if it was not disabled before
    pub fn disable(&mut self, letter: char) -> bool {
        self.disabled.insert(letter)
    }

    /// Disabled letters, sorted
    #[must_use]
    pub fn disabled_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.disabled.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}
