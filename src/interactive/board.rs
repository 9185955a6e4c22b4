//! Board projection
//!
//! What the screen shows, rebuilt only from session events. Verdicts are not
//! shown as they arrive: they wait in a queue and are revealed one tile per
//! tick, left to right.

use crate::core::{Alphabet, MAX_GUESSES, Mode, Verdict};
use crate::input::{VIRTUAL_DELETE, VIRTUAL_ENTER};
use crate::session::Event;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Turkish Q layout; letters outside the active alphabet are left out
const LAYOUT: [&str; 3] = ["qwertyuıopğü", "asdfghjklşi", "zxcvbnmöç"];

/// One cell of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
    pub fixed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reveal {
    row: usize,
    slot: usize,
    verdict: Verdict,
}

/// Screen state of the grid and the keyboard
#[derive(Debug, Clone)]
pub struct Board {
    mode: Mode,
    tiles: Vec<Vec<Tile>>,
    disabled: FxHashSet<char>,
    reveals: VecDeque<Reveal>,
}

impl Board {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            tiles: vec![vec![Tile::default(); mode.word_length()]; MAX_GUESSES],
            disabled: FxHashSet::default(),
            reveals: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    #[must_use]
    pub fn is_disabled(&self, letter: char) -> bool {
        self.disabled.contains(&letter)
    }

    /// Verdicts are still waiting to be shown
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        !self.reveals.is_empty()
    }

    /// Update from one session event
    pub fn apply(&mut self, event: &Event) {
        match *event {
            Event::SessionStarted { mode, fixed, .. } => {
                *self = Self::new(mode);
                if let Some(fixed) = fixed {
                    self.tiles[0][fixed.index].fixed = true;
                }
            }
            Event::TileUpdated { row, slot, letter } => {
                if let Some(tile) = self.tile_mut(row, slot) {
                    tile.letter = letter;
                }
            }
            Event::VerdictRevealed { row, slot, verdict } => {
                self.reveals.push_back(Reveal { row, slot, verdict });
            }
            Event::KeyDisabled(letter) => {
                self.disabled.insert(letter);
            }
            Event::GameEnded { .. } | Event::Rejected(_) => {}
        }
    }

    /// Show the next queued verdict; returns false when nothing was waiting
    pub fn tick(&mut self) -> bool {
        let Some(reveal) = self.reveals.pop_front() else {
            return false;
        };
        if let Some(tile) = self.tile_mut(reveal.row, reveal.slot) {
            tile.verdict = Some(reveal.verdict);
        }
        true
    }

    fn tile_mut(&mut self, row: usize, slot: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(row)?.get_mut(slot)
    }
}

/// Keyboard rows for an alphabet
///
/// Letters follow the Turkish Q layout; letters the layout does not know go
/// into an extra last row.
#[must_use]
pub fn keyboard_rows(alphabet: &Alphabet) -> Vec<Vec<char>> {
    let mut rows: Vec<Vec<char>> = LAYOUT
        .iter()
        .map(|row| row.chars().filter(|&c| alphabet.contains(c)).collect())
        .collect();

    let placed: String = LAYOUT.concat();
    let extra: Vec<char> = alphabet
        .letters()
        .iter()
        .copied()
        .filter(|&c| !placed.contains(c))
        .collect();
    rows.extend(extra.chunks(12).map(<[char]>::to_vec));
    rows.retain(|row| !row.is_empty());
    rows
}

/// Key names of the on-screen keyboard, row by row
///
/// The letter rows of [`keyboard_rows`], with `enter` and `del` around the
/// last one.
#[must_use]
pub fn keyboard_keys(alphabet: &Alphabet) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = keyboard_rows(alphabet)
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect();
    match rows.last_mut() {
        Some(last) => {
            last.insert(0, VIRTUAL_ENTER.to_string());
            last.push(VIRTUAL_DELETE.to_string());
        }
        None => rows.push(vec![VIRTUAL_ENTER.to_string(), VIRTUAL_DELETE.to_string()]),
    }
    rows
}
