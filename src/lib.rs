//! Kelime
//!
//! A Turkish Wordle-style word game for the terminal. Guess the hidden word in
//! six tries; every guess is scored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use kelime::core::{Feedback, Verdict, Word};
//!
//! let target = Word::new("kalem").unwrap();
//! let guess = Word::new("kelam").unwrap();
//!
//! let feedback = Feedback::evaluate(&target, &guess);
//! assert_eq!(feedback.verdicts()[0], Verdict::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists and meanings
pub mod wordsource;

// Game state machine
pub mod session;

// Setup, restart and end-of-game flow
pub mod game;

// Keys to commands
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
