//! Terminal output formatting
//!
//! Colored rows and notices for the commands that do not use the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_disabled_keys, print_evaluation, print_meaning, print_outcome,
    print_session_start,
};
