//! Interactive terminal game

mod app;
mod board;
mod rendering;

pub use app::{App, run_tui};
pub use board::{Board, Tile, keyboard_rows};
