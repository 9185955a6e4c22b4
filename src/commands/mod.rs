//! Command implementations

pub mod define;
pub mod evaluate;
pub mod simple;

pub use define::define_word;
pub use evaluate::{EvaluationResult, evaluate_guess};
pub use simple::run_simple;
