//! Core domain types for Wordle
//!
//! Words, per-letter verdicts, and the guess grid. Everything here is pure,
//! synchronous, and independent of any front end or network code.

mod feedback;
mod grid;
mod word;

pub use feedback::{Feedback, Verdict};
pub use grid::{Cell, GuessGrid, Row};
pub use word::{Word, WordError};

/// Letters per word (and cells per row)
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game (rows in the grid)
pub const MAX_ROWS: usize = 6;
