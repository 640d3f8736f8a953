//! Formatting utilities for terminal output

use crate::core::{Feedback, Row, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter by its verdict
#[must_use]
pub fn colored_letter(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_red(),
        Verdict::Unevaluated => tile.bold(),
    }
}

/// Render a grid row as colored tiles; empty cells show as `_`
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| colored_letter(cell.letter().unwrap_or('_'), cell.verdict()).to_string())
        .collect()
}

/// Render a scored guess as colored tiles
#[must_use]
pub fn format_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| colored_letter(char::from(letter), verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
