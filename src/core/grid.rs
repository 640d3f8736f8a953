//! Fixed 6×5 guess grid
//!
//! Rows and columns are 1-based at the API boundary. Only the current row
//! accepts input, and a locked grid accepts none.

use super::{Feedback, MAX_ROWS, Verdict, WORD_LENGTH, Word};
use crate::error::GameError;

/// One letter slot plus its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<char>,
    verdict: Verdict,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// One guess attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// All cells hold a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Letters entered so far, in column order
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(Cell::letter).collect()
    }

    /// The row as a `Word`, once complete
    #[must_use]
    pub fn guess(&self) -> Option<Word> {
        if self.is_complete() {
            Word::new(self.text()).ok()
        } else {
            None
        }
    }

    /// Number of leading filled cells, i.e. where the next letter goes
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().take_while(|c| !c.is_empty()).count()
    }

    /// Whether the row has been scored
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.verdict != Verdict::Unevaluated)
    }

    fn apply(&mut self, feedback: &Feedback) {
        for (cell, &verdict) in self.cells.iter_mut().zip(feedback.verdicts()) {
            cell.verdict = verdict;
        }
    }
}

/// The full board: six rows and a pointer to the row accepting input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessGrid {
    rows: [Row; MAX_ROWS],
    current_row: usize,
    locked: bool,
}

impl Default for GuessGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessGrid {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: [Row::default(); MAX_ROWS],
            current_row: 1,
            locked: false,
        }
    }

    /// Store (or clear, with `None`) a letter in the current row
    ///
    /// Lowercase letters are accepted and stored uppercase.
    ///
    /// # Errors
    ///
    /// - `GridLocked` once the grid is locked
    /// - `InvalidCellInput` if `row` is not the current row, `col` is outside
    ///   1..=5, or `letter` is not an ASCII letter
    pub fn set_cell(&mut self, row: usize, col: usize, letter: Option<char>) -> Result<(), GameError> {
        if self.locked {
            return Err(GameError::GridLocked);
        }
        if row != self.current_row {
            return Err(GameError::InvalidCellInput {
                detail: format!("row {row} is not the active row {}", self.current_row),
            });
        }
        if !(1..=WORD_LENGTH).contains(&col) {
            return Err(GameError::InvalidCellInput {
                detail: format!("column {col} is outside 1..={WORD_LENGTH}"),
            });
        }
        let letter = match letter {
            Some(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            Some(c) => {
                return Err(GameError::InvalidCellInput {
                    detail: format!("'{c}' is not a letter"),
                });
            }
            None => None,
        };

        self.rows[row - 1].cells[col - 1].letter = letter;
        Ok(())
    }

    /// Check whether every cell of `row` is filled
    ///
    /// Out-of-range rows are never complete.
    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.row(row).is_some_and(Row::is_complete)
    }

    /// Move input to the next row; no-op on the last row
    pub fn advance_row(&mut self) {
        if self.current_row < MAX_ROWS {
            self.current_row += 1;
        }
    }

    /// Reject all further cell writes
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Clear all letters and verdicts, unlock, and return to row 1
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Assign verdicts to the cells of the current row
    pub(crate) fn apply_feedback(&mut self, feedback: &Feedback) {
        self.rows[self.current_row - 1].apply(feedback);
    }

    /// 1-based index of the row accepting input
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Row by 1-based index
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        row.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// The row accepting input
    #[must_use]
    pub fn active_row(&self) -> &Row {
        &self.rows[self.current_row - 1]
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }
}
