//! Game error types.

use crate::provider::ProviderError;
use derive_more::{Display, Error};

/// Reasons a game action is rejected.
///
/// Every variant is terminal to the attempt that produced it and leaves the
/// game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The word provider failed; no session was started or reset.
    #[display("Failed to fetch word: {reason}")]
    WordFetchFailed {
        /// Underlying provider failure.
        reason: ProviderError,
    },
    /// A row was submitted before any target word arrived.
    #[display("Word not loaded yet!")]
    WordNotLoaded,
    /// A word fetch is already outstanding.
    #[display("A new word is already being fetched")]
    FetchInFlight,
    /// The game is over; cells can no longer change.
    #[display("The game is over. Start a new game to keep playing")]
    GridLocked,
    /// The current row still has empty cells.
    #[display("Row {row} is not complete")]
    RowIncomplete {
        /// 1-based row index.
        row: usize,
    },
    /// Rejected cell write (wrong row, column out of range, or not a letter).
    #[display("Invalid input: {detail}")]
    InvalidCellInput {
        /// Human-readable description of what was wrong.
        detail: String,
    },
}

impl From<ProviderError> for GameError {
    fn from(reason: ProviderError) -> Self {
        Self::WordFetchFailed { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_notices() {
        assert_eq!(GameError::WordNotLoaded.to_string(), "Word not loaded yet!");
        assert_eq!(
            GameError::RowIncomplete { row: 3 }.to_string(),
            "Row 3 is not complete"
        );
    }

    #[test]
    fn provider_errors_convert_to_fetch_failures() {
        let err: GameError = ProviderError::Status { code: 503 }.into();
        assert!(matches!(
            err,
            GameError::WordFetchFailed {
                reason: ProviderError::Status { code: 503 }
            }
        ));
        assert!(err.to_string().contains("503"));
    }
}
