//! Game state machine
//!
//! `AwaitingWord -> InProgress -> {Won, Lost}`, with a reset from any state
//! going back through `AwaitingWord`. The controller owns the `GameSession`;
//! front ends read it through `session()` and drive it with the methods below.
//!
//! Word fetches are single-slot: `begin_fetch` refuses to start a second one
//! while the first is outstanding, and nothing changes until `complete_fetch`
//! delivers the result.

use super::session::{GameSession, GameStatus};
use crate::core::{Feedback, MAX_ROWS, Word};
use crate::error::GameError;
use crate::provider::{ProviderError, WordProvider};
use tracing::{debug, info, instrument, warn};

/// What a row submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Wrong guess; input moved to `next_row`
    Advanced { feedback: Feedback, next_row: usize },
    /// Guess matched the target on row `attempts`
    Won { feedback: Feedback, attempts: usize },
    /// Last row used without a match
    Lost { feedback: Feedback, target: Word },
}

impl Outcome {
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        match self {
            Self::Advanced { feedback, .. }
            | Self::Won { feedback, .. }
            | Self::Lost { feedback, .. } => feedback,
        }
    }
}

/// Drives a `GameSession` through its lifecycle
#[derive(Debug, Default)]
pub struct GameController {
    session: GameSession,
    fetch_pending: bool,
}

impl GameController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    ///
    /// `AwaitingWord` while a fetch is outstanding, even if an older session
    /// is still on screen.
    #[must_use]
    pub const fn phase(&self) -> GameStatus {
        if self.fetch_pending {
            GameStatus::AwaitingWord
        } else {
            self.session.status()
        }
    }

    /// Read-only view of the game
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn is_fetch_pending(&self) -> bool {
        self.fetch_pending
    }

    /// Claim the single fetch slot
    ///
    /// # Errors
    ///
    /// Returns `FetchInFlight` if a fetch is already outstanding.
    pub fn begin_fetch(&mut self) -> Result<(), GameError> {
        if self.fetch_pending {
            debug!("Fetch refused, one already in flight");
            return Err(GameError::FetchInFlight);
        }
        self.fetch_pending = true;
        debug!("Fetch started");
        Ok(())
    }

    /// Apply the result of a word fetch
    ///
    /// On success a brand new session starts on row 1. On failure the
    /// existing session is kept exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `WordFetchFailed` when `result` is an error.
    pub fn complete_fetch(&mut self, result: Result<Word, ProviderError>) -> Result<(), GameError> {
        self.fetch_pending = false;

        match result {
            Ok(word) => {
                info!(previous = %self.session.status(), "New word loaded, game started");
                self.session = GameSession::start(word);
                Ok(())
            }
            Err(reason) => {
                warn!(error = %reason, status = %self.session.status(), "Word fetch failed");
                Err(GameError::WordFetchFailed { reason })
            }
        }
    }

    /// Fetch a word from `provider` and start a game with it
    ///
    /// # Errors
    ///
    /// Returns `FetchInFlight` if a fetch is already outstanding, or
    /// `WordFetchFailed` if the provider fails.
    #[instrument(skip_all)]
    pub async fn load_word<P>(&mut self, provider: &P) -> Result<(), GameError>
    where
        P: WordProvider + ?Sized,
    {
        self.begin_fetch()?;
        let result = provider.fetch_word().await;
        self.complete_fetch(result)
    }

    /// Start over with a freshly fetched word
    ///
    /// Allowed from any state. The old session stays visible (and locked, if
    /// the game was over) until the new word arrives.
    ///
    /// # Errors
    ///
    /// Same as [`GameController::load_word`].
    pub async fn reset<P>(&mut self, provider: &P) -> Result<(), GameError>
    where
        P: WordProvider + ?Sized,
    {
        info!(status = %self.session.status(), "Reset requested");
        self.load_word(provider).await
    }

    /// Write or clear one cell of the current row
    ///
    /// # Errors
    ///
    /// `GridLocked` after the game ends, `InvalidCellInput` for a bad
    /// position or character.
    pub fn set_cell(&mut self, row: usize, col: usize, letter: Option<char>) -> Result<(), GameError> {
        self.session.grid_mut().set_cell(row, col, letter)
    }

    /// Score the current row and move the game forward
    ///
    /// # Errors
    ///
    /// - `WordNotLoaded` while awaiting a word
    /// - `GridLocked` once the game is over
    /// - `RowIncomplete` if the current row has empty cells
    pub fn submit_row(&mut self) -> Result<Outcome, GameError> {
        let target = match (self.phase(), self.session.target()) {
            (GameStatus::AwaitingWord, _) | (_, None) => {
                warn!("Row submitted before word loaded");
                return Err(GameError::WordNotLoaded);
            }
            (GameStatus::Won | GameStatus::Lost, _) => return Err(GameError::GridLocked),
            (GameStatus::InProgress, Some(target)) => target.clone(),
        };

        let row = self.session.grid().current_row();
        let guess = self
            .session
            .grid()
            .active_row()
            .guess()
            .ok_or(GameError::RowIncomplete { row })?;

        let feedback = Feedback::evaluate(&guess, &target);
        self.session.grid_mut().apply_feedback(&feedback);
        debug!(row, %guess, %feedback, "Row evaluated");

        let outcome = if guess == target {
            self.session.finish(GameStatus::Won);
            info!(attempts = row, "Game won");
            Outcome::Won {
                feedback,
                attempts: row,
            }
        } else if row == MAX_ROWS {
            self.session.finish(GameStatus::Lost);
            info!(%target, "Game lost");
            Outcome::Lost { feedback, target }
        } else {
            self.session.grid_mut().advance_row();
            Outcome::Advanced {
                feedback,
                next_row: row + 1,
            }
        };

        Ok(outcome)
    }

    /// Fill the current row with `guess` and submit it
    ///
    /// # Errors
    ///
    /// `InvalidCellInput` if `guess` is not a 5-letter word, otherwise the
    /// same errors as [`GameController::set_cell`] and
    /// [`GameController::submit_row`].
    pub fn enter_guess(&mut self, guess: &str) -> Result<Outcome, GameError> {
        let word = Word::new(guess).map_err(|e| GameError::InvalidCellInput {
            detail: e.to_string(),
        })?;

        let row = self.session.grid().current_row();
        for (col, &letter) in word.chars().iter().enumerate() {
            self.set_cell(row, col + 1, Some(char::from(letter)))?;
        }

        self.submit_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Hands out queued results in order
    struct Scripted(Mutex<VecDeque<Result<Word, ProviderError>>>);

    impl Scripted {
        fn new(results: impl IntoIterator<Item = Result<&'static str, ProviderError>>) -> Self {
            let queue = results
                .into_iter()
                .map(|r| r.map(|w| Word::new(w).unwrap()))
                .collect();
            Self(Mutex::new(queue))
        }
    }

    #[async_trait]
    impl WordProvider for Scripted {
        async fn fetch_word(&self) -> Result<Word, ProviderError> {
            self.0
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ProviderError::Timeout))
        }
    }

    fn offline() -> ProviderError {
        ProviderError::Transport {
            message: "offline".to_string(),
        }
    }

    async fn started(target: &'static str) -> GameController {
        let mut controller = GameController::new();
        controller
            .load_word(&Scripted::new([Ok(target)]))
            .await
            .unwrap();
        controller
    }

    #[test]
    fn new_controller_awaits_word() {
        let controller = GameController::new();
        assert_eq!(controller.phase(), GameStatus::AwaitingWord);
        assert_eq!(controller.session().grid().current_row(), 1);
        assert!(!controller.is_fetch_pending());
    }

    #[tokio::test]
    async fn successful_fetch_starts_game() {
        let controller = started("crane").await;
        assert_eq!(controller.phase(), GameStatus::InProgress);
        assert_eq!(controller.session().target().map(Word::text), Some("CRANE"));
    }

    #[tokio::test]
    async fn failed_fetch_stays_awaiting() {
        let mut controller = GameController::new();
        let err = controller
            .load_word(&Scripted::new([Err(offline())]))
            .await
            .unwrap_err();

        assert!(matches!(err, GameError::WordFetchFailed { .. }));
        assert_eq!(controller.phase(), GameStatus::AwaitingWord);
        assert!(!controller.is_fetch_pending());
    }

    #[test]
    fn second_fetch_is_refused_while_pending() {
        let mut controller = GameController::new();
        controller.begin_fetch().unwrap();
        assert_eq!(controller.begin_fetch(), Err(GameError::FetchInFlight));

        controller
            .complete_fetch(Ok(Word::new("crane").unwrap()))
            .unwrap();
        assert!(controller.begin_fetch().is_ok());
    }

    #[tokio::test]
    async fn wrong_guess_advances_row() {
        let mut controller = started("crane").await;
        let outcome = controller.enter_guess("crate").unwrap();

        assert_eq!(
            outcome,
            Outcome::Advanced {
                feedback: "GGG-G".parse().unwrap(),
                next_row: 2,
            }
        );
        assert_eq!(controller.session().grid().current_row(), 2);
        assert_eq!(controller.phase(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn correct_guess_wins_and_locks() {
        let mut controller = started("crane").await;
        controller.enter_guess("slate").unwrap();
        let outcome = controller.enter_guess("CRANE").unwrap();

        assert_eq!(
            outcome,
            Outcome::Won {
                feedback: Feedback::PERFECT,
                attempts: 2,
            }
        );
        assert_eq!(controller.phase(), GameStatus::Won);
        assert!(controller.session().grid().is_locked());
        assert_eq!(controller.set_cell(2, 1, Some('A')), Err(GameError::GridLocked));
        assert_eq!(controller.submit_row(), Err(GameError::GridLocked));
    }

    #[tokio::test]
    async fn sixth_miss_loses() {
        let mut controller = started("apple").await;
        for _ in 0..5 {
            controller.enter_guess("crane").unwrap();
        }
        let outcome = controller.enter_guess("alley").unwrap();

        assert!(matches!(outcome, Outcome::Lost { ref target, .. } if target.text() == "APPLE"));
        assert_eq!(controller.phase(), GameStatus::Lost);
        assert_eq!(controller.session().grid().current_row(), MAX_ROWS);
        assert!(controller.session().grid().is_locked());
        assert_eq!(
            controller.session().terminal_message().as_deref(),
            Some("Game Over. The word was APPLE")
        );
    }

    #[tokio::test]
    async fn incomplete_row_is_rejected() {
        let mut controller = started("crane").await;
        controller.set_cell(1, 1, Some('c')).unwrap();
        assert_eq!(
            controller.submit_row(),
            Err(GameError::RowIncomplete { row: 1 })
        );
        assert_eq!(controller.session().grid().current_row(), 1);
    }

    #[test]
    fn submit_without_word_changes_nothing() {
        let mut controller = GameController::new();
        for (col, c) in "CRANE".chars().enumerate() {
            controller.set_cell(1, col + 1, Some(c)).unwrap();
        }
        let before = controller.session().clone();

        assert_eq!(controller.submit_row(), Err(GameError::WordNotLoaded));
        assert_eq!(controller.session(), &before);
        assert!(
            controller.session().grid().row(1).unwrap().cells()
                .iter()
                .all(|c| c.verdict() == Verdict::Unevaluated)
        );
    }

    #[tokio::test]
    async fn reset_after_win_starts_clean() {
        let mut controller = started("crane").await;
        controller.enter_guess("crane").unwrap();

        controller
            .reset(&Scripted::new([Ok("apple")]))
            .await
            .unwrap();

        let session = controller.session();
        assert_eq!(controller.phase(), GameStatus::InProgress);
        assert_eq!(session.target().map(Word::text), Some("APPLE"));
        assert_eq!(session.grid().current_row(), 1);
        assert!(!session.grid().is_locked());
        assert_eq!(session.attempts(), 0);
    }

    #[tokio::test]
    async fn failed_reset_keeps_finished_game() {
        let mut controller = started("crane").await;
        controller.enter_guess("crane").unwrap();
        let before = controller.session().clone();

        let err = controller
            .reset(&Scripted::new([Err(ProviderError::Status { code: 500 })]))
            .await
            .unwrap_err();

        assert!(matches!(err, GameError::WordFetchFailed { .. }));
        assert_eq!(controller.session(), &before);
        assert_eq!(controller.phase(), GameStatus::Won);
    }

    #[tokio::test]
    async fn pending_reset_blocks_submission() {
        let mut controller = started("crane").await;
        controller.begin_fetch().unwrap();
        assert_eq!(controller.phase(), GameStatus::AwaitingWord);
        assert_eq!(
            controller.enter_guess("slate"),
            Err(GameError::WordNotLoaded)
        );
    }

    #[test]
    fn enter_guess_rejects_non_words() {
        let mut controller = GameController::new();
        assert!(matches!(
            controller.enter_guess("cr4ne"),
            Err(GameError::InvalidCellInput { .. })
        ));
        assert!(matches!(
            controller.enter_guess("toolong"),
            Err(GameError::InvalidCellInput { .. })
        ));
    }
}
