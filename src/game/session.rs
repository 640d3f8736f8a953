//! One game instance: target word, grid, and status

use crate::core::{GuessGrid, Word};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// No target word yet (or a new one is on its way)
    AwaitingWord,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or Lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AwaitingWord => "Awaiting word",
            Self::InProgress => "In progress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        };
        f.write_str(text)
    }
}

/// Snapshot of a game, owned by the controller and read by front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: Option<Word>,
    grid: GuessGrid,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::awaiting()
    }
}

impl GameSession {
    /// Session with no target word; the grid is open for typing
    #[must_use]
    pub fn awaiting() -> Self {
        Self {
            target: None,
            grid: GuessGrid::new(),
            status: GameStatus::AwaitingWord,
        }
    }

    /// Fresh game against `target`
    #[must_use]
    pub fn start(target: Word) -> Self {
        Self {
            target: Some(target),
            grid: GuessGrid::new(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn grid(&self) -> &GuessGrid {
        &self.grid
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.grid
            .rows()
            .iter()
            .filter(|row| row.is_evaluated())
            .count()
    }

    /// End-of-game notice, once the game is over
    #[must_use]
    pub fn terminal_message(&self) -> Option<String> {
        match (self.status, &self.target) {
            (GameStatus::Won, _) => Some("Congratulations! You guessed the word!".to_string()),
            (GameStatus::Lost, Some(target)) => Some(format!("Game Over. The word was {target}")),
            _ => None,
        }
    }

    pub(crate) fn grid_mut(&mut self) -> &mut GuessGrid {
        &mut self.grid
    }

    /// Enter a terminal status and lock the grid
    pub(crate) fn finish(&mut self, status: GameStatus) {
        debug_assert!(status.is_terminal());
        self.status = status;
        self.grid.lock();
    }
}
