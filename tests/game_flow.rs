//! End-to-end game scenarios through the public API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use wordie::core::{Feedback, MAX_ROWS, Verdict, Word};
use wordie::error::GameError;
use wordie::game::{GameController, GameStatus, Outcome};
use wordie::provider::{ProviderError, WordProvider};

/// Provider that replays a fixed script of results.
struct ScriptedProvider {
    results: Mutex<VecDeque<Result<&'static str, ProviderError>>>,
}

impl ScriptedProvider {
    fn new(results: Vec<Result<&'static str, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }
}

#[async_trait]
impl WordProvider for ScriptedProvider {
    async fn fetch_word(&self) -> Result<Word, ProviderError> {
        let next = self
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ProviderError::Timeout));
        next.map(|w| Word::new(w).unwrap())
    }
}

fn verdicts(controller: &GameController, row: usize) -> Vec<Verdict> {
    controller
        .session()
        .grid()
        .row(row)
        .unwrap()
        .cells()
        .iter()
        .map(|c| c.verdict())
        .collect()
}

#[tokio::test]
async fn crate_against_crane_advances() {
    let provider = ScriptedProvider::new(vec![Ok("crane")]);
    let mut controller = GameController::new();
    controller.load_word(&provider).await.unwrap();

    let outcome = controller.enter_guess("CRATE").unwrap();

    use Verdict::{Absent, Correct};
    assert_eq!(
        verdicts(&controller, 1),
        vec![Correct, Correct, Correct, Absent, Correct]
    );
    assert!(matches!(outcome, Outcome::Advanced { next_row: 2, .. }));
    assert_eq!(controller.phase(), GameStatus::InProgress);
    assert_eq!(controller.session().grid().current_row(), 2);
}

#[tokio::test]
async fn alley_on_last_row_loses() {
    let provider = ScriptedProvider::new(vec![Ok("apple")]);
    let mut controller = GameController::new();
    controller.load_word(&provider).await.unwrap();

    for guess in ["crane", "slate", "pilot", "mound", "bring"] {
        let outcome = controller.enter_guess(guess).unwrap();
        assert!(matches!(outcome, Outcome::Advanced { .. }));
    }
    assert_eq!(controller.session().grid().current_row(), MAX_ROWS);

    let outcome = controller.enter_guess("alley").unwrap();
    assert!(matches!(outcome, Outcome::Lost { .. }));
    assert_eq!(controller.phase(), GameStatus::Lost);
    assert!(controller.session().grid().is_locked());
    assert_eq!(controller.session().grid().current_row(), MAX_ROWS);
    assert_eq!(
        controller.session().terminal_message().as_deref(),
        Some("Game Over. The word was APPLE")
    );
    assert_eq!(controller.enter_guess("apple"), Err(GameError::GridLocked));
}

#[tokio::test]
async fn exact_guess_wins_with_all_correct() {
    let provider = ScriptedProvider::new(vec![Ok("Crane")]);
    let mut controller = GameController::new();
    controller.load_word(&provider).await.unwrap();

    let outcome = controller.enter_guess("crane").unwrap();
    assert_eq!(outcome.feedback(), &Feedback::PERFECT);
    assert_eq!(controller.phase(), GameStatus::Won);
    assert!(controller.session().grid().is_locked());
}

#[tokio::test]
async fn failed_initial_load_then_submit_reports_not_loaded() {
    let provider = ScriptedProvider::new(vec![Err(ProviderError::Status { code: 500 })]);
    let mut controller = GameController::new();

    let err = controller.load_word(&provider).await.unwrap_err();
    assert!(matches!(err, GameError::WordFetchFailed { .. }));
    assert_eq!(controller.phase(), GameStatus::AwaitingWord);

    assert_eq!(controller.enter_guess("crane"), Err(GameError::WordNotLoaded));
    assert_eq!(controller.session().grid().current_row(), 1);
    assert!(verdicts(&controller, 1).iter().all(|&v| v == Verdict::Unevaluated));
}

#[tokio::test]
async fn reset_after_loss_starts_over() {
    let provider = ScriptedProvider::new(vec![Ok("apple"), Ok("crane")]);
    let mut controller = GameController::new();
    controller.load_word(&provider).await.unwrap();
    for _ in 0..MAX_ROWS {
        controller.enter_guess("zzzzz").unwrap();
    }
    assert_eq!(controller.phase(), GameStatus::Lost);

    controller.begin_fetch().unwrap();
    assert_eq!(controller.phase(), GameStatus::AwaitingWord);
    let word = provider.fetch_word().await;
    controller.complete_fetch(word).unwrap();

    assert_eq!(controller.phase(), GameStatus::InProgress);
    let grid = controller.session().grid();
    assert_eq!(grid.current_row(), 1);
    assert!(!grid.is_locked());
    for row in 1..=MAX_ROWS {
        assert!(verdicts(&controller, row).iter().all(|&v| v == Verdict::Unevaluated));
    }
}

#[tokio::test]
async fn evaluation_is_repeatable() {
    let guess = Word::new("llama").unwrap();
    let target = Word::new("lemon").unwrap();
    let first = Feedback::evaluate(&guess, &target);
    assert_eq!(first, Feedback::evaluate(&guess, &target));
    // Second L still counts as Present even though LEMON has one L
    assert_eq!(first.verdicts()[1], Verdict::Present);
}
