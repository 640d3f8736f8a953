//! Offline guess evaluation
//!
//! Scores a guess against a known target without touching the word service.

use crate::core::{Feedback, Word};
use crate::error::GameError;

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Validate both words and score `guess` against `target`
///
/// # Errors
///
/// Returns `InvalidCellInput` if either word is not five ASCII letters.
pub fn evaluate_guess(guess: &str, target: &str) -> Result<Evaluation, GameError> {
    let parse = |text: &str, role: &str| {
        Word::new(text).map_err(|e| GameError::InvalidCellInput {
            detail: format!("{role} '{text}': {e}"),
        })
    };

    let guess = parse(guess, "guess")?;
    let target = parse(target, "target")?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(Evaluation {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_valid_words() {
        let result = evaluate_guess("crate", "crane").unwrap();
        assert_eq!(result.guess.text(), "CRATE");
        assert_eq!(result.target.text(), "CRANE");
        assert_eq!(result.feedback, "GGG-G".parse().unwrap());
    }

    #[test]
    fn names_the_bad_word() {
        let err = evaluate_guess("crate", "cr4ne").unwrap_err();
        assert!(err.to_string().contains("target 'cr4ne'"));

        let err = evaluate_guess("abc", "crane").unwrap_err();
        assert!(err.to_string().contains("guess 'abc'"));
    }
}
