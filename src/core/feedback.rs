//! Per-letter verdicts and guess evaluation
//!
//! `Feedback::evaluate` scores a guess with a positional match followed by a
//! plain containment check. Letter counts are not tracked, so a letter that is
//! already matched elsewhere can still score `Present`:
//!
//! - `Correct` = same letter at the same position
//! - `Present` = letter appears anywhere in the target
//! - `Absent`  = letter does not appear in the target

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Evaluation state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// Cell has not been scored yet
    #[default]
    Unevaluated,
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unevaluated => '⬜',
        }
    }

    /// Ranking used to keep the most informative verdict per letter
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Unevaluated => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }
}

/// Ordered verdicts for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Create feedback from raw verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `target`
    ///
    /// Pure and deterministic: the same inputs always give the same feedback.
    ///
    /// # Examples
    /// ```
    /// use wordie::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.verdicts()[3], Verdict::Absent);
    /// assert_eq!(feedback.count_correct(), 4);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];

        for (i, (verdict, &letter)) in verdicts.iter_mut().zip(guess.chars()).enumerate() {
            *verdict = if letter == target.char_at(i) {
                Verdict::Correct
            } else if target.has_letter(letter) {
                Verdict::Present
            } else {
                Verdict::Absent
            };
        }

        Self(verdicts)
    }

    /// Verdicts in column order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of `Correct` verdicts
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of `Present` verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬛/⬜ for absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (verdict, ch) in verdicts.iter_mut().zip(chars) {
            *verdict = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬛' | '⬜' => Verdict::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(verdicts))
    }
}
