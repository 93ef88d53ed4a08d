//! A single word-guessing round
//!
//! A round owns one target word and a fixed attempt budget. Every guess is
//! scored, recorded, and counted, including rejected guesses, which burn an
//! attempt without revealing anything. The round ends won on a fully correct
//! guess, or lost when the budget runs out.

use super::GameError;
use crate::core::{Dictionary, Feedback, Hint, Word};

/// Attempt budget for every round.
pub const MAX_ATTEMPTS: usize = 5;

/// Result of a running or finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

/// One word-guessing episode against a fixed target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Word,
    max_attempts: usize,
    attempts_used: usize,
    outcome: RoundOutcome,
    history: Vec<Feedback>,
    hint: Hint,
}

impl Round {
    /// Start a round for `target` with a fresh hint and an empty history.
    #[must_use]
    pub fn new(target: Word) -> Self {
        let hint = Hint::initial_for(&target);
        Self {
            target,
            max_attempts: MAX_ATTEMPTS,
            attempts_used: 0,
            outcome: RoundOutcome::InProgress,
            history: Vec::new(),
            hint,
        }
    }

    /// Score an attempt against the target.
    ///
    /// Every call consumes one attempt, rejected guesses included. A valid
    /// guess also overlays the hint with any newly correct letters; an
    /// invalid one leaves the hint untouched. The feedback is appended to
    /// the history either way.
    ///
    /// # Errors
    /// Returns `InvalidAction` if the round is already over.
    pub fn guess<D>(&mut self, attempt: &str, dictionary: &D) -> Result<Feedback, GameError>
    where
        D: Dictionary + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::InvalidAction("guess on a completed round"));
        }

        let feedback = Feedback::generate(&self.target, attempt, dictionary);

        if feedback.is_guess_valid() {
            self.hint = self.hint.overlay(&self.target, feedback.marks());
        }

        self.history.push(feedback.clone());
        self.attempts_used += 1;

        if feedback.is_word_guessed() {
            self.outcome = RoundOutcome::Won;
        } else if self.attempts_used >= self.max_attempts {
            self.outcome = RoundOutcome::Lost;
        }

        Ok(feedback)
    }

    /// Attempts left before the round is lost.
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.attempts_used
    }

    /// Guesses consumed so far, valid and invalid alike.
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// The round's fixed attempt budget.
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Current outcome.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Every feedback produced so far, in guess order.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// The hint as of the latest valid guess.
    #[inline]
    #[must_use]
    pub fn current_hint(&self) -> &Hint {
        &self.hint
    }

    /// True once the outcome is terminal.
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != RoundOutcome::InProgress
    }

    /// True when the word was guessed.
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == RoundOutcome::Won
    }

    /// The target word. Intended for completed rounds; calling this
    /// mid-round leaks the answer, which is the caller's problem.
    #[must_use]
    pub fn reveal_answer(&self) -> &str {
        self.target.text()
    }

    /// Length of the target word.
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LengthNotSupported, Mark};
    use proptest::prelude::*;

    struct SetDict(Vec<String>);

    impl SetDict {
        fn of(words: &[&str]) -> Self {
            Self(words.iter().map(ToString::to_string).collect())
        }
    }

    impl Dictionary for SetDict {
        fn exists(&self, word: &str) -> bool {
            self.0.iter().any(|w| w == word)
        }

        fn random_word(&mut self, length: usize) -> Result<Word, LengthNotSupported> {
            self.0
                .iter()
                .find(|w| w.len() == length)
                .map(|w| Word::new(w).unwrap())
                .ok_or(LengthNotSupported { length })
        }
    }

    fn round(target: &str) -> Round {
        Round::new(Word::new(target).unwrap())
    }

    #[test]
    fn new_round_starts_clean() {
        let round = round("apple");

        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS);
        assert!(round.history().is_empty());
        assert_eq!(round.current_hint().as_str(), "a....");
        assert!(!round.is_over());
    }

    #[test]
    fn first_guess_win() {
        let dict = SetDict::of(&["apple"]);
        let mut round = round("apple");

        let feedback = round.guess("apple", &dict).unwrap();

        assert!(feedback.is_word_guessed());
        assert_eq!(round.outcome(), RoundOutcome::Won);
        assert_eq!(round.attempts_used(), 1);
        assert_eq!(round.attempts_remaining(), 4);
        assert!(round.is_solved());
        assert_eq!(round.reveal_answer(), "apple");
    }

    #[test]
    fn fifth_wrong_guess_loses() {
        let dict = SetDict::of(&["apple", "crane"]);
        let mut round = round("apple");

        for _ in 0..4 {
            round.guess("crane", &dict).unwrap();
        }
        assert_eq!(round.outcome(), RoundOutcome::InProgress);

        round.guess("crane", &dict).unwrap();

        assert_eq!(round.outcome(), RoundOutcome::Lost);
        assert_eq!(round.attempts_remaining(), 0);
        assert!(round.is_over());
        assert!(!round.is_solved());
    }

    #[test]
    fn winning_on_the_last_attempt_beats_losing() {
        let dict = SetDict::of(&["apple", "crane"]);
        let mut round = round("apple");

        for _ in 0..4 {
            round.guess("crane", &dict).unwrap();
        }
        round.guess("apple", &dict).unwrap();

        assert_eq!(round.outcome(), RoundOutcome::Won);
        assert_eq!(round.attempts_remaining(), 0);
    }

    #[test]
    fn invalid_guess_burns_an_attempt_and_keeps_the_hint() {
        let dict = SetDict::of(&["apple"]);
        let mut round = round("apple");

        let feedback = round.guess("zzzzz", &dict).unwrap();

        assert!(!feedback.is_guess_valid());
        assert_eq!(round.attempts_used(), 1);
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.current_hint().as_str(), "a....");
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn valid_guess_advances_the_hint() {
        let dict = SetDict::of(&["aplle", "apple"]);
        let mut round = round("apple");

        let feedback = round.guess("aplle", &dict).unwrap();

        assert_eq!(
            feedback.marks(),
            &[
                Mark::Correct,
                Mark::Correct,
                Mark::Absent,
                Mark::Correct,
                Mark::Correct,
            ],
        );
        assert_eq!(round.current_hint().as_str(), "ap.le");
    }

    #[test]
    fn history_keeps_invalid_and_valid_guesses_in_order() {
        let dict = SetDict::of(&["apple", "crane"]);
        let mut round = round("apple");

        round.guess("zzzzz", &dict).unwrap();
        round.guess("crane", &dict).unwrap();

        assert_eq!(round.history().len(), 2);
        assert_eq!(round.history()[0].attempt(), "zzzzz");
        assert!(!round.history()[0].is_guess_valid());
        assert_eq!(round.history()[1].attempt(), "crane");
        assert!(round.history()[1].is_guess_valid());
    }

    #[test]
    fn guessing_after_the_round_is_over_fails() {
        let dict = SetDict::of(&["apple"]);
        let mut round = round("apple");

        round.guess("apple", &dict).unwrap();

        let err = round.guess("apple", &dict).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidAction("guess on a completed round"),
        );
        assert_eq!(round.attempts_used(), 1);
    }

    proptest! {
        /// Attempts increase by exactly one per guess, valid or not, and the
        /// remaining count always complements it.
        #[test]
        fn attempt_accounting_holds(attempts in prop::collection::vec(
            prop_oneof![
                Just("apple"),   // winning guess
                Just("crane"),   // valid, wrong
                Just("zzzzz"),   // not a word
                Just("toolong"), // wrong length
            ],
            1..10,
        )) {
            let dict = SetDict::of(&["apple", "crane", "toolong"]);
            let mut round = round("apple");

            let mut expected_used = 0;
            for attempt in attempts {
                if round.is_over() {
                    break;
                }
                round.guess(attempt, &dict).unwrap();
                expected_used += 1;

                prop_assert_eq!(round.attempts_used(), expected_used);
                prop_assert_eq!(
                    round.attempts_remaining(),
                    round.max_attempts() - expected_used,
                );
                prop_assert!(round.attempts_used() <= round.max_attempts());
            }
        }
    }
}
