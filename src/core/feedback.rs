//! Guess feedback generation
//!
//! Compares an attempt against the target word and produces one [`Mark`] per
//! letter. Duplicate letters are resolved the standard way: exact matches
//! claim their target letter first, then remaining attempt letters claim
//! whatever is left, left to right. A guess that fails the dictionary check
//! or has the wrong length is not an error: it becomes an all-[`Mark::Invalid`]
//! feedback that still counts as a move.

use super::{Dictionary, Mark, Word};

/// A scored attempt: the guessed text and one mark per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    attempt: String,
    marks: Vec<Mark>,
}

impl Feedback {
    /// Build a feedback from parts.
    #[must_use]
    pub fn of(attempt: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            attempt: attempt.into(),
            marks,
        }
    }

    /// All-`Correct` feedback for a word guessed outright.
    #[must_use]
    pub fn correct(word: &str) -> Self {
        Self::of(word, vec![Mark::Correct; word.chars().count()])
    }

    /// All-`Invalid` feedback for a rejected word.
    #[must_use]
    pub fn invalid(word: &str) -> Self {
        Self::of(word, vec![Mark::Invalid; word.chars().count()])
    }

    /// Score `attempt` against `target`.
    ///
    /// The attempt may be arbitrary text. If it is not a dictionary word, or
    /// its length differs from the target's, the result is all-`Invalid`
    /// (sized by the attempt itself) with the attempt echoed back unchanged.
    ///
    /// Accepted guesses are marked in two passes:
    /// 1. exact matches become `Correct` and consume their target letter;
    /// 2. remaining letters become `Present` while unconsumed copies exist
    ///    in the target, consumed left to right, everything else `Absent`.
    ///
    /// # Examples
    /// ```
    /// use lingo::core::{Feedback, Mark, Word};
    /// # struct Yes;
    /// # impl lingo::core::Dictionary for Yes {
    /// #     fn exists(&self, _: &str) -> bool { true }
    /// #     fn random_word(&mut self, length: usize) -> Result<Word, lingo::core::LengthNotSupported> {
    /// #         Err(lingo::core::LengthNotSupported { length })
    /// #     }
    /// # }
    ///
    /// let target = Word::new("banana").unwrap();
    /// let feedback = Feedback::generate(&target, "banaan", &Yes);
    /// assert!(feedback.is_guess_valid());
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Correct, Mark::Correct, Mark::Correct, Mark::Correct, Mark::Present, Mark::Present],
    /// );
    /// ```
    #[must_use]
    pub fn generate<D>(target: &Word, attempt: &str, dictionary: &D) -> Self
    where
        D: Dictionary + ?Sized,
    {
        let attempt_chars: Vec<char> = attempt.chars().collect();

        if !dictionary.exists(attempt) || attempt_chars.len() != target.len() {
            return Self::invalid(attempt);
        }

        let target_chars: Vec<char> = target.chars().collect();
        let mut marks = vec![Mark::Absent; target_chars.len()];
        let mut available = target.char_counts();

        // Exact-match pass: correct letters claim their target letter first
        for (i, &ch) in attempt_chars.iter().enumerate() {
            if ch == target_chars[i] {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&ch) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Present pass: remaining letters consume what is left, left to right
        for (i, &ch) in attempt_chars.iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&ch)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self {
            attempt: attempt.to_string(),
            marks,
        }
    }

    /// The guessed text, exactly as submitted.
    #[inline]
    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    /// One mark per attempt character.
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// True when every mark is `Correct`.
    ///
    /// A zero-letter guess carries no marks and never counts as guessed.
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|m| *m == Mark::Correct)
    }

    /// True when the guess was accepted (no `Invalid` mark).
    ///
    /// A zero-letter guess carries no marks and never counts as valid.
    #[must_use]
    pub fn is_guess_valid(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|m| *m != Mark::Invalid)
    }
}
