//! Progressive hint overlay
//!
//! A hint is the target word with unsolved positions masked out. It starts
//! with only the first letter visible and gains a letter whenever a valid
//! guess scores `Correct` on a masked position. Revealed positions never
//! revert.

use super::{Mark, Word};
use std::fmt;

/// Character shown for positions not yet revealed.
pub const PLACEHOLDER: char = '.';

/// Partially revealed target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    value: String,
}

impl Hint {
    /// Starting hint for a round: first letter revealed, the rest masked.
    ///
    /// # Examples
    /// ```
    /// use lingo::core::{Hint, Word};
    ///
    /// let word = Word::new("bruhh").unwrap();
    /// assert_eq!(Hint::initial_for(&word).as_str(), "b....");
    /// ```
    #[must_use]
    pub fn initial_for(word: &Word) -> Self {
        let mut value = String::with_capacity(word.len());
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            value.push(first);
        }
        for _ in chars {
            value.push(PLACEHOLDER);
        }
        Self { value }
    }

    /// Overlay newly revealed letters onto this hint.
    ///
    /// Positions marked `Correct` show the target letter; every other
    /// position keeps whatever this hint already shows, so earlier reveals
    /// are preserved. Pure: returns a new hint. Marks and target must match
    /// this hint's length.
    #[must_use]
    pub fn overlay(&self, target: &Word, marks: &[Mark]) -> Self {
        debug_assert_eq!(self.len(), target.len());
        debug_assert_eq!(self.len(), marks.len());

        let value = self
            .value
            .chars()
            .zip(target.chars())
            .zip(marks)
            .map(|((prev, revealed), mark)| {
                if *mark == Mark::Correct {
                    revealed
                } else {
                    prev
                }
            })
            .collect();

        Self { value }
    }

    /// The hint text: revealed letters and placeholders.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Hint length, equal to the target word's length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True for the hint of a zero-length word, which cannot occur in play.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
