//! Word lists and the in-memory dictionary
//!
//! [`WordBank`] is the game's [`Dictionary`] implementation: validated words
//! bucketed by length for target selection, plus a membership set for guess
//! checks. The bank owns its random generator so callers can seed it for
//! deterministic games.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_5, WORDS_5_COUNT, WORDS_6, WORDS_6_COUNT, WORDS_7, WORDS_7_COUNT};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;

use crate::core::{Dictionary, LengthNotSupported, Word};

/// In-memory word source backing the game's dictionary capability.
pub struct WordBank<R: Rng = StdRng> {
    by_length: FxHashMap<usize, Vec<Word>>,
    known: FxHashSet<String>,
    rng: R,
}

impl WordBank<StdRng> {
    /// Bank over the embedded 5/6/7-letter lists with an OS-seeded generator.
    #[must_use]
    pub fn embedded() -> Self {
        let mut words = loader::words_from_slice(WORDS_5);
        words.extend(loader::words_from_slice(WORDS_6));
        words.extend(loader::words_from_slice(WORDS_7));
        Self::from_words(words, StdRng::from_os_rng())
    }

    /// Bank loaded from a word file, one word per line.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words, StdRng::from_os_rng()))
    }
}

impl<R: Rng> WordBank<R> {
    /// Bank over the given words, deduplicated, drawing from `rng`.
    pub fn from_words(words: Vec<Word>, rng: R) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut known = FxHashSet::default();

        for word in words {
            if known.insert(word.text().to_string()) {
                by_length.entry(word.len()).or_default().push(word);
            }
        }

        debug!(
            "word bank ready: {} words across {} lengths",
            known.len(),
            by_length.len(),
        );

        Self {
            by_length,
            known,
            rng,
        }
    }

    /// Total number of distinct words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.known.len()
    }

    /// True when at least one word of `length` is available.
    #[must_use]
    pub fn has_length(&self, length: usize) -> bool {
        self.by_length
            .get(&length)
            .is_some_and(|bucket| !bucket.is_empty())
    }
}

impl<R: Rng> Dictionary for WordBank<R> {
    fn exists(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    fn random_word(&mut self, length: usize) -> Result<Word, LengthNotSupported> {
        let bucket = self
            .by_length
            .get(&length)
            .filter(|bucket| !bucket.is_empty())
            .ok_or(LengthNotSupported { length })?;

        Ok(bucket[self.rng.random_range(0..bucket.len())].clone())
    }
}
