//! Random word command
//!
//! CLI counterpart of the word-source lookup: fetch one random word of the
//! requested length.

use anyhow::Result;

use crate::core::Dictionary;

/// Print one random word of the requested length
///
/// # Errors
///
/// Fails when the dictionary has no word of that length.
pub fn run_word<D: Dictionary>(mut dictionary: D, length: usize) -> Result<()> {
    let word = dictionary.random_word(length)?;
    println!("{word}");
    Ok(())
}
