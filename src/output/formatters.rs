//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{Feedback, Hint, Mark};

/// Render marks as an emoji row
#[must_use]
pub fn marks_to_emoji(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬜',
            Mark::Invalid => '⬛',
        })
        .collect()
}

/// Color each attempt letter by its mark
///
/// Greens bold, yellows plain, absents dimmed, invalid letters red.
#[must_use]
pub fn colorize_attempt(feedback: &Feedback) -> String {
    feedback
        .attempt()
        .chars()
        .zip(feedback.marks())
        .map(|(ch, mark)| {
            let letter = ch.to_ascii_uppercase().to_string();
            match mark {
                Mark::Correct => letter.green().bold().to_string(),
                Mark::Present => letter.yellow().to_string(),
                Mark::Absent => letter.dimmed().to_string(),
                Mark::Invalid => letter.red().to_string(),
            }
        })
        .collect()
}

/// Uppercase hint with placeholders left as-is
#[must_use]
pub fn format_hint(hint: &Hint) -> String {
    hint.as_str().to_ascii_uppercase()
}
