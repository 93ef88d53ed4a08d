//! Display functions for game events

use colored::Colorize;

use super::formatters::{colorize_attempt, marks_to_emoji};
use crate::core::Feedback;
use crate::service::ScoreboardEntry;

/// Print one scored guess
pub fn print_feedback(turn: usize, max_attempts: usize, feedback: &Feedback) {
    if feedback.is_guess_valid() {
        println!(
            "  {turn}/{max_attempts}  {}  {}",
            colorize_attempt(feedback),
            marks_to_emoji(feedback.marks()),
        );
    } else {
        println!(
            "  {turn}/{max_attempts}  {}  {}",
            colorize_attempt(feedback),
            "rejected: not a playable word (attempt spent)".red(),
        );
    }
}

/// Print the round-start line
pub fn print_round_start(round_number: usize, word_length: usize, hint: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round {round_number}: {word_length} letters  {}",
        hint.bright_yellow().bold(),
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the round-won banner with the score gained
pub fn print_round_won(answer: &str, score: u32) {
    println!(
        "\n{} The word was {}. Score: {}",
        "✅ Round won!".green().bold(),
        answer.to_uppercase().bright_yellow().bold(),
        score.to_string().bright_cyan().bold(),
    );
}

/// Print the game-over banner
pub fn print_game_over(answer: Option<&str>, score: u32) {
    println!("\n{}", "═".repeat(60).red());
    match answer {
        Some(answer) => println!(
            "{} The word was {}.",
            "❌ Game over!".red().bold(),
            answer.to_uppercase().bright_yellow().bold(),
        ),
        None => println!("{}", "❌ Game over!".red().bold()),
    }
    println!(
        "Final score: {}",
        score.to_string().bright_cyan().bold(),
    );
    println!("{}", "═".repeat(60).red());
}

/// Print the session scoreboard, best first
pub fn print_scoreboard(entries: &[ScoreboardEntry]) {
    if entries.is_empty() {
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "SCOREBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (rank, entry) in entries.iter().enumerate() {
        println!(
            " {:>2}. {:<20} {:>6}  {}",
            rank + 1,
            entry.username,
            entry.score,
            entry.mode.dimmed(),
        );
    }
    println!();
}
