//! Terminal output formatting
//!
//! Display utilities for the play loop and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_feedback, print_game_over, print_round_start, print_round_won, print_scoreboard,
};
pub use formatters::{colorize_attempt, format_hint, marks_to_emoji};
