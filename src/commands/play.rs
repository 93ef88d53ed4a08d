//! Interactive play mode
//!
//! Text-based play loop against the rules engine: one session, any number of
//! games for the same player, scoreboard at the end.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

use crate::core::Dictionary;
use crate::engine::{GameState, MAX_ATTEMPTS, Round};
use crate::output::{
    format_hint, print_feedback, print_game_over, print_round_start, print_round_won,
    print_scoreboard,
};
use crate::service::GameService;

/// Scoreboard rows shown when the session ends.
const SCOREBOARD_ROWS: usize = 20;

/// Run the interactive play mode
///
/// # Errors
///
/// Returns an error on I/O failures or unrecoverable engine refusals.
pub fn run_play<D: Dictionary>(dictionary: D, random_length: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       L  I  N  G  O                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word. Five attempts per round; rounds keep coming");
    println!("until you miss one. An unplayable guess still spends an attempt.\n");
    println!("Commands: 'forfeit' to give up the game, 'quit' to leave\n");

    let mut service: GameService<D> = GameService::new(dictionary);

    let username = get_user_input("Your name")?;
    let username = if username.is_empty() {
        "anonymous".to_string()
    } else {
        username
    };

    'session: loop {
        let id = service.start_new_game(&username, random_length)?;
        let mut round_number = 1;

        loop {
            match service.game(id)?.state() {
                GameState::InRound => {
                    let (hint, length, turn) = {
                        let game = service.game(id)?;
                        let round = game.current_round().context("no active round")?;
                        (
                            format_hint(round.current_hint()),
                            round.word_length(),
                            round.attempts_used() + 1,
                        )
                    };

                    if turn == 1 {
                        print_round_start(round_number, length, &hint);
                    } else {
                        println!("  hint: {}", hint.bright_yellow());
                    }

                    let input = get_user_input("Guess")?;
                    match input.to_lowercase().as_str() {
                        "quit" | "q" | "exit" => break 'session,
                        "forfeit" => service.forfeit(id)?,
                        "" => continue,
                        _ => {
                            let feedback = service.guess(id, &input)?;
                            print_feedback(turn, MAX_ATTEMPTS, &feedback);
                        }
                    }
                }
                GameState::WaitingForRound => {
                    {
                        let game = service.game(id)?;
                        let answer = game
                            .current_round()
                            .map_or_else(String::new, |r| r.reveal_answer().to_string());
                        print_round_won(&answer, game.score());
                    }

                    let input = get_user_input("Next round? (Enter to continue, 'quit' to stop)")?;
                    if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                        break 'session;
                    }
                    service.start_new_round(id, random_length)?;
                    round_number += 1;
                }
                GameState::Eliminated => {
                    {
                        let game = service.game(id)?;
                        let answer = game.current_round().map(Round::reveal_answer);
                        print_game_over(answer, game.score());
                    }

                    let input = get_user_input("Play again? (y/n)")?;
                    if matches!(input.to_lowercase().as_str(), "y" | "yes") {
                        break;
                    }
                    break 'session;
                }
                // Games come out of start_new_game already running.
                GameState::New => break 'session,
            }
        }
    }

    print_scoreboard(&service.scoreboard(SCOREBOARD_ROWS));
    println!("👋 Thanks for playing!\n");
    Ok(())
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}
