//! Lingo game engine
//!
//! Rules engine for a Lingo-style word-guessing game: per-letter feedback
//! with proper duplicate handling, a progressively revealed hint, and a
//! round/game state machine with scoring, 5/6/7-letter word progression,
//! and terminal elimination.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo::engine::{Game, GameId, GameState};
//! use lingo::wordlists::WordBank;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut bank = WordBank::embedded();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let mut game = Game::new(GameId(1), "ada", false);
//! game.start_game(&mut bank, &mut rng).unwrap();
//!
//! assert_eq!(game.state(), GameState::InRound);
//! assert_eq!(game.last_word_length(), 5);
//! ```

// Core domain types
pub mod core;

// Round and game state machines
pub mod engine;

// Word lists and the dictionary implementation
pub mod wordlists;

// Orchestration and storage seams
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
