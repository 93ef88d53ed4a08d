//! Round and game state machines
//!
//! The rules engine proper: [`Round`] handles one word with a fixed attempt
//! budget, [`Game`] sequences rounds with scoring, word-length progression,
//! and terminal elimination. Both are plain in-memory aggregates; storage
//! and transport live elsewhere.

mod error;
mod game;
mod round;

pub use error::GameError;
pub use game::{Game, GameId, GameState, WORD_LENGTHS};
pub use round::{MAX_ATTEMPTS, Round, RoundOutcome};
