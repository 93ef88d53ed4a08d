//! Game orchestration
//!
//! Thin coordination between game aggregates, the dictionary collaborator,
//! and the repository: load, delegate, store. Attempts are normalized here
//! (trimmed, lowercased) before they reach the engine, mirroring what a
//! transport layer would do.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

use super::{GameRepository, InMemoryGameRepository};
use crate::core::{Dictionary, Feedback};
use crate::engine::{Game, GameError, GameId};

/// Row in the scoreboard query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardEntry {
    pub username: String,
    pub score: u32,
    pub mode: &'static str,
}

/// Failures surfaced by service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    GameNotFound(GameId),
    Game(GameError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameNotFound(id) => write!(f, "{id} not found"),
            Self::Game(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GameNotFound(_) => None,
            Self::Game(err) => Some(err),
        }
    }
}

impl From<GameError> for ServiceError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

/// Coordinates game aggregates, the dictionary, and storage.
pub struct GameService<D: Dictionary, S: GameRepository = InMemoryGameRepository> {
    dictionary: D,
    store: S,
    rng: StdRng,
}

impl<D: Dictionary> GameService<D> {
    /// Service over a fresh in-memory repository.
    pub fn new(dictionary: D) -> Self {
        Self::with_store(dictionary, InMemoryGameRepository::new())
    }
}

impl<D: Dictionary, S: GameRepository> GameService<D, S> {
    /// Service over an explicit repository, OS-seeded randomness.
    pub fn with_store(dictionary: D, store: S) -> Self {
        Self::with_rng(dictionary, store, StdRng::from_os_rng())
    }

    /// Service with injected randomness, for deterministic sessions.
    pub fn with_rng(dictionary: D, store: S, rng: StdRng) -> Self {
        Self {
            dictionary,
            store,
            rng,
        }
    }

    /// Create a game for `username` and start its first round.
    ///
    /// # Errors
    /// Propagates engine failures from the first round start.
    pub fn start_new_game(
        &mut self,
        username: &str,
        random_length: bool,
    ) -> Result<GameId, ServiceError> {
        let id = self.store.next_id();
        let mut game = Game::new(id, username, random_length);
        game.start_game(&mut self.dictionary, &mut self.rng)?;

        info!("started {id} for '{username}' (random length: {random_length})");
        self.store.save(game);
        Ok(id)
    }

    /// Submit an attempt to a game's active round.
    ///
    /// # Errors
    /// `GameNotFound` for an unknown id; engine refusals otherwise.
    pub fn guess(&mut self, id: GameId, attempt: &str) -> Result<Feedback, ServiceError> {
        let attempt = attempt.trim().to_lowercase();
        let game = self
            .store
            .load_mut(id)
            .ok_or(ServiceError::GameNotFound(id))?;

        let feedback = game.guess(&attempt, &self.dictionary)?;

        debug!(
            "{id}: '{attempt}' valid={} guessed={} state={:?}",
            feedback.is_guess_valid(),
            feedback.is_word_guessed(),
            game.state(),
        );
        Ok(feedback)
    }

    /// Start the next round of a game.
    ///
    /// # Errors
    /// `GameNotFound` for an unknown id; engine refusals otherwise.
    pub fn start_new_round(&mut self, id: GameId, random_length: bool) -> Result<(), ServiceError> {
        let game = self
            .store
            .load_mut(id)
            .ok_or(ServiceError::GameNotFound(id))?;

        game.start_new_round(&mut self.dictionary, &mut self.rng, random_length)?;

        info!("{id}: new round, word length {}", game.last_word_length());
        Ok(())
    }

    /// Forfeit a game.
    ///
    /// # Errors
    /// `GameNotFound` for an unknown id; engine refusals otherwise.
    pub fn forfeit(&mut self, id: GameId) -> Result<(), ServiceError> {
        let game = self
            .store
            .load_mut(id)
            .ok_or(ServiceError::GameNotFound(id))?;

        game.forfeit()?;

        info!("{id}: forfeited at score {}", game.score());
        Ok(())
    }

    /// Read a game.
    ///
    /// # Errors
    /// `GameNotFound` for an unknown id.
    pub fn game(&self, id: GameId) -> Result<&Game, ServiceError> {
        self.store.load(id).ok_or(ServiceError::GameNotFound(id))
    }

    /// Highest scores first, at most `limit` rows.
    #[must_use]
    pub fn scoreboard(&self, limit: usize) -> Vec<ScoreboardEntry> {
        self.store
            .top_by_score(limit)
            .into_iter()
            .map(|game| ScoreboardEntry {
                username: game.username().to_string(),
                score: game.score(),
                mode: if game.is_random_length() {
                    "Random"
                } else {
                    "Sequential"
                },
            })
            .collect()
    }
}
