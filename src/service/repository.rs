//! Game storage seam
//!
//! The engine aggregates know nothing about storage; whatever hosts them
//! implements [`GameRepository`]. The in-memory implementation backs the CLI
//! session and tests.

use rustc_hash::FxHashMap;

use crate::engine::{Game, GameId};

/// Storage capability for game aggregates.
pub trait GameRepository {
    /// Issue the next unused identity.
    fn next_id(&mut self) -> GameId;

    /// Store a game under its own id, replacing any previous version.
    fn save(&mut self, game: Game);

    /// Load a game by id.
    fn load(&self, id: GameId) -> Option<&Game>;

    /// Load a game for mutation.
    fn load_mut(&mut self, id: GameId) -> Option<&mut Game>;

    /// Highest-scoring games, best first, at most `limit` of them.
    fn top_by_score(&self, limit: usize) -> Vec<&Game>;
}

/// Process-local repository.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: FxHashMap<GameId, Game>,
    last_id: u64,
}

impl InMemoryGameRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn next_id(&mut self) -> GameId {
        self.last_id += 1;
        GameId(self.last_id)
    }

    fn save(&mut self, game: Game) {
        self.games.insert(game.id(), game);
    }

    fn load(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    fn load_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.games.get_mut(&id)
    }

    fn top_by_score(&self, limit: usize) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.games.values().collect();
        games.sort_by(|a, b| b.score().cmp(&a.score()));
        games.truncate(limit);
        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_game(repo: &mut InMemoryGameRepository, username: &str) -> GameId {
        let id = repo.next_id();
        repo.save(Game::new(id, username, false));
        id
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut repo = InMemoryGameRepository::new();

        let a = repo.next_id();
        let b = repo.next_id();

        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut repo = InMemoryGameRepository::new();
        let id = stored_game(&mut repo, "ada");

        assert_eq!(repo.load(id).unwrap().username(), "ada");
        assert!(repo.load(GameId(999)).is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn top_by_score_orders_and_limits() {
        let mut repo = InMemoryGameRepository::new();
        for name in ["a", "b", "c"] {
            stored_game(&mut repo, name);
        }

        let top = repo.top_by_score(2);

        assert_eq!(top.len(), 2);
        assert!(top[0].score() >= top[1].score());
    }
}
