//! Game aggregate: round sequencing, scoring, elimination
//!
//! A game strings rounds together for one player. Winning a round banks
//! points and parks the game until the next round is started; losing one
//! (or forfeiting) eliminates the game for good. Word lengths either cycle
//! 5 -> 6 -> 7 or are drawn uniformly, depending on the game's mode.

use rand::Rng;
use std::fmt;

use super::{GameError, Round};
use crate::core::{Dictionary, Feedback, Hint};

/// Word lengths the game plays, in sequential-mode order.
pub const WORD_LENGTHS: [usize; 3] = [5, 6, 7];

/// Points banked per remaining attempt (plus one) on a won round.
const POINTS_PER_ATTEMPT: u32 = 5;

/// Opaque game identity, issued by whatever stores the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created, never started.
    New,
    /// A round is active and accepting guesses.
    InRound,
    /// Last round was won; waiting for the next one to start.
    WaitingForRound,
    /// Lost a round or forfeited. Terminal.
    Eliminated,
}

/// A sequence of rounds for one player, with cumulative scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    username: String,
    score: u32,
    state: GameState,
    current_round: Option<Round>,
    past_rounds: Vec<Round>,
    last_word_length: usize,
    random_length: bool,
}

impl Game {
    /// Create a game in state `New`. Nothing is fetched until
    /// [`start_game`](Self::start_game).
    #[must_use]
    pub fn new(id: GameId, username: impl Into<String>, random_length: bool) -> Self {
        Self {
            id,
            username: username.into(),
            score: 0,
            state: GameState::New,
            current_round: None,
            past_rounds: Vec::new(),
            last_word_length: 0,
            random_length,
        }
    }

    /// Start the game and its first round.
    ///
    /// Resets score and past rounds, then starts round one using the game's
    /// configured length mode (sequential games always open with a 5-letter
    /// word).
    ///
    /// # Errors
    /// `InvalidAction` unless the game is `New`; `LengthNotSupported` if the
    /// dictionary has no word of the chosen length.
    pub fn start_game<D, R>(&mut self, dictionary: &mut D, rng: &mut R) -> Result<(), GameError>
    where
        D: Dictionary + ?Sized,
        R: Rng + ?Sized,
    {
        if self.state != GameState::New {
            return Err(GameError::InvalidAction("start an already started game"));
        }

        self.score = 0;
        self.past_rounds.clear();
        self.last_word_length = 0;
        self.begin_round(dictionary, rng, self.random_length)
    }

    /// Start the next round.
    ///
    /// A finished current round is archived into past rounds before being
    /// replaced. `random_length` selects uniform draw over {5, 6, 7} instead
    /// of the sequential cycle for this round.
    ///
    /// # Errors
    /// `InvalidAction` when eliminated or while a round is still active;
    /// `LengthNotSupported` if the dictionary has no word of the chosen
    /// length (the game is left untouched).
    pub fn start_new_round<D, R>(
        &mut self,
        dictionary: &mut D,
        rng: &mut R,
        random_length: bool,
    ) -> Result<(), GameError>
    where
        D: Dictionary + ?Sized,
        R: Rng + ?Sized,
    {
        match self.state {
            GameState::Eliminated => {
                Err(GameError::InvalidAction("start a round after elimination"))
            }
            GameState::InRound => {
                Err(GameError::InvalidAction("start a round while one is active"))
            }
            GameState::New | GameState::WaitingForRound => {
                self.begin_round(dictionary, rng, random_length)
            }
        }
    }

    /// Submit an attempt to the current round.
    ///
    /// A won round banks `5 × (attempts remaining + 1)` points and parks the
    /// game in `WaitingForRound`; a lost round eliminates it.
    ///
    /// # Errors
    /// `InvalidAction` unless a round is active.
    pub fn guess<D>(&mut self, attempt: &str, dictionary: &D) -> Result<Feedback, GameError>
    where
        D: Dictionary + ?Sized,
    {
        if self.state != GameState::InRound {
            return Err(GameError::InvalidAction("guess without an active round"));
        }
        let round = self
            .current_round
            .as_mut()
            .ok_or(GameError::InvalidAction("guess without an active round"))?;

        let feedback = round.guess(attempt, dictionary)?;

        if round.is_solved() {
            self.score += POINTS_PER_ATTEMPT * (round.attempts_remaining() as u32 + 1);
            self.state = GameState::WaitingForRound;
        } else if round.is_over() {
            self.state = GameState::Eliminated;
        }

        Ok(feedback)
    }

    /// Give up. The current round is left in place, not archived.
    ///
    /// # Errors
    /// `InvalidAction` unless a round is active.
    pub fn forfeit(&mut self) -> Result<(), GameError> {
        if self.state != GameState::InRound {
            return Err(GameError::InvalidAction("forfeit without an active round"));
        }
        self.state = GameState::Eliminated;
        Ok(())
    }

    /// The active round's hint.
    ///
    /// # Errors
    /// `InvalidAction` unless a round is active.
    pub fn current_hint(&self) -> Result<&Hint, GameError> {
        match (self.state, &self.current_round) {
            (GameState::InRound, Some(round)) => Ok(round.current_hint()),
            _ => Err(GameError::InvalidAction(
                "read the hint without an active round",
            )),
        }
    }

    /// The active round's remaining attempts.
    ///
    /// # Errors
    /// `InvalidAction` unless a round is active.
    pub fn attempts_remaining(&self) -> Result<usize, GameError> {
        match (self.state, &self.current_round) {
            (GameState::InRound, Some(round)) => Ok(round.attempts_remaining()),
            _ => Err(GameError::InvalidAction(
                "count attempts without an active round",
            )),
        }
    }

    /// Fetch a target of the next length and install a fresh round.
    ///
    /// The dictionary call happens before any state is touched, so a length
    /// failure leaves the game exactly as it was.
    fn begin_round<D, R>(
        &mut self,
        dictionary: &mut D,
        rng: &mut R,
        random_length: bool,
    ) -> Result<(), GameError>
    where
        D: Dictionary + ?Sized,
        R: Rng + ?Sized,
    {
        let length = if random_length {
            WORD_LENGTHS[rng.random_range(0..WORD_LENGTHS.len())]
        } else {
            self.next_sequential_length()
        };
        let target = dictionary.random_word(length)?;

        if let Some(finished) = self.current_round.take()
            && finished.is_over()
        {
            self.past_rounds.push(finished);
        }

        self.last_word_length = length;
        self.current_round = Some(Round::new(target));
        self.state = GameState::InRound;
        Ok(())
    }

    /// Next length in the 5 → 6 → 7 cycle, keyed off the last played word.
    fn next_sequential_length(&self) -> usize {
        match self.last_word_length {
            0 | 7 => 5,
            5 => 6,
            6 => 7,
            other => unreachable!("last word length is always 0, 5, 6, or 7, got {other}"),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Cumulative score. Only ever grows.
    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Archived rounds, oldest first.
    #[inline]
    #[must_use]
    pub fn past_rounds(&self) -> &[Round] {
        &self.past_rounds
    }

    /// Length of the most recently played word; 0 before the first round.
    #[inline]
    #[must_use]
    pub fn last_word_length(&self) -> usize {
        self.last_word_length
    }

    /// True when the game was created in random-length mode.
    #[inline]
    #[must_use]
    pub fn is_random_length(&self) -> bool {
        self.random_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LengthNotSupported, Word};
    use crate::engine::RoundOutcome;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Dictionary stub with one fixed word per length.
    struct FixedDict;

    const FIXED_WORDS: [&str; 3] = ["apple", "bottle", "bicycle"];

    impl Dictionary for FixedDict {
        fn exists(&self, word: &str) -> bool {
            FIXED_WORDS.contains(&word) || word == "crane"
        }

        fn random_word(&mut self, length: usize) -> Result<Word, LengthNotSupported> {
            FIXED_WORDS
                .iter()
                .find(|w| w.len() == length)
                .map(|w| Word::new(*w).unwrap())
                .ok_or(LengthNotSupported { length })
        }
    }

    /// Dictionary stub that supports no length at all.
    struct EmptyDict;

    impl Dictionary for EmptyDict {
        fn exists(&self, _word: &str) -> bool {
            false
        }

        fn random_word(&mut self, length: usize) -> Result<Word, LengthNotSupported> {
            Err(LengthNotSupported { length })
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn started_game() -> Game {
        let mut game = Game::new(GameId(1), "ada", false);
        game.start_game(&mut FixedDict, &mut rng()).unwrap();
        game
    }

    /// Win the active round by guessing the fixed word for its length.
    fn win_round(game: &mut Game) {
        let target = game.current_round().unwrap().reveal_answer().to_string();
        game.guess(&target, &FixedDict).unwrap();
    }

    #[test]
    fn new_game_is_idle() {
        let game = Game::new(GameId(7), "ada", false);

        assert_eq!(game.id(), GameId(7));
        assert_eq!(game.username(), "ada");
        assert_eq!(game.state(), GameState::New);
        assert_eq!(game.score(), 0);
        assert!(game.current_round().is_none());
        assert_eq!(game.last_word_length(), 0);
    }

    #[test]
    fn start_game_opens_a_five_letter_round() {
        let game = started_game();

        assert_eq!(game.state(), GameState::InRound);
        assert_eq!(game.last_word_length(), 5);
        let round = game.current_round().unwrap();
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert_eq!(round.word_length(), 5);
    }

    #[test]
    fn start_game_twice_fails() {
        let mut game = started_game();

        let err = game.start_game(&mut FixedDict, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidAction("start an already started game"),
        );
    }

    #[test]
    fn winning_first_try_scores_twenty_five() {
        let mut game = started_game();

        game.guess("apple", &FixedDict).unwrap();

        // 4 attempts remained after the winning guess: 5 × (4 + 1).
        assert_eq!(game.score(), 25);
        assert_eq!(game.state(), GameState::WaitingForRound);
    }

    #[test]
    fn score_reflects_attempts_spent() {
        let mut game = started_game();

        game.guess("crane", &FixedDict).unwrap();
        game.guess("crane", &FixedDict).unwrap();
        game.guess("apple", &FixedDict).unwrap();

        // 2 attempts remained after the winning guess: 5 × (2 + 1).
        assert_eq!(game.score(), 15);
    }

    #[test]
    fn sequential_lengths_cycle_five_six_seven() {
        let mut game = started_game();
        assert_eq!(game.last_word_length(), 5);

        win_round(&mut game);
        game.start_new_round(&mut FixedDict, &mut rng(), false)
            .unwrap();
        assert_eq!(game.last_word_length(), 6);

        win_round(&mut game);
        game.start_new_round(&mut FixedDict, &mut rng(), false)
            .unwrap();
        assert_eq!(game.last_word_length(), 7);

        win_round(&mut game);
        game.start_new_round(&mut FixedDict, &mut rng(), false)
            .unwrap();
        assert_eq!(game.last_word_length(), 5);
    }

    #[test]
    fn random_mode_draws_from_supported_lengths() {
        let mut rng = rng();
        for seed_round in 0..20 {
            let mut game = Game::new(GameId(seed_round), "ada", true);
            game.start_game(&mut FixedDict, &mut rng).unwrap();
            assert!(WORD_LENGTHS.contains(&game.last_word_length()));
        }
    }

    #[test]
    fn won_rounds_are_archived_on_the_next_start() {
        let mut game = started_game();

        win_round(&mut game);
        assert!(game.past_rounds().is_empty());

        game.start_new_round(&mut FixedDict, &mut rng(), false)
            .unwrap();

        assert_eq!(game.past_rounds().len(), 1);
        assert!(game.past_rounds()[0].is_solved());
        assert_eq!(game.past_rounds()[0].reveal_answer(), "apple");
    }

    #[test]
    fn starting_a_round_mid_round_fails() {
        let mut game = started_game();

        let err = game
            .start_new_round(&mut FixedDict, &mut rng(), false)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidAction("start a round while one is active"),
        );
    }

    #[test]
    fn losing_a_round_eliminates_the_game() {
        let mut game = started_game();

        for _ in 0..5 {
            game.guess("crane", &FixedDict).unwrap();
        }

        assert_eq!(game.state(), GameState::Eliminated);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn forfeit_eliminates_without_archiving() {
        let mut game = started_game();

        game.forfeit().unwrap();

        assert_eq!(game.state(), GameState::Eliminated);
        // The abandoned round stays current so the answer can be revealed.
        assert!(game.current_round().is_some());
        assert!(game.past_rounds().is_empty());
    }

    #[test]
    fn eliminated_game_refuses_everything() {
        let mut game = started_game();
        game.forfeit().unwrap();

        assert!(game.guess("apple", &FixedDict).is_err());
        assert!(
            game.start_new_round(&mut FixedDict, &mut rng(), false)
                .is_err()
        );
        assert!(game.forfeit().is_err());
        assert!(game.current_hint().is_err());
        assert!(game.attempts_remaining().is_err());
    }

    #[test]
    fn accessors_require_an_active_round() {
        let mut game = started_game();

        assert_eq!(game.current_hint().unwrap().as_str(), "a....");
        assert_eq!(game.attempts_remaining().unwrap(), 5);

        win_round(&mut game);

        assert!(game.current_hint().is_err());
        assert!(game.attempts_remaining().is_err());
    }

    #[test]
    fn guess_before_start_fails() {
        let mut game = Game::new(GameId(1), "ada", false);

        let err = game.guess("apple", &FixedDict).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidAction("guess without an active round"),
        );
    }

    #[test]
    fn unsupported_length_leaves_the_game_untouched() {
        let mut game = started_game();
        win_round(&mut game);

        let err = game
            .start_new_round(&mut EmptyDict, &mut rng(), false)
            .unwrap_err();

        assert_eq!(err, GameError::LengthNotSupported(6));
        assert_eq!(game.state(), GameState::WaitingForRound);
        // The won round was not archived by the failed start.
        assert!(game.past_rounds().is_empty());
        assert!(game.current_round().is_some());
        assert_eq!(game.last_word_length(), 5);
    }

    #[test]
    fn score_never_decreases_across_a_session() {
        let mut game = started_game();
        let mut last_score = 0;

        for _ in 0..3 {
            win_round(&mut game);
            assert!(game.score() >= last_score);
            last_score = game.score();
            game.start_new_round(&mut FixedDict, &mut rng(), false)
                .unwrap();
        }

        for _ in 0..5 {
            game.guess("crane", &FixedDict).unwrap();
        }
        assert_eq!(game.state(), GameState::Eliminated);
        assert_eq!(game.score(), last_score);
    }
}
