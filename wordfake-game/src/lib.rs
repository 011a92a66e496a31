//! Wordfake Game Engine
//!
//! Platform-agnostic core logic for Wordfake, a daily word-guessing game:
//! five words, four real and one fake, four guesses to find the fake one.
//! This crate provides the deterministic puzzle generator and the game/stats
//! store without UI or platform-specific dependencies.

pub mod clock;
pub mod numbers;
pub mod puzzle;
pub mod rng;
pub mod state;
pub mod store;
pub mod words;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use puzzle::{PUZZLE_WORD_COUNT, Puzzle, REAL_WORDS_PER_PUZZLE, puzzle_for_date};
pub use rng::{SeededRng, shuffle};
pub use state::{DailyGameState, GameStats, GameStatus, MAX_GUESSES};
pub use store::{
    DAILY_GAME_KEY, GameStore, MemoryStorage, STATS_KEY, StateMismatch, TEST_DATE_KEY,
};
pub use words::{DataError, WordLists, word_lists};

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Trait for abstracting the local key-value store
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete the value under `key`; a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

/// What a submitted guess did to the day's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was the fake word; the game is complete and won.
    Won(DailyGameState),
    /// The guess budget ran out on a wrong guess; complete and lost.
    Lost(DailyGameState),
    /// Wrong guess with budget remaining.
    InProgress(DailyGameState),
    /// The game was already complete; nothing changed.
    AlreadyComplete(DailyGameState),
}

impl GuessOutcome {
    /// The game state after the guess.
    #[must_use]
    pub const fn game(&self) -> &DailyGameState {
        match self {
            Self::Won(game)
            | Self::Lost(game)
            | Self::InProgress(game)
            | Self::AlreadyComplete(game) => game,
        }
    }
}

/// Outcome of a completed game: won iff the fake word is among the guesses.
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub fn completed_result(puzzle: &Puzzle, game: &DailyGameState) -> Option<GameResult> {
    if !game.is_complete() {
        return None;
    }
    let fake = puzzle.fake_word();
    if game.guesses.iter().any(|guess| guess == fake) {
        Some(GameResult::Win)
    } else {
        Some(GameResult::Loss)
    }
}

/// Main game engine driving the daily flow over injected storage and clock
pub struct GameEngine<S, C>
where
    S: GameStorage,
    C: Clock,
{
    store: GameStore<S>,
    clock: C,
    words: WordLists,
}

impl<S, C> GameEngine<S, C>
where
    S: GameStorage,
    C: Clock,
{
    /// Create an engine with explicit word lists.
    #[must_use]
    pub const fn new(storage: S, clock: C, words: WordLists) -> Self {
        Self {
            store: GameStore::new(storage),
            clock,
            words,
        }
    }

    /// Create an engine using the word lists embedded with the crate.
    #[must_use]
    pub fn with_default_words(storage: S, clock: C) -> Self {
        Self::new(storage, clock, WordLists::load_from_static())
    }

    /// Direct access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &GameStore<S> {
        &self.store
    }

    /// The effective current time: the persisted debug override when one is
    /// set, the injected clock otherwise.
    #[must_use]
    pub fn current_time(&self) -> NaiveDateTime {
        self.store.test_date().unwrap_or_else(|| self.clock.now())
    }

    /// The effective current calendar day.
    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.current_time().date()
    }

    /// Generate the puzzle for the effective current day.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] if either word list is empty. Generation
    /// failure is fatal to the caller; there is no fallback puzzle.
    pub fn todays_puzzle(&self) -> Result<Puzzle, DataError> {
        puzzle_for_date(self.current_date(), &self.words)
    }

    /// Load the saved game for `puzzle`, starting a fresh one when the save
    /// is missing or belongs to another day's puzzle.
    pub fn load_or_start(&self, puzzle: &Puzzle) -> DailyGameState {
        match self.store.load_game() {
            Some(game) if game.puzzle_id == puzzle.id => game,
            _ => self.store.initialize_game(&puzzle.id),
        }
    }

    /// Submit a guess against `puzzle`, driving the game to completion when
    /// the guess decides it: the fake word wins, a final wrong guess loses.
    ///
    /// # Errors
    ///
    /// Returns [`StateMismatch`] when the saved game does not match
    /// `puzzle`; recover with [`Self::load_or_start`] and retry.
    pub fn submit_guess(&self, puzzle: &Puzzle, word: &str) -> Result<GuessOutcome, StateMismatch> {
        let game = self.store.add_guess(&puzzle.id, word)?;
        if game.is_complete() {
            return Ok(GuessOutcome::AlreadyComplete(game));
        }

        if word == puzzle.fake_word() {
            let game = self
                .store
                .complete_game(&puzzle.id, true, self.current_time())?;
            Ok(GuessOutcome::Won(game))
        } else if game.guesses.len() >= MAX_GUESSES {
            let game = self
                .store
                .complete_game(&puzzle.id, false, self.current_time())?;
            Ok(GuessOutcome::Lost(game))
        } else {
            Ok(GuessOutcome::InProgress(game))
        }
    }

    /// Current aggregate statistics.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.store.load_stats()
    }

    /// Clear the stats and current game records. Irreversible.
    pub fn reset(&self) {
        self.store.reset_stats();
    }

    /// Advance the debug date override to midnight of the next calendar day
    /// and return that day.
    pub fn skip_to_next_day(&self) -> NaiveDate {
        let today = self.current_date();
        let next = today.checked_add_days(Days::new(1)).unwrap_or(today);
        self.store
            .set_test_date(next.and_hms_opt(0, 0, 0).unwrap_or_default());
        next
    }

    /// Drop the debug date override, returning "today" to the clock.
    pub fn clear_test_date(&self) {
        self.store.clear_test_date();
    }
}
