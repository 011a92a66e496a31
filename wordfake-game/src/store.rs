//! Persistence of the daily game, aggregate stats, and the debug date
//! override behind the storage port.
//!
//! Every operation is a synchronous read-modify-write. The store never
//! panics and never surfaces a storage failure to callers: reads fall back
//! to absent or default values and writes are best-effort, with failures
//! logged.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::GameStorage;
use crate::state::{DailyGameState, GameStats, GameStatus};

/// Storage key for the current day's game record.
pub const DAILY_GAME_KEY: &str = "wordfake.dailyGame.v1";
/// Storage key for the aggregate statistics record.
pub const STATS_KEY: &str = "wordfake.stats.v1";
/// Storage key for the debug date override.
pub const TEST_DATE_KEY: &str = "wordfake.testDate.v1";

/// A game operation named a puzzle id that does not match the persisted
/// game. Recoverable: re-initialize for the current puzzle and retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no saved game matches puzzle {puzzle_id}")]
pub struct StateMismatch {
    pub puzzle_id: String,
}

impl StateMismatch {
    fn new(puzzle_id: &str) -> Self {
        Self {
            puzzle_id: puzzle_id.to_string(),
        }
    }
}

/// Game and stats records behind an injected key-value port.
pub struct GameStore<S> {
    storage: S,
}

impl<S: GameStorage> GameStore<S> {
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted game, or `None` when absent or unreadable.
    #[must_use]
    pub fn load_game(&self) -> Option<DailyGameState> {
        self.read(DAILY_GAME_KEY)
    }

    /// Start a fresh in-progress game, overwriting any prior record.
    pub fn initialize_game(&self, puzzle_id: &str) -> DailyGameState {
        let game = DailyGameState::new(puzzle_id);
        self.write(DAILY_GAME_KEY, &game);
        game
    }

    /// Append a guess to the current game and persist it.
    ///
    /// A completed game is returned unchanged; the guess is not appended.
    /// Repeated guesses of the same word are not rejected here; pre-submit
    /// validation is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`StateMismatch`] when no game is stored or the stored game
    /// belongs to a different puzzle.
    pub fn add_guess(&self, puzzle_id: &str, word: &str) -> Result<DailyGameState, StateMismatch> {
        let mut game = self.matching_game(puzzle_id)?;
        if game.is_complete() {
            return Ok(game);
        }
        game.guesses.push(word.to_string());
        self.write(DAILY_GAME_KEY, &game);
        Ok(game)
    }

    /// Finalize the current game and fold the outcome into the stats.
    ///
    /// An already-complete game is returned unchanged, so a repeated call
    /// cannot double-count a game in the stats.
    ///
    /// # Errors
    ///
    /// Returns [`StateMismatch`] under the same condition as
    /// [`Self::add_guess`].
    pub fn complete_game(
        &self,
        puzzle_id: &str,
        is_win: bool,
        finished_at: NaiveDateTime,
    ) -> Result<DailyGameState, StateMismatch> {
        let mut game = self.matching_game(puzzle_id)?;
        if game.is_complete() {
            return Ok(game);
        }
        game.status = GameStatus::Complete;
        game.finished_at = Some(finished_at);

        let mut stats = self.load_stats();
        if is_win {
            stats.record_win(game.guesses.len());
        } else {
            stats.record_loss();
        }
        self.write(STATS_KEY, &stats);
        self.write(DAILY_GAME_KEY, &game);
        Ok(game)
    }

    /// The persisted stats, or a zeroed record when absent or unreadable.
    #[must_use]
    pub fn load_stats(&self) -> GameStats {
        self.read(STATS_KEY).unwrap_or_default()
    }

    /// Clear the stats and the current game. Irreversible.
    pub fn reset_stats(&self) {
        self.remove(STATS_KEY);
        self.remove(DAILY_GAME_KEY);
    }

    /// The persisted debug date override, if set.
    #[must_use]
    pub fn test_date(&self) -> Option<NaiveDateTime> {
        self.read(TEST_DATE_KEY)
    }

    /// Persist a debug date override; "now" resolves to it until cleared.
    pub fn set_test_date(&self, moment: NaiveDateTime) {
        self.write(TEST_DATE_KEY, &moment);
    }

    /// Drop the debug date override, returning "now" to the real clock.
    pub fn clear_test_date(&self) {
        self.remove(TEST_DATE_KEY);
    }

    fn matching_game(&self, puzzle_id: &str) -> Result<DailyGameState, StateMismatch> {
        match self.load_game() {
            Some(game) if game.puzzle_id == puzzle_id => Ok(game),
            _ => Err(StateMismatch::new(puzzle_id)),
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("storage read failed for {key}: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding corrupt record at {key}: {err}");
                None
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(key, &raw) {
                    log::warn!("storage write failed for {key}: {err}");
                }
            }
            Err(err) => log::error!("failed to encode record for {key}: {err}"),
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.storage.remove(key) {
            log::warn!("storage remove failed for {key}: {err}");
        }
    }
}

/// In-memory storage port for tests, tools, and embedding without a browser.
///
/// Clones share the same underlying map, so one handle can be given to a
/// store while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStorage for MemoryStorage {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
