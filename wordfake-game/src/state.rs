//! Persisted daily game and aggregate statistics records.
//!
//! Field names serialize in camelCase and the status enum in kebab-case so
//! the stored JSON stays compatible with records written by earlier
//! deployments of the game.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::numbers::round_f64_to_u32;

/// Guess budget for a single day's puzzle.
pub const MAX_GUESSES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Complete,
}

impl GameStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-progress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            _ => Err(()),
        }
    }
}

/// The player's attempt at one day's puzzle.
///
/// Persisted as a singleton: the record for a new day overwrites the old
/// one. Once `status` is [`GameStatus::Complete`] the guess list is frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGameState {
    /// Id of the [`crate::Puzzle`] this game is bound to.
    pub puzzle_id: String,
    /// Submitted words, oldest first. Append-only while in progress.
    #[serde(default)]
    pub guesses: Vec<String>,
    #[serde(default)]
    pub status: GameStatus,
    /// Set exactly once, on the transition to complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<NaiveDateTime>,
}

impl DailyGameState {
    /// Fresh in-progress game bound to a puzzle.
    #[must_use]
    pub fn new(puzzle_id: &str) -> Self {
        Self {
            puzzle_id: puzzle_id.to_string(),
            guesses: Vec::new(),
            status: GameStatus::InProgress,
            finished_at: None,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, GameStatus::Complete)
    }

    /// Guesses left before the budget is exhausted.
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }
}

/// Lifetime aggregate record, mutated only at game completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub won: u32,
    /// Consecutive wins ending at the most recent completed game.
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub max_streak: u32,
    /// Index k counts wins that took k+1 guesses; entries sum to `won`.
    #[serde(default)]
    pub guess_histogram: [u32; MAX_GUESSES],
}

impl GameStats {
    /// Fold a won game into the aggregates.
    ///
    /// Guess counts outside `1..=MAX_GUESSES` still count toward the totals
    /// but are not recorded in the histogram.
    pub fn record_win(&mut self, guess_count: usize) {
        self.played = self.played.saturating_add(1);
        self.won = self.won.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);
        if (1..=MAX_GUESSES).contains(&guess_count) {
            let bucket = &mut self.guess_histogram[guess_count - 1];
            *bucket = bucket.saturating_add(1);
        }
    }

    /// Fold a lost game into the aggregates; the streak resets.
    pub fn record_loss(&mut self) {
        self.played = self.played.saturating_add(1);
        self.current_streak = 0;
    }

    /// Share of played games won, rounded to a whole percent.
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        round_f64_to_u32(f64::from(self.won) / f64::from(self.played) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_accounting_hits_every_aggregate_once() {
        let mut stats = GameStats::default();
        stats.record_win(2);
        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.guess_histogram, [0, 1, 0, 0]);
    }

    #[test]
    fn loss_resets_streak_and_keeps_max() {
        let mut stats = GameStats::default();
        stats.record_win(1);
        stats.record_win(3);
        stats.record_loss();
        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_histogram, [1, 0, 1, 0]);
    }

    #[test]
    fn out_of_range_guess_counts_skip_histogram() {
        let mut stats = GameStats::default();
        stats.record_win(0);
        stats.record_win(5);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.guess_histogram, [0, 0, 0, 0]);
    }

    #[test]
    fn win_percentage_rounds() {
        let stats = GameStats {
            played: 3,
            won: 2,
            ..GameStats::default()
        };
        assert_eq!(stats.win_percentage(), 67);
        assert_eq!(GameStats::default().win_percentage(), 0);
    }

    #[test]
    fn status_string_round_trips() {
        assert_eq!(GameStatus::InProgress.to_string(), "in-progress");
        assert_eq!("complete".parse(), Ok(GameStatus::Complete));
        assert_eq!("nonsense".parse::<GameStatus>(), Err(()));
    }

    #[test]
    fn deployed_game_record_parses() {
        let raw = r#"{"puzzleId":"2025-06-08","guesses":["APPLE","BRELLOW"],"status":"in-progress"}"#;
        let game: DailyGameState = serde_json::from_str(raw).unwrap();
        assert_eq!(game.puzzle_id, "2025-06-08");
        assert_eq!(game.guesses, ["APPLE", "BRELLOW"]);
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.finished_at, None);
        assert_eq!(game.guesses_remaining(), 2);
    }

    #[test]
    fn deployed_stats_record_parses() {
        let raw = r#"{"played":3,"won":2,"currentStreak":1,"maxStreak":2,"guessHistogram":[1,1,0,0]}"#;
        let stats: GameStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.played, 3);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_histogram, [1, 1, 0, 0]);
    }

    #[test]
    fn game_record_serializes_camel_case() {
        let mut game = DailyGameState::new("2025-06-08");
        game.guesses.push("APPLE".to_string());
        let raw = serde_json::to_string(&game).unwrap();
        assert!(raw.contains(r#""puzzleId":"2025-06-08""#));
        assert!(raw.contains(r#""status":"in-progress""#));
        assert!(!raw.contains("finishedAt"));
    }
}
