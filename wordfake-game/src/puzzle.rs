//! Deterministic daily puzzle generation.
//!
//! A puzzle is a pure function of its calendar day and the two word lists:
//! no wall-clock reads, no external state, no fresh randomness. The same
//! date always yields the same five words in the same order.

use chrono::{Datelike, NaiveDate};

use crate::rng::{SeededRng, shuffle};
use crate::words::{DataError, WordLists};

/// Number of words presented each day.
pub const PUZZLE_WORD_COUNT: usize = 5;
/// Real words drawn per day; also the rolling-window stride between days.
pub const REAL_WORDS_PER_PUZZLE: usize = 4;

const DAY_STRIDE: i64 = REAL_WORDS_PER_PUZZLE as i64;
const EPOCH_YEAR: i32 = 2025;
const EPOCH_MONTH: u32 = 6;
const EPOCH_DAY: u32 = 8;

/// Calendar day of the first puzzle; offsets count from here.
fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY).unwrap_or_default()
}

/// A single day's puzzle: five shuffled candidates, one of them fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Canonical zero-padded `YYYY-MM-DD` key for the reference date.
    pub id: String,
    /// The shuffled candidate words.
    pub words: Vec<String>,
    /// Position of the fake word within `words`.
    pub fake_word_index: usize,
    /// Calendar day this puzzle belongs to; time-of-day is never consulted.
    pub reference_date: NaiveDate,
}

impl Puzzle {
    /// The word the player is asked to find.
    #[must_use]
    pub fn fake_word(&self) -> &str {
        self.words
            .get(self.fake_word_index)
            .map_or("", String::as_str)
    }
}

/// Generate the puzzle for a calendar day.
///
/// # Errors
///
/// Returns a [`DataError`] if either word list is empty.
pub fn puzzle_for_date(date: NaiveDate, lists: &WordLists) -> Result<Puzzle, DataError> {
    lists.ensure_non_empty()?;

    let real = lists.real();
    let fake = lists.fake();
    let real_len = i64::try_from(real.len()).unwrap_or(i64::MAX);
    let fake_len = i64::try_from(fake.len()).unwrap_or(i64::MAX);

    let offset = date.signed_duration_since(epoch_date()).num_days();
    let real_start = usize::try_from((offset * DAY_STRIDE).rem_euclid(real_len)).unwrap_or(0);
    let fake_idx = usize::try_from(offset.rem_euclid(fake_len)).unwrap_or(0);

    let mut words = Vec::with_capacity(PUZZLE_WORD_COUNT);
    for i in 0..REAL_WORDS_PER_PUZZLE {
        words.push(real[(real_start + i) % real.len()].clone());
    }
    let fake_word = fake[fake_idx].clone();
    words.push(fake_word.clone());

    let mut rng = SeededRng::new(seed_for_date(date));
    shuffle(&mut words, &mut rng);

    let fake_word_index = words
        .iter()
        .position(|word| *word == fake_word)
        .unwrap_or(PUZZLE_WORD_COUNT - 1);

    Ok(Puzzle {
        id: date.format("%Y-%m-%d").to_string(),
        words,
        fake_word_index,
        reference_date: date,
    })
}

/// Derive the shuffle seed from the calendar date.
///
/// The month component is 0-based. The convention is frozen: changing it
/// would re-shuffle every previously served puzzle.
fn seed_for_date(date: NaiveDate) -> u32 {
    let year = u32::try_from(date.year()).unwrap_or(0);
    year * 10_000 + date.month0() * 100 + date.day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::word_lists;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn epoch_day_matches_pinned_vector() {
        let lists = word_lists();
        let puzzle = puzzle_for_date(day(2025, 6, 8), lists).unwrap();

        let real = lists.real();
        let fake = lists.fake();
        let expected = vec![
            real[2].clone(),
            real[0].clone(),
            real[3].clone(),
            real[1].clone(),
            fake[0].clone(),
        ];
        assert_eq!(puzzle.words, expected);
        assert_eq!(puzzle.fake_word_index, 4);
        assert_eq!(puzzle.fake_word(), fake[0]);
        assert_eq!(puzzle.id, "2025-06-08");
    }

    #[test]
    fn same_date_is_bit_identical() {
        let lists = word_lists();
        let first = puzzle_for_date(day(2026, 3, 1), lists).unwrap();
        let second = puzzle_for_date(day(2026, 3, 1), lists).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn exactly_one_fake_word_per_puzzle() {
        let lists = word_lists();
        for offset in [0_u64, 1, 5, 30, 365] {
            let date = day(2025, 6, 8) + chrono::Days::new(offset);
            let puzzle = puzzle_for_date(date, lists).unwrap();
            let fakes = puzzle
                .words
                .iter()
                .filter(|&word| lists.fake().contains(word))
                .count();
            assert_eq!(fakes, 1, "{date}");
            let flagged = &puzzle.words[puzzle.fake_word_index];
            assert!(lists.fake().iter().any(|word| word == flagged));
        }
    }

    #[test]
    fn id_is_zero_padded() {
        let puzzle = puzzle_for_date(day(2026, 1, 5), word_lists()).unwrap();
        assert_eq!(puzzle.id, "2026-01-05");
    }

    #[test]
    fn tiny_real_list_duplicates_are_accepted() {
        let lists = WordLists::from_text("ALPHA\nBETA", "ZORP");
        let puzzle = puzzle_for_date(day(2025, 6, 8), &lists).unwrap();
        assert_eq!(puzzle.words.len(), PUZZLE_WORD_COUNT);
        assert_eq!(puzzle.fake_word(), "ZORP");
        let alphas = puzzle.words.iter().filter(|w| *w == "ALPHA").count();
        assert_eq!(alphas, 2);
    }

    #[test]
    fn empty_lists_fail_generation() {
        let no_real = WordLists::from_text("", "ZORP");
        assert_eq!(
            puzzle_for_date(day(2025, 6, 8), &no_real),
            Err(DataError::EmptyRealWords)
        );
        let no_fake = WordLists::from_text("ALPHA", "");
        assert_eq!(
            puzzle_for_date(day(2025, 6, 8), &no_fake),
            Err(DataError::EmptyFakeWords)
        );
    }

    #[test]
    fn seed_uses_zero_based_month() {
        assert_eq!(seed_for_date(day(2025, 6, 8)), 20_250_508);
        assert_eq!(seed_for_date(day(2026, 1, 15)), 20_260_015);
    }
}
