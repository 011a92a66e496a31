//! Word list loading and validation.
//!
//! The two lists are external data assets: newline-delimited text, one word
//! per line. Lines are trimmed and upper-cased; blank lines are discarded.

use std::sync::OnceLock;

const DEFAULT_REAL_WORDS: &str = include_str!("../assets/real.txt");
const DEFAULT_FAKE_WORDS: &str = include_str!("../assets/fake.txt");

/// Word-list data is missing where the generator needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("real word list is empty")]
    EmptyRealWords,
    #[error("fake word list is empty")]
    EmptyFakeWords,
}

/// The two static word pools a puzzle draws from.
///
/// `real` and `fake` are expected to be disjoint; the generator relies on the
/// fake word not also appearing among the day's real words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordLists {
    real: Vec<String>,
    fake: Vec<String>,
}

impl WordLists {
    /// Parse both lists from newline-delimited text.
    #[must_use]
    pub fn from_text(real: &str, fake: &str) -> Self {
        Self {
            real: parse_word_list(real),
            fake: parse_word_list(fake),
        }
    }

    /// Load the lists embedded with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_text(DEFAULT_REAL_WORDS, DEFAULT_FAKE_WORDS)
    }

    #[must_use]
    pub fn real(&self) -> &[String] {
        &self.real
    }

    #[must_use]
    pub fn fake(&self) -> &[String] {
        &self.fake
    }

    pub(crate) fn ensure_non_empty(&self) -> Result<(), DataError> {
        if self.real.is_empty() {
            return Err(DataError::EmptyRealWords);
        }
        if self.fake.is_empty() {
            return Err(DataError::EmptyFakeWords);
        }
        Ok(())
    }
}

/// Process-wide word lists, parsed once from the embedded assets.
#[must_use]
pub fn word_lists() -> &'static WordLists {
    static LISTS: OnceLock<WordLists> = OnceLock::new();
    LISTS.get_or_init(WordLists::load_from_static)
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}
