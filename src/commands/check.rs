//! Word check command
//!
//! Reports whether a word is well-formed for a dictionary and whether the
//! dictionary contains it.

use crate::core::{WordError, WordSet};

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The word in its canonical uppercase form
    pub word: String,
    pub letters: usize,
    pub validation: Result<(), WordError>,
    pub in_dictionary: bool,
    pub dictionary_size: usize,
}

impl CheckReport {
    /// True if the word could be played
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.validation.is_ok() && self.in_dictionary
    }
}

/// Check `word` against `words`
#[must_use]
pub fn check_word(word: &str, words: &WordSet) -> CheckReport {
    let canonical = word.trim().to_uppercase();

    CheckReport {
        validation: words.validate(&canonical),
        in_dictionary: words.contains(&canonical),
        letters: words.letter_count(),
        dictionary_size: words.len(),
        word: canonical,
    }
}
