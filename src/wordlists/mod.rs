//! Word lists for the game
//!
//! Provides the embedded default dictionary and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

/// Word length of the embedded dictionary
pub const DEFAULT_LETTERS: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSet;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_valid() {
        let words = WordSet::new(DEFAULT_LETTERS).unwrap();
        for &word in DEFAULT_WORDS {
            assert!(words.validate(word).is_ok(), "Word '{word}' is not valid");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_words_are_unique() {
        let unique: std::collections::HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_include_common_openers() {
        for word in ["crane", "react", "robot", "audio"] {
            assert!(DEFAULT_WORDS.contains(&word), "Missing '{word}'");
        }
    }
}
