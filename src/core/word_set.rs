//! Validated dictionary of fixed-length words
//!
//! A `WordSet` only ever holds uppercase words of exactly `letter_count()` letters.
//! Every insertion goes through [`WordSet::validate`] first.

use super::ALPHABET;
use rustc_hash::FxHashSet;
use std::collections::hash_set;
use std::fmt;
use tracing::{debug, trace};

/// A set of unique, uppercase words that all share the same length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    letters: usize,
    words: FxHashSet<String>,
}

/// Error type for words rejected by a `WordSet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// A dictionary was requested with a word length of zero
    ZeroLength,
    TooLong { expected: usize, actual: usize },
    TooShort { expected: usize, actual: usize },
    NotLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Word length must be at least 1"),
            Self::TooLong { expected, actual } => {
                write!(f, "Word is too long: got {actual} letters, expected {expected}")
            }
            Self::TooShort { expected, actual } => {
                write!(f, "Word is too short: got {actual} letters, expected {expected}")
            }
            Self::NotLetters => write!(f, "Word must contain only the letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl WordSet {
    /// Create an empty dictionary for words of `letters` letters
    ///
    /// # Errors
    /// Returns `WordError::ZeroLength` if `letters` is 0.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::WordSet;
    ///
    /// let words = WordSet::new(5).unwrap();
    /// assert_eq!(words.letter_count(), 5);
    /// assert!(words.is_empty());
    /// ```
    pub fn new(letters: usize) -> Result<Self, WordError> {
        if letters == 0 {
            return Err(WordError::ZeroLength);
        }

        Ok(Self {
            letters,
            words: FxHashSet::default(),
        })
    }

    /// Number of letters in every word of this dictionary
    #[inline]
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letters
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact-match membership test
    ///
    /// Stored words are uppercase, so lowercase input never matches.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over all stored words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.into_iter()
    }

    /// Check that `word` has the right length and only alphabet letters
    ///
    /// # Errors
    /// - `TooLong` / `TooShort` when the letter count differs from `letter_count()`
    /// - `NotLetters` when the length matches but a character is outside A-Z
    ///   (compared case-insensitively)
    pub fn validate(&self, word: &str) -> Result<(), WordError> {
        let actual = word.chars().count();

        if actual > self.letters {
            return Err(WordError::TooLong {
                expected: self.letters,
                actual,
            });
        }
        if actual < self.letters {
            return Err(WordError::TooShort {
                expected: self.letters,
                actual,
            });
        }
        if !word.chars().all(is_alphabet_letter) {
            return Err(WordError::NotLetters);
        }

        Ok(())
    }

    /// Validate and insert the uppercase form of `word`
    ///
    /// Returns `true` if the word was not already present.
    ///
    /// # Errors
    /// Propagates the validation error; the word is not inserted.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{WordError, WordSet};
    ///
    /// let mut words = WordSet::new(5).unwrap();
    /// assert_eq!(words.add("crane"), Ok(true));
    /// assert!(words.contains("CRANE"));
    /// assert!(matches!(words.add("cranes"), Err(WordError::TooLong { .. })));
    /// ```
    pub fn add(&mut self, word: &str) -> Result<bool, WordError> {
        self.validate(word)?;
        Ok(self.words.insert(word.to_uppercase()))
    }

    /// Remove `word` if it is well-formed and present
    ///
    /// Invalid or absent words are ignored. Returns `true` if something was removed.
    pub fn remove(&mut self, word: &str) -> bool {
        self.validate(word).is_ok() && self.words.remove(word)
    }

    /// Add every line that forms a valid word, skipping the rest
    ///
    /// Lines are uppercased before validation. Returns how many new words were inserted.
    pub fn load_from_lines<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        let mut skipped = 0;

        for line in lines {
            let line = line.as_ref();
            match self.add(&line.to_uppercase()) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(error) => {
                    skipped += 1;
                    trace!(line, %error, "skipping dictionary line");
                }
            }
        }

        debug!(
            added,
            skipped,
            total = self.len(),
            letters = self.letters,
            "loaded dictionary lines"
        );
        added
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<hash_set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

/// True if the uppercase form of `c` is a single alphabet letter
fn is_alphabet_letter(c: char) -> bool {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(letter), None) => ALPHABET.contains(letter),
        _ => false,
    }
}
