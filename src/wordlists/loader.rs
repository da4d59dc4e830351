//! Word list loading utilities
//!
//! Fills a `WordSet` from files or from the embedded constants.

use crate::core::{WordError, WordSet};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file into `words`
///
/// One word per line, case-insensitive. Lines that are not valid words for
/// this dictionary are skipped. Returns the number of newly added words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::core::WordSet;
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let mut words = WordSet::new(5).unwrap();
/// let added = load_from_file("data/words.txt", &mut words).unwrap();
/// println!("Loaded {added} words");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, words: &mut WordSet) -> io::Result<usize> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let added = words.load_from_lines(content.lines());
    debug!(path = %path.display(), added, "loaded word list file");

    Ok(added)
}

/// Build a dictionary of `letters`-letter words from a string slice
///
/// Entries of the wrong shape are skipped.
///
/// # Errors
///
/// Returns `WordError::ZeroLength` if `letters` is 0.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::{DEFAULT_LETTERS, DEFAULT_WORDS};
///
/// let words = words_from_slice(DEFAULT_WORDS, DEFAULT_LETTERS).unwrap();
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str], letters: usize) -> Result<WordSet, WordError> {
    let mut words = WordSet::new(letters)?;
    words.load_from_lines(slice);
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("CRANE"));
        assert!(words.contains("SLATE"));
        assert!(words.contains("IRATE"));
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"], 5).unwrap();

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert!(words.contains("CRANE"));
        assert!(words.contains("SLATE"));
    }

    #[test]
    fn words_from_slice_other_lengths() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"], 3).unwrap();
        assert_eq!(words.len(), 1);
        assert!(words.contains("ABC"));
    }

    #[test]
    fn words_from_slice_zero_letters() {
        assert_eq!(words_from_slice(&["crane"], 0), Err(WordError::ZeroLength));
    }

    #[test]
    fn load_from_file_skips_bad_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Slate").unwrap();
        writeln!(file, "sl4te").unwrap();
        writeln!(file, "cranes").unwrap();
        write!(file, "audio\r\nrobot").unwrap();
        file.flush().unwrap();

        let mut words = WordSet::new(5).unwrap();
        let added = load_from_file(file.path(), &mut words).unwrap();

        assert_eq!(added, 4);
        for word in ["CRANE", "SLATE", "AUDIO", "ROBOT"] {
            assert!(words.contains(word), "{word} should be loaded");
        }
    }

    #[test]
    fn load_from_file_adds_to_existing_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();
        file.flush().unwrap();

        let mut words = words_from_slice(&["crane"], 5).unwrap();
        assert_eq!(load_from_file(file.path(), &mut words).unwrap(), 1);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut words = WordSet::new(5).unwrap();

        let err = load_from_file(dir.path().join("missing.txt"), &mut words).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(words.is_empty());
    }
}
