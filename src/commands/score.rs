//! One-shot scoring command
//!
//! Scores a guess against a secret supplied by the caller.

use crate::core::{Guess, ScoringPolicy, WordSet};

/// Score `guess` against `secret`
///
/// Both words are validated as words of the secret's length and uppercased.
///
/// # Errors
///
/// Returns an error if either word is empty, has non-letter characters, or
/// the two lengths differ.
pub fn score_words(guess: &str, secret: &str, policy: ScoringPolicy) -> Result<Guess, String> {
    let shape =
        WordSet::new(secret.chars().count()).map_err(|e| format!("Invalid secret: {e}"))?;
    shape
        .validate(secret)
        .map_err(|e| format!("Invalid secret: {e}"))?;
    shape
        .validate(guess)
        .map_err(|e| format!("Invalid guess: {e}"))?;

    Guess::with_policy(guess.to_uppercase(), secret.to_uppercase(), policy)
        .map_err(|e| e.to_string())
}
