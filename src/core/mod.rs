//! Core domain types for the game
//!
//! This module contains the dictionary, the scorer and the round state.
//! Everything here is in-memory and synchronous; I/O lives in `wordlists` and `commands`.

mod guess;
mod round;
mod word_set;

pub use guess::{Guess, Mark, ScoringPolicy};
pub use round::{GameError, Round};
pub use word_set::{WordError, WordSet};

/// The letters a dictionary word may contain (after uppercasing)
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Placeholder used in a correct-letter mask for positions that did not match
pub const BLANK: char = '_';
