//! Wordle Game
//!
//! Core logic of a Wordle-style word game: a validated dictionary of fixed-length
//! words, rounds that pick a secret, and duplicate-aware guess scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Round, WordSet};
//!
//! // Build a dictionary
//! let mut words = WordSet::new(5).unwrap();
//! words.load_from_lines(["crane", "slate", "not-a-word"]);
//! assert_eq!(words.len(), 2);
//!
//! // Play a round
//! let mut round = Round::new(&words).unwrap();
//! let guess = round.submit_guess("crane").unwrap();
//! println!("{} {} {}", guess.correct(), guess.misplaced(), guess.wrong());
//! assert_eq!(round.guess_count(), 1);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
