//! Interactive game mode
//!
//! Text-based game loop over any line reader and writer, so the same code
//! drives the terminal and the tests.

use crate::core::{Guess, Round, WordSet};
use crate::output::display::{write_guess, write_play_intro, write_play_result};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Configuration for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub max_guesses: usize,
    /// Accept well-formed guesses that are not in the dictionary
    pub allow_unknown: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: 6,
            allow_unknown: false,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// The player typed `quit` or input ran out
    Quit,
}

/// Result of playing one round
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub outcome: Outcome,
    pub secret: String,
    pub history: Vec<Guess>,
}

/// Play `round` until it is won, lost, or abandoned
///
/// Guesses are checked against `words` before they reach the round, so only
/// well-formed guesses use up a turn.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// round's secret does not match the dictionary's word length.
pub fn run_play<R: BufRead, W: Write>(
    mut round: Round,
    words: &WordSet,
    config: &PlayConfig,
    mut input: R,
    mut out: W,
) -> Result<PlayResult> {
    write_play_intro(&mut out, words, config, round.policy())?;

    let mut history: Vec<Guess> = Vec::new();

    while round.guess_count() < config.max_guesses {
        let turn = round.guess_count() + 1;
        write!(out, "Guess {turn}/{}: ", config.max_guesses)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return finish(&mut out, Outcome::Quit, &round, history);
        }

        let word = line.trim();
        match word.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return finish(&mut out, Outcome::Quit, &round, history),
            _ => {}
        }

        if let Err(error) = words.validate(word) {
            debug!(word, %error, "rejected guess");
            writeln!(out, "❌ {error}. Try again.\n")?;
            continue;
        }
        if !config.allow_unknown && !words.contains(&word.to_uppercase()) {
            debug!(word, "guess not in dictionary");
            writeln!(out, "❌ {} is not in the word list. Try again.\n", word.to_uppercase())?;
            continue;
        }

        let guess = round.submit_guess(word)?;
        write_guess(&mut out, turn, &guess)?;

        let won = guess.is_win();
        history.push(guess);
        if won {
            return finish(&mut out, Outcome::Won, &round, history);
        }
    }

    finish(&mut out, Outcome::Lost, &round, history)
}

fn finish<W: Write>(
    out: &mut W,
    outcome: Outcome,
    round: &Round,
    history: Vec<Guess>,
) -> Result<PlayResult> {
    info!(?outcome, guesses = round.guess_count(), "round finished");

    let result = PlayResult {
        outcome,
        secret: round.secret().to_string(),
        history,
    };
    write_play_result(out, &result)?;
    Ok(result)
}
