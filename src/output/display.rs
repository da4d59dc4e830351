//! Display functions for game and command results

use super::formatters::{guesses_label, marks_to_emoji, spaced_letters};
use crate::commands::{CheckReport, Outcome, PlayConfig, PlayResult};
use crate::core::{Guess, Mark, ScoringPolicy, WordSet};
use colored::Colorize;
use std::io::{self, Write};

/// Render a guess as colored letter tiles
#[must_use]
pub fn guess_tiles(guess: &Guess) -> String {
    guess
        .guess()
        .chars()
        .zip(guess.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                Mark::Correct => tile.black().on_green().bold().to_string(),
                Mark::Misplaced => tile.black().on_yellow().bold().to_string(),
                Mark::Wrong => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Write the banner shown before the first guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_play_intro<W: Write>(
    out: &mut W,
    words: &WordSet,
    config: &PlayConfig,
    policy: ScoringPolicy,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(out, "{}", "                 W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;
    writeln!(
        out,
        "\nGuess the {}-letter word in {}.",
        words.letter_count(),
        guesses_label(config.max_guesses)
    )?;
    writeln!(
        out,
        "Dictionary: {} words, scoring: {policy}",
        words.len()
    )?;
    writeln!(out, "Type 'quit' to give up.\n")?;
    Ok(())
}

/// Write one scored guess with its breakdown
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_guess<W: Write>(out: &mut W, turn: usize, guess: &Guess) -> io::Result<()> {
    writeln!(
        out,
        "  {}. {} {}",
        turn.to_string().bright_black(),
        guess_tiles(guess),
        marks_to_emoji(&guess.marks())
    )?;
    write_breakdown(out, guess)?;
    writeln!(out)
}

/// Write the end-of-game summary
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_play_result<W: Write>(out: &mut W, result: &PlayResult) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(50).cyan())?;
    match result.outcome {
        Outcome::Won => {
            writeln!(
                out,
                "{}",
                "    🎉  S O L V E D !  🎉".bright_green().bold()
            )?;
            writeln!(
                out,
                "\n  Solved in {}",
                guesses_label(result.history.len()).bright_cyan().bold()
            )?;
        }
        Outcome::Lost => {
            writeln!(out, "{}", "    Out of guesses".red().bold())?;
            writeln!(
                out,
                "\n  The word was {}",
                result.secret.bright_yellow().bold()
            )?;
        }
        Outcome::Quit => {
            writeln!(out, "{}", "    Game abandoned".yellow().bold())?;
            writeln!(
                out,
                "\n  The word was {}",
                result.secret.bright_yellow().bold()
            )?;
        }
    }

    if !result.history.is_empty() {
        writeln!(out, "\n  Guess history:")?;
        for (i, guess) in result.history.iter().enumerate() {
            writeln!(
                out,
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                guess.guess().bright_white().bold(),
                marks_to_emoji(&guess.marks())
            )?;
        }
    }

    writeln!(out, "{}", "═".repeat(50).cyan())?;
    writeln!(out, "\n👋 Thanks for playing!\n")
}

/// Print the result of the score command
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_score(guess: &Guess) -> io::Result<()> {
    write_score(&mut io::stdout().lock(), guess)
}

fn write_score<W: Write>(out: &mut W, guess: &Guess) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Scoring {} against {} ({})",
        guess.guess().bright_white().bold(),
        guess.secret().bright_yellow().bold(),
        guess.policy()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "\n  {} {}",
        guess_tiles(guess),
        marks_to_emoji(&guess.marks())
    )?;
    write_breakdown(out, guess)?;

    if guess.is_win() {
        writeln!(out, "\n{}", "✅ Exact match!".green().bold())
    } else {
        writeln!(out, "\n{}", "❌ Not a match".red().bold())
    }
}

/// Print the result of the check command
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_check(report: &CheckReport) -> io::Result<()> {
    write_check(&mut io::stdout().lock(), report)
}

fn write_check<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Checking {} ({}-letter dictionary, {} words)",
        report.word.bright_white().bold(),
        report.letters,
        report.dictionary_size
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;

    match &report.validation {
        Ok(()) => writeln!(out, "  Shape:      {}", "valid".green())?,
        Err(error) => writeln!(out, "  Shape:      {}", error.to_string().red())?,
    }
    if report.in_dictionary {
        writeln!(out, "  Dictionary: {}", "found".green())?;
    } else {
        writeln!(out, "  Dictionary: {}", "not found".yellow())?;
    }

    writeln!(out)?;
    if report.is_playable() {
        writeln!(out, "{}", "✅ Playable".green().bold())
    } else {
        writeln!(out, "{}", "❌ Not playable".red().bold())
    }
}

fn write_breakdown<W: Write>(out: &mut W, guess: &Guess) -> io::Result<()> {
    writeln!(out, "     Correct:   {}", guess.correct().green())?;
    writeln!(
        out,
        "     Misplaced: {}",
        spaced_letters(&guess.misplaced()).yellow()
    )?;
    writeln!(
        out,
        "     Wrong:     {}",
        spaced_letters(&guess.wrong()).bright_black()
    )
}
