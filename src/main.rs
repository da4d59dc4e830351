//! Wordle Game - CLI
//!
//! Plays Wordle on the terminal, scores single guesses, and checks words
//! against the dictionary.

use anyhow::{Context, Result, anyhow, ensure};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{PlayConfig, check_word, run_play, score_words},
    core::{Round, ScoringPolicy, WordSet},
    output::{print_check, print_score},
    wordlists::{
        DEFAULT_LETTERS, DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle on the terminal, with classic or strict duplicate-letter scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_LETTERS)]
    letters: usize,

    /// Wordlist: 'default' (embedded five-letter words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Duplicate-letter scoring: classic (default) or strict
    #[arg(short, long, global = true, default_value = "classic")]
    policy: String,

    /// Seed for choosing the secret word
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round (default)
    Play {
        /// Number of guesses allowed
        #[arg(short, long, default_value_t = 6)]
        max_guesses: usize,

        /// Accept well-formed guesses that are not in the word list
        #[arg(long)]
        allow_unknown: bool,
    },

    /// Score a guess against a given secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Check whether a word is valid and in the word list
    Check {
        /// Word to check
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy: ScoringPolicy = cli.policy.parse().map_err(|e: String| anyhow!(e))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        max_guesses: PlayConfig::new().max_guesses,
        allow_unknown: false,
    });

    match command {
        Commands::Play {
            max_guesses,
            allow_unknown,
        } => {
            let config = PlayConfig {
                max_guesses,
                allow_unknown,
            };
            run_play_command(&cli.wordlist, cli.letters, cli.seed, policy, &config)
        }
        Commands::Score { guess, secret } => {
            let guess = score_words(&guess, &secret, policy).map_err(|e| anyhow!(e))?;
            print_score(&guess)?;
            Ok(())
        }
        Commands::Check { word } => {
            let words = load_dictionary(&cli.wordlist, cli.letters)?;
            print_check(&check_word(&word, &words))?;
            Ok(())
        }
    }
}

/// Install the tracing subscriber; logs go to stderr so they stay off the board
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the dictionary selected by the -w flag
///
/// - "default": the embedded five-letter list
/// - "<path>": one word per line from a file
fn load_dictionary(wordlist: &str, letters: usize) -> Result<WordSet> {
    let words = match wordlist {
        "default" => {
            if letters != DEFAULT_LETTERS {
                warn!(
                    letters,
                    "embedded word list only has {DEFAULT_LETTERS}-letter words"
                );
            }
            words_from_slice(DEFAULT_WORDS, letters)?
        }
        path => {
            let mut words = WordSet::new(letters)?;
            load_from_file(path, &mut words)
                .with_context(|| format!("Failed to read word list {path}"))?;
            words
        }
    };

    info!(words = words.len(), letters, "dictionary ready");
    Ok(words)
}

fn run_play_command(
    wordlist: &str,
    letters: usize,
    seed: Option<u64>,
    policy: ScoringPolicy,
    config: &PlayConfig,
) -> Result<()> {
    ensure!(config.max_guesses > 0, "--max-guesses must be at least 1");

    let words = load_dictionary(wordlist, letters)?;
    let round = match seed {
        Some(seed) => Round::with_rng(&words, &mut StdRng::seed_from_u64(seed)),
        None => Round::new(&words),
    }
    .with_context(|| format!("No {letters}-letter words to play with"))?
    .with_policy(policy);

    run_play(round, &words, config, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
