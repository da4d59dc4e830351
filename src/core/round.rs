//! One round of the game: a secret word and a guess counter

use super::{Guess, ScoringPolicy, WordSet};
use rand::Rng;
use rand::seq::IteratorRandom;
use std::fmt;
use tracing::{debug, trace};

/// Error type for rounds and scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A round needs at least one word to pick a secret from
    EmptyDictionary,
    /// The guess and the secret have different lengths
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Cannot start a round: the dictionary is empty"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess has {actual} letters, the secret has {expected}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A single game: the secret is fixed at construction, guesses are counted
///
/// The round keeps its own copy of the secret and never looks at the source
/// dictionary again.
#[derive(Debug, Clone)]
pub struct Round {
    secret: String,
    guesses: usize,
    policy: ScoringPolicy,
}

impl Round {
    /// Start a round with a secret drawn uniformly from `words`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `words` is empty.
    pub fn new(words: &WordSet) -> Result<Self, GameError> {
        Self::with_rng(words, &mut rand::rng())
    }

    /// Start a round drawing the secret with the given random source
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::core::{Round, WordSet};
    ///
    /// let mut words = WordSet::new(5).unwrap();
    /// words.add("crane").unwrap();
    ///
    /// let round = Round::with_rng(&words, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(round.secret(), "CRANE");
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(words: &WordSet, rng: &mut R) -> Result<Self, GameError> {
        let secret = words
            .iter()
            .choose(rng)
            .ok_or(GameError::EmptyDictionary)?
            .to_string();

        debug!(
            letters = words.letter_count(),
            candidates = words.len(),
            "started round"
        );
        trace!(%secret, "secret chosen");

        Ok(Self {
            secret,
            guesses: 0,
            policy: ScoringPolicy::default(),
        })
    }

    /// Use `policy` for every guess scored in this round
    #[must_use]
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guesses
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Score `word` against the secret
    ///
    /// The guess counter goes up on every call, including rejected guesses.
    /// The guess is uppercased but otherwise not validated; check it against a
    /// `WordSet` first if dictionary rules apply. Because of the uppercasing,
    /// "crane" wins against the secret "CRANE": scoring here is case-insensitive,
    /// while [`Guess::new`] compares its two words exactly as given.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if `word` is not as long as the secret.
    pub fn submit_guess(&mut self, word: &str) -> Result<Guess, GameError> {
        self.guesses += 1;
        let guess = Guess::with_policy(word.to_uppercase(), self.secret.as_str(), self.policy)?;

        debug!(
            guess_number = self.guesses,
            win = guess.is_win(),
            "scored guess"
        );
        Ok(guess)
    }
}
