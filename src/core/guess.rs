//! Scoring of a single guess against the secret
//!
//! A `Guess` holds the guessed word, the secret and the duplicate-letter policy.
//! All feedback is computed on demand from those three values.
//!
//! # Duplicate letters
//!
//! Two policies are supported:
//! - [`ScoringPolicy::Classic`] (default): for every non-matching position, the
//!   *secret's* letter counts as misplaced when it appears anywhere in the guess.
//!   Letter counts are ignored, so repeated letters can be over-reported.
//! - [`ScoringPolicy::Strict`]: standard Wordle rules. Exact matches consume
//!   secret letters first, then each remaining guessed letter is misplaced only
//!   while an unconsumed copy is left in the secret.

use super::{BLANK, GameError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Rule set for classifying repeated letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringPolicy {
    /// Count-blind membership checks
    #[default]
    Classic,
    /// Count-aware Wordle feedback
    Strict,
}

impl ScoringPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "Unknown scoring policy: {s} (expected 'classic' or 'strict')"
            )),
        }
    }
}

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Misplaced,
    Wrong,
}

/// A guessed word scored against a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    guess: String,
    secret: String,
    policy: ScoringPolicy,
}

impl Guess {
    /// Score `guess` against `secret` with the default policy
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Guess;
    ///
    /// let guess = Guess::new("REACT", "CRANE").unwrap();
    /// assert_eq!(guess.correct(), "__A__");
    /// assert_eq!(guess.misplaced(), "CER");
    /// assert_eq!(guess.wrong(), "T");
    /// assert!(!guess.is_win());
    /// ```
    pub fn new(guess: impl Into<String>, secret: impl Into<String>) -> Result<Self, GameError> {
        Self::with_policy(guess, secret, ScoringPolicy::default())
    }

    /// Score `guess` against `secret` with an explicit duplicate-letter policy
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the two words differ in length.
    pub fn with_policy(
        guess: impl Into<String>,
        secret: impl Into<String>,
        policy: ScoringPolicy,
    ) -> Result<Self, GameError> {
        let guess = guess.into();
        let secret = secret.into();

        let expected = secret.chars().count();
        let actual = guess.chars().count();
        if expected != actual {
            return Err(GameError::LengthMismatch { expected, actual });
        }

        Ok(Self {
            guess,
            secret,
            policy,
        })
    }

    /// The guessed word, exactly as given
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Positional mask: the guessed letter where it matches the secret, `BLANK` elsewhere
    #[must_use]
    pub fn correct(&self) -> String {
        self.pairs()
            .map(|(g, s)| if g == s { g } else { BLANK })
            .collect()
    }

    /// Sorted letters that are in the secret but not at the guessed position
    #[must_use]
    pub fn misplaced(&self) -> String {
        match self.policy {
            ScoringPolicy::Classic => sorted(
                self.pairs()
                    .filter(|&(g, s)| g != s && self.guess.contains(s))
                    .map(|(_, s)| s),
            ),
            ScoringPolicy::Strict => self.letters_marked(Mark::Misplaced),
        }
    }

    /// Sorted guessed letters that are neither correct nor misplaced
    #[must_use]
    pub fn wrong(&self) -> String {
        match self.policy {
            ScoringPolicy::Classic => {
                let misplaced = self.misplaced();
                sorted(
                    self.pairs()
                        .filter(|&(g, s)| g != s && !misplaced.contains(g))
                        .map(|(g, _)| g),
                )
            }
            ScoringPolicy::Strict => self.letters_marked(Mark::Wrong),
        }
    }

    /// Per-position feedback for the guessed letters
    ///
    /// Under `Classic`, a non-matching position is `Misplaced` exactly when its
    /// letter appears in [`Guess::misplaced`], so the marks agree with [`Guess::wrong`].
    #[must_use]
    pub fn marks(&self) -> Vec<Mark> {
        match self.policy {
            ScoringPolicy::Classic => {
                let misplaced = self.misplaced();
                self.pairs()
                    .map(|(g, s)| {
                        if g == s {
                            Mark::Correct
                        } else if misplaced.contains(g) {
                            Mark::Misplaced
                        } else {
                            Mark::Wrong
                        }
                    })
                    .collect()
            }
            ScoringPolicy::Strict => self.strict_marks(),
        }
    }

    /// True if the guess is the secret
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.guess == self.secret
    }

    fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.guess.chars().zip(self.secret.chars())
    }

    fn strict_marks(&self) -> Vec<Mark> {
        let mut marks: Vec<Mark> = Vec::with_capacity(self.secret.len());
        let mut available: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: exact matches, pool the unmatched secret letters
        for (g, s) in self.pairs() {
            if g == s {
                marks.push(Mark::Correct);
            } else {
                marks.push(Mark::Wrong);
                *available.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: draw misplaced letters from the pool, left to right
        for (mark, g) in marks.iter_mut().zip(self.guess.chars()) {
            if *mark == Mark::Wrong
                && let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                *mark = Mark::Misplaced;
                *count -= 1;
            }
        }

        marks
    }

    fn letters_marked(&self, wanted: Mark) -> String {
        sorted(
            self.guess
                .chars()
                .zip(self.strict_marks())
                .filter(|&(_, mark)| mark == wanted)
                .map(|(letter, _)| letter),
        )
    }
}

fn sorted(letters: impl Iterator<Item = char>) -> String {
    let mut letters: Vec<char> = letters.collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}
