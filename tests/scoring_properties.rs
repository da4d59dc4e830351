//! Property-based tests for guess scoring and rounds

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use wordle_game::core::{BLANK, Guess, Mark, Round, ScoringPolicy, WordSet};

fn policy() -> impl Strategy<Value = ScoringPolicy> {
    prop_oneof![Just(ScoringPolicy::Classic), Just(ScoringPolicy::Strict)]
}

/// Small alphabet so repeated letters are common
fn pair() -> impl Strategy<Value = (String, String)> {
    (1usize..8).prop_flat_map(|len| {
        let pattern = format!("[ABCDE]{{{len}}}");
        (
            proptest::string::string_regex(&pattern).unwrap(),
            proptest::string::string_regex(&pattern).unwrap(),
        )
    })
}

fn letter_counts(letters: impl Iterator<Item = char>) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

proptest! {
    /// Property: scoring the same pair always gives the same feedback
    #[test]
    fn prop_scoring_is_deterministic((guess, secret) in pair(), policy in policy()) {
        let a = Guess::with_policy(guess.as_str(), secret.as_str(), policy).unwrap();
        let b = Guess::with_policy(guess.as_str(), secret.as_str(), policy).unwrap();

        prop_assert_eq!(a.correct(), b.correct());
        prop_assert_eq!(a.misplaced(), b.misplaced());
        prop_assert_eq!(a.wrong(), b.wrong());
        prop_assert_eq!(a.marks(), b.marks());
        prop_assert_eq!(a.misplaced(), a.misplaced());
    }

    /// Property: a win is exactly a guess equal to the secret, i.e. a mask without blanks
    #[test]
    fn prop_win_iff_equal((guess, secret) in pair(), policy in policy()) {
        let scored = Guess::with_policy(guess.as_str(), secret.as_str(), policy).unwrap();

        prop_assert_eq!(scored.is_win(), guess == secret);
        prop_assert_eq!(scored.is_win(), !scored.correct().contains(BLANK));
        if scored.is_win() {
            prop_assert_eq!(scored.correct(), guess);
            prop_assert_eq!(scored.misplaced(), "");
            prop_assert_eq!(scored.wrong(), "");
        }
    }

    /// Property: the mask keeps guessed letters only where they match
    #[test]
    fn prop_mask_is_positional((guess, secret) in pair(), policy in policy()) {
        let scored = Guess::with_policy(guess.as_str(), secret.as_str(), policy).unwrap();
        let mask = scored.correct();

        prop_assert_eq!(mask.chars().count(), secret.chars().count());
        for ((m, g), s) in mask.chars().zip(guess.chars()).zip(secret.chars()) {
            if g == s {
                prop_assert_eq!(m, g);
            } else {
                prop_assert_eq!(m, BLANK);
            }
        }
    }

    /// Property: outputs are sorted
    #[test]
    fn prop_outputs_sorted((guess, secret) in pair(), policy in policy()) {
        let scored = Guess::with_policy(guess.as_str(), secret.as_str(), policy).unwrap();
        for letters in [scored.misplaced(), scored.wrong()] {
            let chars: Vec<char> = letters.chars().collect();
            prop_assert!(chars.windows(2).all(|w| w[0] <= w[1]), "{} is not sorted", letters);
        }
    }

    /// Property (classic): wrong letters never appear among misplaced letters
    #[test]
    fn prop_classic_wrong_disjoint((guess, secret) in pair()) {
        let scored = Guess::with_policy(guess.as_str(), secret.as_str(), ScoringPolicy::Classic).unwrap();
        let misplaced = scored.misplaced();
        for letter in scored.wrong().chars() {
            prop_assert!(!misplaced.contains(letter));
        }
    }

    /// Property (strict): every guessed letter gets exactly one mark, and no letter
    /// is credited more times than the secret holds it
    #[test]
    fn prop_strict_respects_counts((guess, secret) in pair()) {
        let scored = Guess::with_policy(guess.as_str(), secret.as_str(), ScoringPolicy::Strict).unwrap();
        let marks = scored.marks();
        let len = secret.chars().count();

        let correct = marks.iter().filter(|m| **m == Mark::Correct).count();
        prop_assert_eq!(correct + scored.misplaced().len() + scored.wrong().len(), len);

        let secret_counts = letter_counts(secret.chars());
        let credited = letter_counts(
            guess
                .chars()
                .zip(&marks)
                .filter(|(_, mark)| **mark != Mark::Wrong)
                .map(|(letter, _)| letter),
        );
        for (letter, count) in credited {
            prop_assert!(count <= secret_counts.get(&letter).copied().unwrap_or(0));
        }
    }

    /// Property: the guess counter goes up by one per submission
    #[test]
    fn prop_round_counts_guesses(
        seed in any::<u64>(),
        guesses in proptest::collection::vec("[a-z]{3,7}", 0..12),
    ) {
        let mut words = WordSet::new(5).unwrap();
        words.load_from_lines(["crane", "slate", "robot"]);
        let mut round = Round::with_rng(&words, &mut StdRng::seed_from_u64(seed)).unwrap();

        for (i, guess) in guesses.iter().enumerate() {
            let result = round.submit_guess(guess);
            prop_assert_eq!(result.is_ok(), guess.len() == 5);
            prop_assert_eq!(round.guess_count(), i + 1);
        }
        prop_assert!(words.contains(round.secret()));
    }
}
