//! Formatting utilities for terminal output

use crate::core::Mark;

/// Format per-position marks as an emoji string
#[must_use]
pub fn marks_to_emoji(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Wrong => '⬜',
        })
        .collect()
}

/// Space out a run of letters ("CER" -> "C E R"), or "-" when there are none
#[must_use]
pub fn spaced_letters(letters: &str) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    let mut result = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter);
    }
    result
}

/// "1 guess", "3 guesses"
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
