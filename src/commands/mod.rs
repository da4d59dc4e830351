//! Command implementations

pub mod check;
pub mod play;
pub mod score;

pub use check::{CheckReport, check_word};
pub use play::{Outcome, PlayConfig, PlayResult, run_play};
pub use score::score_words;
