//! Terminal output formatting
//!
//! Display utilities for the game board and command results.

pub mod display;
pub mod formatters;

pub use display::{print_check, print_score};
