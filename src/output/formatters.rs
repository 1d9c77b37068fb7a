//! Formatting utilities for terminal output

use crate::core::{Code, Score};

/// Separates the guess from its pegs in a round row
pub const RESULT_SEPARATOR: &str = "  |  ";

/// Format one round as it appears in the history, e.g. " 1.  ADEF  |  XXO-"
#[must_use]
pub fn round_row(round: usize, guess: &Code, score: Score) -> String {
    format!("{round:2}.  {guess}{RESULT_SEPARATOR}{score}")
}

/// Describe a score in words
#[must_use]
pub fn describe_score(score: Score) -> String {
    format!(
        "{} exact, {} misplaced, {} absent",
        score.exact(),
        score.misplaced(),
        score.absent()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
