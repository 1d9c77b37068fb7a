//! Score command
//!
//! Scores a single guess against a secret given on the command line.

use crate::core::{Alphabet, Code, CodeError, MAX_WIDTH, MIN_WIDTH, Score, is_win};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
    pub win: bool,
}

/// Parse `secret` and `guess` and score them
///
/// The width is taken from the secret; the guess must match it.
///
/// # Errors
/// Returns `CodeError` if either code contains letters outside `alphabet`,
/// the secret is not `MIN_WIDTH..=MAX_WIDTH` letters long, or the guess is a
/// different width from the secret.
pub fn score_codes(
    secret: &str,
    guess: &str,
    alphabet: Alphabet,
) -> Result<ScoreResult, CodeError> {
    let width = secret.trim().chars().count();
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(CodeError::WidthOutOfRange { width });
    }
    let secret = Code::parse(secret, alphabet, width)?;
    let guess = Code::parse(guess, alphabet, width)?;

    let win = is_win(&secret, &guess);
    let score = if win {
        Score::perfect(width)
    } else {
        Score::calculate(&secret, &guess)
    };

    Ok(ScoreResult {
        secret,
        guess,
        score,
        win,
    })
}
