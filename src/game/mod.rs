//! Per-game state machine and session tally
//!
//! A game moves `AwaitingSecret -> InProgress -> Won | Exhausted`. The core
//! generator supplies the secret on `start`; the scorer runs on every
//! `submit` that is not an outright win.

mod tally;

pub use tally::Tally;

use crate::core::{Code, CodeGenerator, Score, is_win};
use crate::settings::Settings;
use log::{debug, info};
use std::fmt;

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingSecret,
    InProgress,
    Won,
    Exhausted,
}

impl GameState {
    /// True once the game has been won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub score: Score,
}

/// What happened after a guess was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess was wrong and rounds remain
    Continue(Score),
    /// The guess matched the secret
    Won { rounds: usize },
    /// The last round was used without a match
    Lost { secret: Code, score: Score },
}

/// Error type for guesses the game cannot accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NotStarted,
    Finished,
    WidthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "No secret code has been generated yet"),
            Self::Finished => write!(f, "The game is already over"),
            Self::WidthMismatch { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A single game of Mastermind
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    secret: Option<Code>,
    rounds: Vec<Round>,
    state: GameState,
}

impl Game {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            secret: None,
            rounds: Vec::with_capacity(settings.max_rounds()),
            state: GameState::AwaitingSecret,
        }
    }

    /// Generate the secret and open the first round
    ///
    /// Starting a game that is already running replaces its secret and
    /// clears its rounds.
    pub fn start(&mut self, generator: &mut CodeGenerator) {
        let secret = generator.generate(
            self.settings.alphabet(),
            self.settings.width(),
            self.settings.allow_repeats(),
        );
        self.secret = Some(secret);
        self.rounds.clear();
        self.state = GameState::InProgress;
        info!(
            "game started: {} symbols, width {}, {} rounds",
            self.settings.symbols(),
            self.settings.width(),
            self.settings.max_rounds()
        );
    }

    /// Play one round
    ///
    /// The win check runs first; a winning guess is recorded with a perfect
    /// score without running the scorer.
    ///
    /// # Errors
    /// Returns `GameError` if the game has not started, is already over, or
    /// the guess has the wrong width.
    pub fn submit(&mut self, guess: Code) -> Result<RoundOutcome, GameError> {
        let secret = match (self.state, &self.secret) {
            (GameState::InProgress, Some(secret)) => secret,
            (GameState::AwaitingSecret, _) | (GameState::InProgress, None) => {
                return Err(GameError::NotStarted);
            }
            (GameState::Won | GameState::Exhausted, _) => return Err(GameError::Finished),
        };

        if guess.width() != self.settings.width() {
            return Err(GameError::WidthMismatch {
                expected: self.settings.width(),
                actual: guess.width(),
            });
        }

        if is_win(secret, &guess) {
            self.rounds.push(Round {
                guess,
                score: Score::perfect(self.settings.width()),
            });
            self.state = GameState::Won;
            info!("game won in {} rounds", self.rounds.len());
            return Ok(RoundOutcome::Won {
                rounds: self.rounds.len(),
            });
        }

        let score = Score::calculate(secret, &guess);
        debug!("round {}: {guess} scored {score}", self.rounds.len() + 1);
        self.rounds.push(Round { guess, score });

        if self.rounds.len() >= self.settings.max_rounds() {
            self.state = GameState::Exhausted;
            info!("game lost after {} rounds", self.rounds.len());
            return Ok(RoundOutcome::Lost {
                secret: secret.clone(),
                score,
            });
        }

        Ok(RoundOutcome::Continue(score))
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Rounds played so far, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of the next round (1-based)
    #[must_use]
    pub fn current_round(&self) -> usize {
        self.rounds.len() + 1
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> usize {
        self.settings.max_rounds().saturating_sub(self.rounds.len())
    }

    /// The secret, revealed only once the game is over
    #[must_use]
    pub fn secret(&self) -> Option<&Code> {
        if self.state.is_over() {
            self.secret.as_ref()
        } else {
            None
        }
    }
}
