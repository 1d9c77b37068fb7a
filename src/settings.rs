//! Game settings
//!
//! Settings are a plain value passed to each game. Every numeric field is
//! clamped into its supported range on construction.

use crate::core::{Alphabet, MAX_SYMBOLS, MAX_WIDTH, MIN_SYMBOLS, MIN_WIDTH};
use std::fmt;

/// Default alphabet size (A-G)
pub const DEFAULT_SYMBOLS: usize = 7;

/// Default code width
pub const DEFAULT_WIDTH: usize = MIN_WIDTH;

/// Fewest rounds a game may allow
pub const MIN_ROUNDS: usize = 7;

/// Most rounds a game may allow
pub const MAX_ROUNDS: usize = 20;

/// Default number of rounds
pub const DEFAULT_ROUNDS: usize = MIN_ROUNDS;

/// Configuration for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    symbols: usize,
    width: usize,
    max_rounds: usize,
    allow_repeats: bool,
}

impl Settings {
    /// Create settings, clamping each value into its range
    ///
    /// # Examples
    /// ```
    /// use mastermind::settings::Settings;
    ///
    /// let settings = Settings::new(30, 2, 50, false);
    /// assert_eq!(settings.symbols(), 20);
    /// assert_eq!(settings.width(), 4);
    /// assert_eq!(settings.max_rounds(), 20);
    /// ```
    #[must_use]
    pub fn new(symbols: usize, width: usize, max_rounds: usize, allow_repeats: bool) -> Self {
        Self {
            symbols: symbols.clamp(MIN_SYMBOLS, MAX_SYMBOLS),
            width: width.clamp(MIN_WIDTH, MAX_WIDTH),
            max_rounds: max_rounds.clamp(MIN_ROUNDS, MAX_ROUNDS),
            allow_repeats,
        }
    }

    #[must_use]
    pub const fn symbols(&self) -> usize {
        self.symbols
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// The repetition policy as configured
    #[must_use]
    pub const fn allow_repeats(&self) -> bool {
        self.allow_repeats
    }

    /// The repetition policy actually applied
    ///
    /// Repeats are forced when the code is wider than the alphabet.
    #[must_use]
    pub const fn effective_repeats(&self) -> bool {
        self.allow_repeats || self.width > self.symbols
    }

    /// Whether the player gets to choose the repetition policy
    #[must_use]
    pub const fn repeats_negotiable(&self) -> bool {
        self.width <= self.symbols
    }

    /// The alphabet for these settings
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::new(self.symbols)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS, DEFAULT_WIDTH, DEFAULT_ROUNDS, true)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} code letters in use & they are: {}",
            self.symbols,
            self.alphabet()
        )?;
        writeln!(f, "The secret code is {} letters long", self.width)?;
        writeln!(
            f,
            "{} attempts to guess the secret code are available",
            self.max_rounds
        )?;
        write!(
            f,
            "Code letters are{} repeated in the code",
            if self.effective_repeats() { "" } else { " not" }
        )
    }
}
