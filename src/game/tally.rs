//! Session statistics across games

use std::fmt;

/// Games played and won during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub played: usize,
    pub won: usize,
}

impl Tally {
    /// Record a finished game
    pub fn record(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.won += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You played {} game{} and were successful on {} occasion{}.",
            self.played,
            if self.played == 1 { "" } else { "s" },
            self.won,
            if self.won == 1 { "" } else { "s" }
        )
    }
}
