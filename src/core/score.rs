//! Mastermind feedback calculation and representation
//!
//! A score holds one mark per code position:
//! - Exact: right symbol in the right position
//! - Misplaced: symbol is in the secret, but somewhere else
//! - Absent: no unmatched copy of the symbol is left in the secret
//!
//! Marks are grouped by kind (all Exact first, then Misplaced, then Absent),
//! the way pegs are laid out on a physical board. They say how many symbols
//! matched, not which ones.

use super::Code;
use std::fmt;

/// Feedback for one guess symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Exact,
    Misplaced,
    Absent,
}

impl Mark {
    /// Peg character used in round rows
    #[must_use]
    pub const fn peg(self) -> char {
        match self {
            Self::Exact => 'X',
            Self::Misplaced => 'O',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    exact: usize,
    misplaced: usize,
    width: usize,
}

impl Score {
    /// Build a score from counts
    ///
    /// # Panics
    /// Panics if `exact + misplaced > width`
    #[must_use]
    pub fn new(exact: usize, misplaced: usize, width: usize) -> Self {
        assert!(
            exact.saturating_add(misplaced) <= width,
            "Score counts exceed code width"
        );
        Self {
            exact,
            misplaced,
            width,
        }
    }

    /// The score of a guess that matches the secret exactly
    #[must_use]
    pub fn perfect(width: usize) -> Self {
        Self::new(width, 0, width)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: every position where the symbols agree consumes both cells
    /// 2. Misplaced pass: each unconsumed secret cell, in order, consumes the
    ///    first unconsumed guess cell holding the same symbol
    /// 3. Everything left over is Absent
    ///
    /// Neither code is modified; consumption is tracked in local flags.
    ///
    /// # Panics
    /// Panics in debug mode if the codes differ in width
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code, Score};
    ///
    /// let alphabet = Alphabet::new(4);
    /// let secret = Code::parse("AABC", alphabet, 4).unwrap();
    /// let guess = Code::parse("AAAA", alphabet, 4).unwrap();
    /// let score = Score::calculate(&secret, &guess);
    ///
    /// assert_eq!(score.exact(), 2);
    /// assert_eq!(score.misplaced(), 0);
    /// assert_eq!(score.to_string(), "XX--");
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.width(), guess.width(), "Code widths differ");
        let width = secret.width();
        let mut secret_used = vec![false; width];
        let mut guess_used = vec![false; width];

        // First pass: exact position matches
        let mut exact = 0;
        for (i, (s, g)) in secret.symbols().iter().zip(guess.symbols()).enumerate() {
            if s == g {
                secret_used[i] = true;
                guess_used[i] = true;
                exact += 1;
            }
        }

        // Second pass: for each remaining secret symbol, claim the first
        // remaining guess cell that holds it
        let mut misplaced = 0;
        for (i, &wanted) in secret.symbols().iter().enumerate() {
            if secret_used[i] {
                continue;
            }
            let found = guess
                .symbols()
                .iter()
                .enumerate()
                .position(|(j, &g)| !guess_used[j] && g == wanted);
            if let Some(j) = found {
                guess_used[j] = true;
                misplaced += 1;
            }
        }

        Self::new(exact, misplaced, width)
    }

    /// Number of Exact marks
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of Misplaced marks
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Number of Absent marks
    #[inline]
    #[must_use]
    pub const fn absent(self) -> usize {
        self.width - self.exact - self.misplaced
    }

    /// Code width the score was computed for
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// True if every mark is Exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == self.width
    }

    /// Marks in peg order: Exact, then Misplaced, then Absent
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        std::iter::repeat_n(Mark::Exact, self.exact())
            .chain(std::iter::repeat_n(Mark::Misplaced, self.misplaced()))
            .chain(std::iter::repeat_n(Mark::Absent, self.absent()))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.peg())?;
        }
        Ok(())
    }
}

/// Check whether a guess wins outright
///
/// A win is plain ordered equality and is decided before any scoring.
#[must_use]
pub fn is_win(secret: &Code, guess: &Code) -> bool {
    secret == guess
}
