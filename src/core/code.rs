//! Code representation
//!
//! A Code is an ordered sequence of symbols. The same type serves for the
//! hidden secret and for each guess the player submits.

use super::symbol::{Alphabet, Symbol};
use std::fmt;

/// Shortest supported code
pub const MIN_WIDTH: usize = 4;

/// Longest supported code
pub const MAX_WIDTH: usize = 10;

/// An ordered sequence of code symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Vec<Symbol>,
}

/// Error type for codes that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidWidth { expected: usize, actual: usize },
    WidthOutOfRange { width: usize },
    InvalidSymbol { letter: char, alphabet: String },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { expected, actual } => {
                write!(f, "Code must be exactly {expected} letters, got {actual}")
            }
            Self::WidthOutOfRange { width } => write!(
                f,
                "Code must be {MIN_WIDTH} to {MAX_WIDTH} letters long, got {width}"
            ),
            Self::InvalidSymbol { letter, alphabet } => {
                write!(f, "'{letter}' is not one of the code letters \"{alphabet}\"")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from symbols
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Parse a code strictly: every character must belong to `alphabet`
    /// and the length must equal `width`
    ///
    /// Lowercase letters are accepted and normalized.
    ///
    /// # Errors
    /// Returns `CodeError` if the text has the wrong length or contains a
    /// character outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code};
    ///
    /// let code = Code::parse("abcd", Alphabet::new(6), 4).unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    ///
    /// assert!(Code::parse("ABCZ", Alphabet::new(6), 4).is_err());
    /// assert!(Code::parse("ABC", Alphabet::new(6), 4).is_err());
    /// ```
    pub fn parse(text: &str, alphabet: Alphabet, width: usize) -> Result<Self, CodeError> {
        let symbols = text
            .trim()
            .chars()
            .map(|letter| {
                alphabet
                    .symbol_for(letter)
                    .ok_or_else(|| CodeError::InvalidSymbol {
                        letter,
                        alphabet: alphabet.letters(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.len() != width {
            return Err(CodeError::InvalidWidth {
                expected: width,
                actual: symbols.len(),
            });
        }

        Ok(Self { symbols })
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbol at a position
    ///
    /// # Panics
    /// Panics if position >= width
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }

    /// True if no symbol appears twice
    #[must_use]
    pub fn has_distinct_symbols(&self) -> bool {
        let mut seen = [false; super::symbol::MAX_SYMBOLS];
        self.symbols.iter().all(|s| !std::mem::replace(&mut seen[s.index()], true))
    }

    /// True if every symbol belongs to `alphabet`
    #[must_use]
    pub fn fits(&self, alphabet: Alphabet) -> bool {
        self.symbols.iter().all(|&s| alphabet.contains(s))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text, Alphabet::new(8), text.len()).unwrap()
    }

    #[test]
    fn parse_valid_code() {
        let c = Code::parse("DBCA", Alphabet::new(4), 4).unwrap();
        assert_eq!(c.width(), 4);
        assert_eq!(Some(c.symbol_at(0)), Symbol::new(3));
        assert_eq!(c.to_string(), "DBCA");
    }

    #[test]
    fn parse_normalizes_case_and_trims() {
        let c = Code::parse("  abCd\n", Alphabet::new(4), 4).unwrap();
        assert_eq!(c.to_string(), "ABCD");
    }

    #[test]
    fn parse_rejects_wrong_width() {
        assert_eq!(
            Code::parse("ABCDE", Alphabet::new(6), 4),
            Err(CodeError::InvalidWidth {
                expected: 4,
                actual: 5
            })
        );
        assert!(matches!(
            Code::parse("", Alphabet::new(6), 4),
            Err(CodeError::InvalidWidth { actual: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_symbols_outside_alphabet() {
        let err = Code::parse("ABCG", Alphabet::new(6), 4).unwrap_err();
        assert_eq!(
            err,
            CodeError::InvalidSymbol {
                letter: 'G',
                alphabet: "ABCDEF".to_string()
            }
        );
        assert!(err.to_string().contains("ABCDEF"));
        assert!(Code::parse("AB1D", Alphabet::new(6), 4).is_err());
    }

    #[test]
    fn width_out_of_range_message() {
        let err = CodeError::WidthOutOfRange { width: 11 };
        assert_eq!(err.to_string(), "Code must be 4 to 10 letters long, got 11");
    }

    #[test]
    fn distinct_symbols() {
        assert!(code("ABCD").has_distinct_symbols());
        assert!(!code("ABCA").has_distinct_symbols());
        assert!(!code("AAAA").has_distinct_symbols());
    }

    #[test]
    fn fits_alphabet() {
        let c = code("ABCH");
        assert!(c.fits(Alphabet::new(8)));
        assert!(!c.fits(Alphabet::new(7)));
    }

    #[test]
    fn display_round_trips_letters() {
        assert_eq!(format!("{}", code("HGFEDCBA")), "HGFEDCBA");
    }
}
