//! Code symbols and the alphabet they are drawn from
//!
//! Symbols are stored as zero-based indices into the alphabet and rendered as
//! the letters 'A', 'B', 'C', ... on output.

use std::fmt;

/// Smallest supported alphabet
pub const MIN_SYMBOLS: usize = 2;

/// Largest supported alphabet ('A' through 'T')
pub const MAX_SYMBOLS: usize = 20;

/// First letter of every alphabet
const FIRST_LETTER: u8 = b'A';

/// A single code symbol
///
/// Wraps the symbol's index in the alphabet, so index 0 is 'A'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from its alphabet index
    ///
    /// Returns `None` if index >= `MAX_SYMBOLS`.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < MAX_SYMBOLS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Zero-based position in the alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter this symbol is displayed as
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        (FIRST_LETTER + self.0) as char
    }

    /// Parse a letter (either case) into a symbol, ignoring alphabet size
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        let index = upper as u8 - FIRST_LETTER;
        ((index as usize) < MAX_SYMBOLS).then_some(Self(index))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The ordered set of symbols valid for the current game
///
/// Always contiguous from 'A'; an alphabet of size 7 is `ABCDEFG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: u8,
}

impl Alphabet {
    /// Create an alphabet with `size` symbols, clamped to `MIN_SYMBOLS..=MAX_SYMBOLS`
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_SYMBOLS, MAX_SYMBOLS);
        Self { size: size as u8 }
    }

    /// Number of symbols in the alphabet
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.size as usize
    }

    /// Alphabets are never empty; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.size == 0
    }

    /// Check whether a symbol belongs to this alphabet
    #[inline]
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        symbol.0 < self.size
    }

    /// Look up a letter in this alphabet (case-insensitive)
    #[must_use]
    pub fn symbol_for(self, letter: char) -> Option<Symbol> {
        Symbol::from_letter(letter).filter(|&s| self.contains(s))
    }

    /// Iterate over the alphabet in order
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        (0..self.size).map(Symbol)
    }

    /// The alphabet as a string, e.g. "ABCDEFG"
    #[must_use]
    pub fn letters(self) -> String {
        self.symbols().map(Symbol::letter).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}
