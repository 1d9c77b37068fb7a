//! Core domain types for Mastermind
//!
//! This module contains the secret-code generator and the guess scorer, plus
//! the symbol and code types they operate on. Nothing here performs I/O.

mod code;
mod generator;
mod score;
mod symbol;

pub use code::{Code, CodeError, MAX_WIDTH, MIN_WIDTH};
pub use generator::{CodeGenerator, generate};
pub use score::{Mark, Score, is_win};
pub use symbol::{Alphabet, MAX_SYMBOLS, MIN_SYMBOLS, Symbol};
