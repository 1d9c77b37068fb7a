//! Mastermind
//!
//! Text-mode Mastermind played with letter codes instead of colours.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Alphabet, Code, CodeGenerator, Score};
//!
//! // Generate a secret from the letters A-F
//! let alphabet = Alphabet::new(6);
//! let secret = CodeGenerator::new(Some(7)).generate(alphabet, 4, true);
//!
//! // Score a guess against it
//! let guess = Code::parse("ABCD", alphabet, 4).unwrap();
//! let score = Score::calculate(&secret, &guess);
//! assert!(score.exact() + score.misplaced() <= 4);
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod settings;

// Per-game state machine
pub mod game;

// Player input parsing
pub mod prompts;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
