//! Terminal output formatting
//!
//! Display utilities for game rounds, settings and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_farewell, print_generated, print_score_result, print_settings, print_simulation_result,
};
