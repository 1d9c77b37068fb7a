//! Generate command
//!
//! Prints secret codes for the current settings, useful for checking a seed.

use crate::core::{Code, CodeGenerator};
use crate::settings::Settings;

/// Generate `count` secrets, one per simulated game
///
/// Each secret comes from its own per-game generator, the same way a
/// session of games would produce them.
#[must_use]
pub fn generate_codes(settings: &Settings, count: usize, seed: Option<u64>) -> Vec<Code> {
    (0..count as u64)
        .map(|game| {
            CodeGenerator::for_game(seed, game).generate(
                settings.alphabet(),
                settings.width(),
                settings.allow_repeats(),
            )
        })
        .collect()
}
