//! Secret code generation
//!
//! Two policies:
//! - with repetition: each position is an independent uniform draw
//! - without repetition: draws from a shrinking pool of unused symbols
//!
//! Distinct symbols are impossible when the code is wider than the alphabet,
//! in which case repetition is used silently.

use super::{Alphabet, Code, Symbol};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used when the system clock cannot be read
const FALLBACK_SEED: u64 = 0x55AA_00FF;

/// Random source for secret codes
///
/// Create one per game. A fixed seed makes the generated codes reproducible.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    rng: StdRng,
    seed: u64,
}

impl CodeGenerator {
    /// Create a generator seeded from `seed`, or from the clock if `None`
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(time_seed);
        debug!("seeding code generator with {seed:#x}");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create the generator for the `game`-th game of a session
    ///
    /// With a base seed, each game gets its own reproducible stream; without
    /// one, every game is seeded from the clock.
    #[must_use]
    pub fn for_game(base_seed: Option<u64>, game: u64) -> Self {
        Self::new(base_seed.map(|seed| seed.wrapping_add(game)))
    }

    /// The seed this generator was created with
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a secret of `width` symbols from `alphabet`
    ///
    /// Repetition is forced when `width > alphabet.len()`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, CodeGenerator};
    ///
    /// let mut generator = CodeGenerator::new(Some(42));
    /// let secret = generator.generate(Alphabet::new(6), 4, false);
    /// assert_eq!(secret.width(), 4);
    /// assert!(secret.has_distinct_symbols());
    /// ```
    pub fn generate(&mut self, alphabet: Alphabet, width: usize, allow_repeats: bool) -> Code {
        let repeats = allow_repeats || width > alphabet.len();
        let code = if repeats {
            self.with_repeats(alphabet, width)
        } else {
            self.without_repeats(alphabet, width)
        };
        debug!(
            "generated {width}-symbol secret from {} symbols (repeats: {repeats})",
            alphabet.len()
        );
        code
    }

    fn with_repeats(&mut self, alphabet: Alphabet, width: usize) -> Code {
        let pool: Vec<Symbol> = alphabet.symbols().collect();
        let symbols = (0..width)
            .map(|_| pool[self.rng.random_range(0..pool.len())])
            .collect();
        Code::new(symbols)
    }

    fn without_repeats(&mut self, alphabet: Alphabet, width: usize) -> Code {
        let mut pool: Vec<Symbol> = alphabet.symbols().collect();
        let symbols = (0..width)
            .map(|_| {
                let pick = self.rng.random_range(0..pool.len());
                // Vec::remove keeps the remaining symbols in alphabet order
                pool.remove(pick)
            })
            .collect();
        Code::new(symbols)
    }
}

/// Generate a secret with a one-off generator
///
/// Convenience wrapper around [`CodeGenerator`] for callers that do not keep
/// the generator around between games.
#[must_use]
pub fn generate(alphabet: Alphabet, width: usize, allow_repeats: bool, seed: Option<u64>) -> Code {
    CodeGenerator::new(seed).generate(alphabet, width, allow_repeats)
}

/// Seed from the wall clock: seconds XOR nanoseconds
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(FALLBACK_SEED, |now| {
            now.as_secs() ^ u64::from(now.subsec_nanos())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_WIDTH, MIN_WIDTH};

    #[test]
    fn generate_width_and_alphabet() {
        let mut generator = CodeGenerator::new(Some(7));
        for size in 2..=20 {
            let alphabet = Alphabet::new(size);
            for width in MIN_WIDTH..=MAX_WIDTH {
                let code = generator.generate(alphabet, width, true);
                assert_eq!(code.width(), width);
                assert!(code.fits(alphabet), "{code} not in {alphabet}");
            }
        }
    }

    #[test]
    fn generate_distinct_when_repeats_disallowed() {
        let mut generator = CodeGenerator::new(Some(99));
        for size in 4..=20 {
            let alphabet = Alphabet::new(size);
            for width in MIN_WIDTH..=MAX_WIDTH.min(size) {
                for _ in 0..20 {
                    let code = generator.generate(alphabet, width, false);
                    assert_eq!(code.width(), width);
                    assert!(code.fits(alphabet));
                    assert!(code.has_distinct_symbols(), "{code} repeats a symbol");
                }
            }
        }
    }

    #[test]
    fn generate_full_alphabet_is_permutation() {
        let mut generator = CodeGenerator::new(Some(3));
        let alphabet = Alphabet::new(10);
        let code = generator.generate(alphabet, 10, false);

        let mut letters: Vec<char> = code.to_string().chars().collect();
        letters.sort_unstable();
        assert_eq!(letters.into_iter().collect::<String>(), "ABCDEFGHIJ");
    }

    #[test]
    fn generate_forces_repeats_when_too_wide() {
        let mut generator = CodeGenerator::new(Some(11));
        let alphabet = Alphabet::new(2);
        let code = generator.generate(alphabet, 6, false);

        assert_eq!(code.width(), 6);
        assert!(code.fits(alphabet));
        // Six positions over two symbols must repeat
        assert!(!code.has_distinct_symbols());
    }

    #[test]
    fn generate_is_deterministic_with_seed() {
        let alphabet = Alphabet::new(12);
        for repeats in [true, false] {
            let first = generate(alphabet, 8, repeats, Some(12345));
            let second = generate(alphabet, 8, repeats, Some(12345));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn generator_remembers_seed() {
        assert_eq!(CodeGenerator::new(Some(5)).seed(), 5);
    }

    #[test]
    fn per_game_seeds_differ_but_repeat() {
        assert_eq!(CodeGenerator::for_game(Some(100), 0).seed(), 100);
        assert_eq!(CodeGenerator::for_game(Some(100), 3).seed(), 103);
        assert_eq!(CodeGenerator::for_game(Some(u64::MAX), 1).seed(), 0);

        let alphabet = Alphabet::new(20);
        let a = CodeGenerator::for_game(Some(8), 2).generate(alphabet, 10, true);
        let b = CodeGenerator::for_game(Some(8), 2).generate(alphabet, 10, true);
        assert_eq!(a, b);
    }

    #[test]
    fn draws_without_repeats_are_uniform_per_position() {
        // 7 symbols, 6 degrees of freedom: a chi-squared above 40 is
        // vanishingly unlikely for a uniform draw
        const DRAWS: usize = 7000;
        let alphabet = Alphabet::new(7);
        let mut generator = CodeGenerator::new(Some(31));
        let mut counts = [[0usize; 7]; 4];

        for _ in 0..DRAWS {
            let code = generator.generate(alphabet, 4, false);
            assert!(code.has_distinct_symbols());
            for (position, symbol) in code.symbols().iter().enumerate() {
                counts[position][symbol.index()] += 1;
            }
        }

        let expected = DRAWS as f64 / 7.0;
        for (position, row) in counts.iter().enumerate() {
            let chi_squared: f64 = row
                .iter()
                .map(|&observed| (observed as f64 - expected).powi(2) / expected)
                .sum();
            assert!(
                chi_squared < 40.0,
                "position {position}: chi2 = {chi_squared}, counts = {row:?}"
            );
        }
    }

    #[test]
    fn draws_without_repeats_reach_last_symbol_in_every_position() {
        let alphabet = Alphabet::new(5);
        let mut generator = CodeGenerator::new(Some(64));
        let mut seen = [[false; 5]; 5];

        for _ in 0..500 {
            let code = generator.generate(alphabet, 5, false);
            for (position, symbol) in code.symbols().iter().enumerate() {
                seen[position][symbol.index()] = true;
            }
        }

        assert!(seen.iter().flatten().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn repeated_draws_cover_alphabet() {
        let mut generator = CodeGenerator::new(Some(2024));
        let alphabet = Alphabet::new(6);
        let mut seen = [false; 6];

        for _ in 0..200 {
            for symbol in generator.generate(alphabet, 4, true).symbols() {
                seen[symbol.index()] = true;
            }
        }

        assert!(seen.iter().all(|&s| s), "some symbol never drawn: {seen:?}");
    }
}
