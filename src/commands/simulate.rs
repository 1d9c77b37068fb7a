//! Simulate command
//!
//! Generates many secrets in parallel and reports how evenly the symbols
//! were drawn. Useful for checking the generator over a settings range.

use crate::core::{Code, CodeGenerator, Symbol};
use crate::settings::Settings;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub settings: Settings,
    pub games: usize,
    pub symbol_counts: FxHashMap<Symbol, usize>,
    pub codes_with_repeats: usize,
    pub distinct_codes: usize,
    pub chi_squared: f64,
    pub duration: Duration,
}

impl SimulationResult {
    /// Average number of times each symbol should appear
    #[must_use]
    pub fn expected_per_symbol(&self) -> f64 {
        (self.games * self.settings.width()) as f64 / self.settings.symbols() as f64
    }

    /// Share of secrets containing a repeated symbol, in percent
    #[must_use]
    pub fn repeat_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.codes_with_repeats as f64 / self.games as f64 * 100.0
        }
    }
}

/// Generate `games` secrets and collect symbol statistics
///
/// Game `i` uses the same per-game generator a session would, so a seeded
/// simulation is reproducible regardless of thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation(
    settings: &Settings,
    games: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> SimulationResult {
    let start = Instant::now();
    info!("simulating {games} games");

    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    // Without a seed, fix one base for the whole run so every game differs
    let base = seed.unwrap_or_else(|| CodeGenerator::new(None).seed());

    let codes: Vec<Code> = (0..games as u64)
        .into_par_iter()
        .map(|game| {
            let code = CodeGenerator::for_game(Some(base), game).generate(
                settings.alphabet(),
                settings.width(),
                settings.allow_repeats(),
            );
            pb.inc(1);
            code
        })
        .collect();

    pb.finish_and_clear();

    let mut symbol_counts: FxHashMap<Symbol, usize> = FxHashMap::default();
    let mut distinct: FxHashSet<&Code> = FxHashSet::default();
    let mut codes_with_repeats = 0;

    for code in &codes {
        for &symbol in code.symbols() {
            *symbol_counts.entry(symbol).or_insert(0) += 1;
        }
        if !code.has_distinct_symbols() {
            codes_with_repeats += 1;
        }
        distinct.insert(code);
    }

    let expected = (games * settings.width()) as f64 / settings.symbols() as f64;
    let chi_squared = if expected > 0.0 {
        settings
            .alphabet()
            .symbols()
            .map(|symbol| {
                let observed = symbol_counts.get(&symbol).copied().unwrap_or(0) as f64;
                (observed - expected).powi(2) / expected
            })
            .sum::<f64>()
    } else {
        0.0
    };

    SimulationResult {
        settings: *settings,
        games,
        symbol_counts,
        codes_with_repeats,
        distinct_codes: distinct.len(),
        chi_squared,
        duration: start.elapsed(),
    }
}
