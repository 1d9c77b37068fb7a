//! Display functions for command results

use super::formatters::{create_progress_bar, describe_score, round_row};
use crate::commands::{ScoreResult, SimulationResult};
use crate::core::Code;
use crate::game::Tally;
use crate::settings::Settings;
use colored::Colorize;

/// Print the current settings block
pub fn print_settings(settings: &Settings) {
    println!("\n{}", "The game settings are; -".bright_cyan().bold());
    println!("{settings}");
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.to_string().bright_yellow().bold(),
        result.guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n{}", round_row(1, &result.guess, result.score));
    println!("   {}", describe_score(result.score));

    println!();
    if result.win {
        println!("{}", "✅ Exact match - the code is cracked!".green().bold());
    }
}

/// Print generated secrets, one per line
pub fn print_generated(codes: &[Code], settings: &Settings) {
    println!(
        "{}",
        format!(
            "{} secret{} over \"{}\", width {}:",
            codes.len(),
            if codes.len() == 1 { "" } else { "s" },
            settings.alphabet(),
            settings.width()
        )
        .bright_cyan()
    );
    for (i, code) in codes.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, code.to_string().bright_white().bold());
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Secrets:".bright_cyan().bold());
    println!("   Games simulated:  {}", result.games);
    println!("   Distinct secrets: {}", result.distinct_codes);
    println!(
        "   With repeats:     {} ({:.1}%)",
        result.codes_with_repeats,
        result.repeat_rate()
    );
    println!(
        "   Chi-squared:      {}",
        format!("{:.2}", result.chi_squared).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Symbol frequency:".bright_cyan().bold());
    let expected = result.expected_per_symbol();
    let max = result
        .symbol_counts
        .values()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    for symbol in result.settings.alphabet().symbols() {
        let count = result.symbol_counts.get(&symbol).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max, 40);
        let deviation = if expected > 0.0 {
            (count as f64 - expected) / expected * 100.0
        } else {
            0.0
        };
        println!("   {symbol}: {} {count:6} ({deviation:+5.1}%)", bar.green());
    }
}

/// Print the closing message for a session
pub fn print_farewell(tally: &Tally) {
    println!("\n{}", "Thank you for playing Mastermind".bright_cyan().bold());
    println!("{tally}\n");
}
