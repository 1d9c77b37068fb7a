//! Simple interactive CLI mode
//!
//! Line-based game without TUI: settings dialogue, one prompt per round and
//! the full round history printed after every wrong guess.

use crate::core::{Alphabet, CodeGenerator, MAX_SYMBOLS, MAX_WIDTH, MIN_SYMBOLS, MIN_WIDTH};
use crate::game::{Game, RoundOutcome, Tally};
use crate::output::formatters::round_row;
use crate::prompts::Prompter;
use crate::settings::{
    DEFAULT_ROUNDS, DEFAULT_SYMBOLS, DEFAULT_WIDTH, MAX_ROUNDS, MIN_ROUNDS, Settings,
};
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Run games until the player declines another or input runs out
///
/// Each finished game is recorded in `tally` as soon as it ends, so another
/// thread (an interrupt handler) can report the session at any point.
/// Returns the final tally. A game cut short by end of input is not counted.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut settings: Settings,
    seed: Option<u64>,
    tally: &Mutex<Tally>,
) -> Result<Tally> {

    writeln!(
        prompter.output(),
        "\nHello, Welcome to the game of Mastermind\n\
         This version of the game uses letter codes instead of colours."
    )?;

    loop {
        writeln!(prompter.output(), "\nThe game settings are; -\n{settings}")?;

        match prompter.ask_yes_no("\nDo you wish to change the Game settings?", false)? {
            Some(true) => match change_settings(prompter, settings)? {
                Some(changed) => settings = changed,
                None => break,
            },
            Some(false) => {}
            None => break,
        }

        let played = lock(tally).played;
        let mut generator = CodeGenerator::for_game(seed, played as u64);
        let Some(won) = play_game(prompter, settings, &mut generator)? else {
            break;
        };
        lock(tally).record(won);
        debug!("session: {:?}", *lock(tally));

        if prompter.ask_yes_no("\nDo you wish to play again?", true)? != Some(true) {
            break;
        }
    }

    Ok(*lock(tally))
}

/// A poisoned tally is still a valid count
fn lock(tally: &Mutex<Tally>) -> MutexGuard<'_, Tally> {
    tally.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ask for each setting in turn, returning `None` if input ends
fn change_settings<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    current: Settings,
) -> Result<Option<Settings>> {
    let Some(symbols) = prompter.ask_number(
        "How many letters to choose from",
        DEFAULT_SYMBOLS,
        MIN_SYMBOLS,
        MAX_SYMBOLS,
    )?
    else {
        return Ok(None);
    };
    let alphabet = Alphabet::new(symbols);
    writeln!(
        prompter.output(),
        "{symbols} code letters in use & they are: {alphabet}"
    )?;

    let Some(width) =
        prompter.ask_number("How many letters to guess", DEFAULT_WIDTH, MIN_WIDTH, MAX_WIDTH)?
    else {
        return Ok(None);
    };
    writeln!(prompter.output(), "The code will be {width} letters long")?;

    let Some(rounds) =
        prompter.ask_number("How many guesses", DEFAULT_ROUNDS, MIN_ROUNDS, MAX_ROUNDS)?
    else {
        return Ok(None);
    };
    writeln!(
        prompter.output(),
        "{rounds} attempts to guess the code are available"
    )?;

    let changed = Settings::new(symbols, width, rounds, current.allow_repeats());
    if !changed.repeats_negotiable() {
        return Ok(Some(changed));
    }
    match prompter.ask_yes_no("Are repeated code letters allowed in the code?", true)? {
        Some(allow_repeats) => Ok(Some(Settings::new(symbols, width, rounds, allow_repeats))),
        None => Ok(None),
    }
}

/// Play one game; `None` if input ended before it finished
fn play_game<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    settings: Settings,
    generator: &mut CodeGenerator,
) -> Result<Option<bool>> {
    let mut game = Game::new(settings);
    game.start(generator);
    writeln!(prompter.output())?;

    loop {
        let Some(guess) =
            prompter.ask_guess(game.current_round(), settings.alphabet(), settings.width())?
        else {
            return Ok(None);
        };

        match game.submit(guess)? {
            RoundOutcome::Won { .. } => {
                let secret = game.secret().map(ToString::to_string).unwrap_or_default();
                writeln!(
                    prompter.output(),
                    "Congratulations, you succeeded in specifying \"{secret}\", which was the secret code!"
                )?;
                return Ok(Some(true));
            }
            RoundOutcome::Continue(_) => print_rounds(prompter.output(), &game)?,
            RoundOutcome::Lost { secret, .. } => {
                print_rounds(prompter.output(), &game)?;
                writeln!(
                    prompter.output(),
                    "Commiserations, you were not successful this time.\n\
                     The secret code was \"{secret}\""
                )?;
                return Ok(Some(false));
            }
        }
    }
}

fn print_rounds<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    for (i, round) in game.rounds().iter().enumerate() {
        writeln!(out, "{}", round_row(i + 1, &round.guess, round.score))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate_codes;

    fn run_bytes(input: &[u8], settings: Settings, seed: u64) -> (Tally, String) {
        let shared = Mutex::new(Tally::default());
        let mut prompter = Prompter::new(input, Vec::new());
        let tally = run_simple(&mut prompter, settings, Some(seed), &shared).unwrap();
        assert_eq!(tally, *shared.lock().unwrap());
        let output = String::from_utf8(prompter.output().clone()).unwrap();
        (tally, output)
    }

    fn run(input: &str, settings: Settings, seed: u64) -> (Tally, String) {
        run_bytes(input.as_bytes(), settings, seed)
    }

    #[test]
    fn winning_first_guess() {
        let settings = Settings::default();
        let secret = generate_codes(&settings, 1, Some(42)).remove(0);
        let input = format!("n\n{secret}\nn\n");

        let (tally, output) = run(&input, settings, 42);

        assert_eq!(tally, Tally { played: 1, won: 1 });
        assert!(output.contains("Welcome to the game of Mastermind"));
        assert!(output.contains(&format!("succeeded in specifying \"{secret}\"")));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let settings = Settings::default();
        let secret = generate_codes(&settings, 1, Some(8)).remove(0);
        let wrong = if secret.to_string() == "AAAA" { "BBBB" } else { "AAAA" };
        let mut input = String::from("\n");
        for _ in 0..settings.max_rounds() {
            input.push_str(wrong);
            input.push('\n');
        }
        input.push_str("no\n");

        let (tally, output) = run(&input, settings, 8);

        assert_eq!(tally, Tally { played: 1, won: 0 });
        assert!(output.contains(&format!(" 7.  {wrong}  |  ")));
        assert!(output.contains(&format!("The secret code was \"{secret}\"")));
    }

    #[test]
    fn end_of_input_mid_game_not_counted() {
        let (tally, output) = run("n\nAB\n", Settings::default(), 1);
        assert_eq!(tally, Tally::default());
        assert!(output.contains("Round number 1"));
    }

    #[test]
    fn stray_bytes_in_guess_are_ignored() {
        let settings = Settings::default();
        let secret = generate_codes(&settings, 1, Some(5)).remove(0).to_string();
        let mut input = b"n\n".to_vec();
        input.extend_from_slice(secret[..2].as_bytes());
        input.push(0xe9);
        input.extend_from_slice(secret[2..].as_bytes());
        input.extend_from_slice(b"\nn\n");

        let (tally, output) = run_bytes(&input, settings, 5);

        assert_eq!(tally, Tally { played: 1, won: 1 });
        assert!(output.contains(&format!("succeeded in specifying \"{secret}\"")));
    }

    #[test]
    fn shared_tally_tracks_finished_games() {
        let settings = Settings::default();
        let secret = generate_codes(&settings, 4, Some(77)).remove(3);
        // First game won, second cut short by end of input
        let input = format!("n\n{secret}\ny\nn\nAB\n");
        let shared = Mutex::new(Tally { played: 3, won: 1 });
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());

        // Earlier games count towards the per-game seed index
        let tally = run_simple(&mut prompter, settings, Some(77), &shared).unwrap();

        assert_eq!(tally, Tally { played: 4, won: 2 });
        assert_eq!(*shared.lock().unwrap(), tally);
    }

    #[test]
    fn change_settings_dialogue() {
        // 4 letters, width 6 (too wide for distinct symbols), 30 rounds -> 20
        let (_, output) = run("y\n4\n6\n30\n", Settings::default(), 3);

        assert!(output.contains("4 code letters in use & they are: ABCD"));
        assert!(output.contains("The code will be 6 letters long"));
        assert!(output.contains("20 attempts to guess the code are available"));
        // The repetition question is skipped when width exceeds the alphabet
        assert!(!output.contains("Are repeated code letters allowed"));
        assert!(output.contains("Please enter 6 letters from the set \"ABCD\""));
    }

    #[test]
    fn change_settings_asks_about_repeats() {
        let (_, output) = run("y\n8\n4\n7\nn\n", Settings::default(), 3);
        assert!(output.contains("Are repeated code letters allowed"));
    }

    #[test]
    fn seeded_sessions_use_fresh_secret_per_game() {
        let settings = Settings::default();
        let secrets = generate_codes(&settings, 2, Some(60));
        let input = format!("n\n{}\ny\nn\n{}\nn\n", secrets[0], secrets[1]);

        let (tally, _) = run(&input, settings, 60);
        assert_eq!(tally, Tally { played: 2, won: 2 });
    }
}
