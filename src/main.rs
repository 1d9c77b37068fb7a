//! Mastermind - CLI
//!
//! Letter-code Mastermind with TUI and line-mode play, plus tools for
//! scoring guesses and checking the secret-code generator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{generate_codes, run_simple, run_simulation, score_codes},
    game::Tally,
    output::{
        print_farewell, print_generated, print_score_result, print_settings,
        print_simulation_result,
    },
    prompts::Prompter,
    settings::{DEFAULT_ROUNDS, DEFAULT_SYMBOLS, DEFAULT_WIDTH, Settings},
};
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the secret letter code: X = right letter in the right place, O = right letter in the wrong place",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of code letters to choose from (2-20)
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_SYMBOLS)]
    symbols: usize,

    /// Length of the secret code (4-10)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Guesses allowed per game (7-20)
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Never repeat a letter in the secret (ignored if the code is wider than the alphabet)
    #[arg(long, global = true)]
    no_repeats: bool,

    /// Seed for reproducible secrets (default: seeded from the clock)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-mode game with the classic prompts
    Simple,

    /// Score a guess against a secret
    Score {
        /// The secret code, e.g. AABC
        secret: String,

        /// The guess to score, e.g. ABCA
        guess: String,
    },

    /// Print freshly generated secret codes
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Generate many secrets in parallel and report symbol statistics
    Simulate {
        /// Number of secrets to generate
        #[arg(short = 'n', long, default_value = "10000")]
        games: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::new(cli.symbols, cli.width, cli.rounds, !cli.no_repeats);
    log::debug!("settings: {settings:?}, seed: {:?}", cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(settings, cli.seed),
        Commands::Simple => run_simple_command(settings, cli.seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess, &settings),
        Commands::Generate { count } => {
            let codes = generate_codes(&settings, count, cli.seed);
            print_generated(&codes, &settings);
            Ok(())
        }
        Commands::Simulate { games } => {
            run_simulate_command(&settings, games, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(settings: Settings, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(settings, seed);
    let tally = run_tui(app)?;
    print_farewell(&tally);
    Ok(())
}

fn run_simple_command(settings: Settings, seed: Option<u64>) -> Result<()> {
    let tally = Arc::new(Mutex::new(Tally::default()));
    farewell_on_interrupt(Arc::clone(&tally))?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let tally = run_simple(&mut prompter, settings, seed, &tally)?;
    print_farewell(&tally);
    Ok(())
}

/// Print the session tally and exit when the player presses Ctrl-C
fn farewell_on_interrupt(tally: Arc<Mutex<Tally>>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::spawn(move || {
        if runtime.block_on(tokio::signal::ctrl_c()).is_ok() {
            let tally = *tally.lock().unwrap_or_else(PoisonError::into_inner);
            println!();
            print_farewell(&tally);
            std::process::exit(130);
        }
    });
    Ok(())
}

fn run_score_command(secret: &str, guess: &str, settings: &Settings) -> Result<()> {
    let result = score_codes(secret, guess, settings.alphabet())?;
    print_score_result(&result);
    Ok(())
}

fn run_simulate_command(settings: &Settings, games: usize, seed: Option<u64>) {
    print_settings(settings);
    println!("\nGenerating {games} secrets...");
    let result = run_simulation(settings, games, seed, true);
    print_simulation_result(&result);
}
