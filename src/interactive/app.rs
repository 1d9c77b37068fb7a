//! TUI application state and logic

use crate::core::CodeGenerator;
use crate::game::{Game, GameState, RoundOutcome, Tally};
use crate::prompts::parse_guess;
use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub settings: Settings,
    pub seed: Option<u64>,
    pub game: Game,
    pub games_started: u64,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub tally: Tally,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        let mut app = Self {
            settings,
            seed,
            game: Game::new(settings),
            games_started: 0,
            input_buffer: String::new(),
            messages: Vec::new(),
            tally: Tally::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.new_game();
        app
    }

    pub fn new_game(&mut self) {
        let mut generator = CodeGenerator::for_game(self.seed, self.games_started);
        self.games_started += 1;

        self.game = Game::new(self.settings);
        self.game.start(&mut generator);
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "New game! Crack the {}-letter code using \"{}\"",
                self.settings.width(),
                self.settings.alphabet()
            ),
            MessageStyle::Info,
        );
    }

    /// Accept a typed character if it is a code letter and there is room
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() >= self.settings.width() {
            return;
        }
        if let Some(symbol) = self.settings.alphabet().symbol_for(c) {
            self.input_buffer.push(symbol.letter());
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(guess) = parse_guess(
            &self.input_buffer,
            self.settings.alphabet(),
            self.settings.width(),
        ) else {
            self.add_message(
                &format!("Enter {} letters first!", self.settings.width()),
                MessageStyle::Error,
            );
            return;
        };

        match self.game.submit(guess) {
            Ok(RoundOutcome::Continue(score)) => {
                self.add_message(
                    &format!(
                        "{} exact, {} misplaced - {} rounds left",
                        score.exact(),
                        score.misplaced(),
                        self.game.rounds_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
            Ok(RoundOutcome::Won { rounds }) => {
                self.tally.record(true);
                self.input_mode = InputMode::GameOver;

                let celebration = match rounds {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2 | 3 => format!("🔥 MAGNIFICENT! Cracked in {rounds}! 🔥"),
                    _ => format!("🎉 Cracked in {rounds} rounds! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(RoundOutcome::Lost { secret, .. }) => {
                self.tally.record(false);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("Out of rounds! The secret code was {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }

        self.input_buffer.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.state() != GameState::InProgress
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game over: ignore other keys
                }
            },
            // Letters are code symbols here, so quitting is on Esc
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Tally> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Tally> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.tally)
}
