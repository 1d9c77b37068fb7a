//! TUI rendering with ratatui
//!
//! Board, settings and message panels for the Mastermind game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, Score};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Letter Code Edition")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn peg_spans(score: Score) -> Vec<Span<'static>> {
    score
        .marks()
        .map(|mark| {
            let color = match mark {
                Mark::Exact => Color::Green,
                Mark::Misplaced => Color::Yellow,
                Mark::Absent => Color::DarkGray,
            };
            Span::styled(
                mark.peg().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let settings = app.game.settings();
    let empty_guess = "·".repeat(settings.width());

    let mut lines: Vec<Line> = app
        .game
        .rounds()
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let mut spans = vec![
                Span::raw(format!("{:2}.  ", i + 1)),
                Span::styled(
                    round.guess.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  "),
            ];
            spans.extend(peg_spans(round.score));
            Line::from(spans)
        })
        .collect();

    // Remaining slots
    for round in app.game.current_round()..=settings.max_rounds() {
        lines.push(Line::from(Span::styled(
            format!("{round:2}.  {empty_guess}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(secret) = app.game.secret() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                secret.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Settings
            Constraint::Length(3), // Rounds gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_settings(f, app, chunks[0]);
    render_round_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let settings = app.game.settings();
    let content = vec![
        Line::from(vec![
            Span::raw("Letters:  "),
            Span::styled(
                settings.alphabet().letters(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!("Width:    {}", settings.width())),
        Line::from(format!("Rounds:   {}", settings.max_rounds())),
        Line::from(format!(
            "Repeats:  {}",
            if settings.effective_repeats() {
                "allowed"
            } else {
                "not allowed"
            }
        )),
        Line::from(Span::styled(
            "X exact  O misplaced  - absent",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Settings ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let max_rounds = app.game.settings().max_rounds();
    let used = app.game.rounds().len();
    let progress_pct = ((used * 100) / max_rounds.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{used}/{max_rounds}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            if app.game.rounds().last().is_some_and(|r| r.score.is_perfect()) {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Guessing => (
            format!(
                " Round {} - enter {} letters from {} ",
                app.game.current_round(),
                app.settings.width(),
                app.settings.alphabet()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = if app.is_over() {
        "Mode: Game Over"
    } else {
        "Mode: Playing"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.tally.played,
        app.tally.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let rounds_text = format!("Rounds left: {}", app.game.rounds_remaining());
    let rounds = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds, chunks[2]);

    let help_text = if app.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl-N: New Game | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_settings() {
        let app = App::new(Settings::default(), Some(3));
        let screen = rendered(&app);

        assert!(screen.contains("MASTERMIND"));
        assert!(screen.contains("ABCDEFG"));
        assert!(screen.contains(" 7.  ····"));
        assert!(screen.contains("Rounds left: 7"));
    }

    #[test]
    fn peg_spans_follow_marks() {
        let spans = peg_spans(Score::new(1, 2, 4));
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "XOO-");
    }
}
