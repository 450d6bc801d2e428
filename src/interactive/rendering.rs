//! TUI rendering with ratatui
//!
//! Draws the board from the session history; no game rules live here.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ClueSet, Code, PegColor};
use crate::game::{HistoryEntry, MAX_ATTEMPTS, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and info
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal colour for a peg
const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Magenta => Color::Magenta,
        PegColor::Cyan => Color::Cyan,
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::Blue,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.digits()
        .iter()
        .flat_map(|&digit| {
            [
                Span::styled(
                    format!(" {digit} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(peg_color(digit.color()))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn clue_spans(clues: &ClueSet) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            "●".repeat(clues.exact_count()),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            "○".repeat(clues.present_count()),
            Style::default().fg(Color::White),
        ),
    ]
}

fn played_row(entry: &HistoryEntry) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {:>2} │ ", entry.turn),
        Style::default().fg(Color::DarkGray),
    )];
    spans.extend(code_spans(&entry.guess));
    spans.push(Span::raw("│ "));
    spans.extend(clue_spans(&entry.clues));
    Line::from(spans)
}

fn blank_row(turn: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {turn:>2} │ "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            " ·  ".repeat(4),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("│"),
    ])
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS + 2);

    let mut secret_line = vec![Span::raw("Secret │ ")];
    if app.secret_visible() {
        secret_line.extend(code_spans(app.session.secret()));
    } else {
        secret_line.push(Span::styled(
            " ?   ?   ?   ? ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(secret_line));
    lines.push(Line::from("───────┼─────────────────┼──────"));

    lines.extend(history.iter().map(played_row));
    lines.extend((history.len() + 1..=MAX_ATTEMPTS).map(blank_row));

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
        .constraints([Constraint::Length(10), Constraint::Min(5)])
        .split(area);

    render_legend(f, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let mut palette = vec![Span::raw("Colours: ")];
    for (i, color) in PegColor::ALL.iter().enumerate() {
        palette.push(Span::styled(
            format!(" {} ", i + 1),
            Style::default().fg(Color::Black).bg(peg_color(*color)),
        ));
        palette.push(Span::raw(" "));
    }

    let content = vec![
        Line::from(palette),
        Line::from(""),
        Line::from(vec![
            Span::styled("●", Style::default().fg(Color::Red)),
            Span::raw(" right colour, right spot"),
        ]),
        Line::from(vec![
            Span::styled("○", Style::default().fg(Color::White)),
            Span::raw(" right colour, wrong spot"),
        ]),
        Line::from(""),
        Line::from(format!("{MAX_ATTEMPTS} attempts, repeats allowed")),
    ];

    let legend = Paragraph::new(content).block(
        Block::default()
            .title(" How to Play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match app.input_mode {
        InputMode::Guessing => (
            format!(" Guess {} ", app.session.turn()),
            format!("> {}_", app.input_buffer),
        ),
        InputMode::GameOver => (" Game Over ".to_string(), "Press 'n' to play again".to_string()),
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = match app.session.state() {
        SessionState::AwaitingGuess => {
            format!("Attempts left: {}", app.session.attempts_remaining())
        }
        SessionState::Won => "Solved!".to_string(),
        SessionState::Lost => "Out of attempts".to_string(),
    };
    f.render_widget(Paragraph::new(state).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Won: {}/{}",
        app.stats.games_won, app.stats.total_games
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "q: Quit | Enter: Submit | Backspace: Delete",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn secret_hidden_while_playing() {
        let mut app = App::new(StdRng::seed_from_u64(5), false);
        app.session = crate::game::GameSession::with_secret(Code::parse("6543").unwrap());
        let screen = draw(&app);
        assert!(screen.contains("Secret │  ?   ?   ?   ?"));
        assert!(!screen.contains("6   5   4   3"));
        assert!(screen.contains("Attempts left: 12"));
    }

    #[test]
    fn played_turn_appears_on_board() {
        let mut app = App::new(StdRng::seed_from_u64(5), false);
        app.session = crate::game::GameSession::with_secret(Code::parse("1234").unwrap());
        app.session.submit_guess("1243");
        let screen = draw(&app);
        assert!(screen.contains("●●○○"));
        assert!(screen.contains("Attempts left: 11"));
        assert!(screen.contains("Guess 2"));
    }

    #[test]
    fn secret_shown_after_game_over() {
        let mut app = App::new(StdRng::seed_from_u64(5), false);
        app.session = crate::game::GameSession::with_secret(Code::parse("1234").unwrap());
        app.session.submit_guess("1234");
        assert!(draw(&app).contains("Secret │  1   2   3   4 "));
    }
}
