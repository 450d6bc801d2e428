//! TUI application state and logic

use crate::core::CODE_LENGTH;
use crate::game::{GameResult, GameSession, GuessOutcome, MAX_ATTEMPTS, RejectReason};
use crate::output::formatters::INVALID_GUESS;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub session: GameSession,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub reveal_secret: bool,
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

/// Results across the games played in one run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the turn they were won on
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl App {
    #[must_use]
    pub fn new(mut rng: StdRng, reveal_secret: bool) -> Self {
        let session = GameSession::new(&mut rng);

        Self {
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "The secret code has been set. You have {MAX_ATTEMPTS} attempts, good luck!"
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type four digits from 1 to 6 (e.g. 1234) and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            reveal_secret,
        }
    }

    /// Add a typed character to the pending guess
    pub fn push_input(&mut self, c: char) {
        if self.input_buffer.chars().count() < CODE_LENGTH && !c.is_control() {
            self.input_buffer.push(c);
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&input) {
            GuessOutcome::Accepted { turn, clues } => {
                debug!(turn, "guess entered in tui");
                if let Some(result) = self.session.result() {
                    self.finish_game(result);
                } else {
                    self.add_message(
                        &format!(
                            "Turn {turn}: {} exact, {} misplaced. {} attempts left",
                            clues.exact_count(),
                            clues.present_count(),
                            self.session.attempts_remaining()
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            GuessOutcome::Rejected(RejectReason::InvalidFormat(_)) => {
                self.add_message(INVALID_GUESS, MessageStyle::Error);
            }
            GuessOutcome::Rejected(RejectReason::GameOver) => {
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn finish_game(&mut self, result: GameResult) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        match result {
            GameResult::Won(turns) => {
                self.stats.games_won += 1;
                self.stats.guess_distribution[turns] += 1;

                let celebration = match turns {
                    1 => "🎯 First try! Are you reading my mind? 🌟",
                    2..=4 => "🔥 Code broken in record time! 🔥",
                    5..=8 => "✨ Code broken! Well played! ✨",
                    _ => "😅 Phew! Cracked it just in time! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!("Solved in {turns} of {MAX_ATTEMPTS} attempts."),
                    MessageStyle::Success,
                );
            }
            GameResult::Lost => {
                self.add_message(
                    &format!("Out of attempts! The code was {}", self.session.secret()),
                    MessageStyle::Error,
                );
            }
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(&mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            "New game started! A fresh secret code has been set.",
            MessageStyle::Info,
        );
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

    /// Whether the secret should be drawn on the board
    #[must_use]
    pub fn secret_visible(&self) -> bool {
        self.reveal_secret || self.session.is_terminal()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => handle_key(&mut app, key.code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.input_mode {
        InputMode::GameOver => {
            if code == KeyCode::Char('n') {
                app.new_game();
            }
        }
        InputMode::Guessing => match code {
            KeyCode::Char(c) => app.push_input(c),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Enter => app.submit_guess(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use rand::SeedableRng;

    fn app_with_secret(secret: &str) -> App {
        let mut app = App::new(StdRng::seed_from_u64(3), false);
        app.session = GameSession::with_secret(Code::parse(secret).unwrap());
        app
    }

    fn type_guess(app: &mut App, guess: &str) {
        for c in guess.chars() {
            handle_key(app, KeyCode::Char(c));
        }
        handle_key(app, KeyCode::Enter);
    }

    #[test]
    fn input_is_capped_at_code_length() {
        let mut app = app_with_secret("1234");
        for c in "123456".chars() {
            app.push_input(c);
        }
        assert_eq!(app.input_buffer, "1234");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut app = app_with_secret("1234");
        handle_key(&mut app, KeyCode::Char('5'));
        handle_key(&mut app, KeyCode::Char('6'));
        handle_key(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "5");
    }

    #[test]
    fn invalid_guess_reports_error_and_keeps_turn() {
        let mut app = app_with_secret("1234");
        type_guess(&mut app, "12");

        assert_eq!(app.session.turn(), 1);
        assert!(app.input_buffer.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, INVALID_GUESS);
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn winning_records_statistics() {
        let mut app = app_with_secret("1234");
        type_guess(&mut app, "4321");
        type_guess(&mut app, "1234");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.secret_visible());
    }

    #[test]
    fn losing_counts_game_without_win() {
        let mut app = app_with_secret("1234");
        for _ in 0..MAX_ATTEMPTS {
            type_guess(&mut app, "5566");
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("The code was 1234")));
    }

    #[test]
    fn typing_is_ignored_after_game_over() {
        let mut app = app_with_secret("1234");
        type_guess(&mut app, "1234");
        type_guess(&mut app, "5555");
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn new_game_resets_session_but_keeps_stats() {
        let mut app = app_with_secret("1234");
        type_guess(&mut app, "1234");
        handle_key(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.turn(), 1);
        assert!(app.session.history().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with_secret("1234");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
