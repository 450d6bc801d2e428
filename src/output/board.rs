//! Game board rendering
//!
//! Renderers only lay out data the session already computed: they never
//! validate guesses or work out clues.

use super::formatters::{CLUE_CELL_WIDTH, blank_peg_cell, clue_cell, peg_cell, turn_cell};
use crate::core::Code;
use crate::game::HistoryEntry;

/// Inner width of the board between the outer borders
const BOARD_WIDTH: usize = 52;

const HEADER: &str = "| Turn ||           Guesses             ||   Clues   |";

/// Something that can draw the board for a player
pub trait BoardRenderer {
    /// Draw the accepted guesses, padding the remaining turns with blank rows
    fn render_board(&self, history: &[HistoryEntry], max_attempts: usize) -> String;

    /// Draw a code as a row of coloured pegs
    fn render_code(&self, code: &Code) -> String;
}

/// Plain text board in the classic pipe-and-dash layout
#[derive(Debug, Default, Clone, Copy)]
pub struct TextBoard;

impl TextBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn rule(fill: char) -> String {
        format!("|{}|", fill.to_string().repeat(BOARD_WIDTH))
    }

    fn guess_row(entry: &HistoryEntry) -> String {
        let pegs: Vec<String> = entry.guess.digits().iter().map(|&d| peg_cell(d)).collect();
        format!(
            "|{}||{}||{}|",
            turn_cell(entry.turn),
            pegs.join("|"),
            clue_cell(&entry.clues)
        )
    }

    fn blank_row(turn: usize) -> String {
        let pegs = vec![blank_peg_cell(); 4];
        format!(
            "|{}||{}||{}|",
            turn_cell(turn),
            pegs.join("|"),
            " ".repeat(CLUE_CELL_WIDTH)
        )
    }
}

impl BoardRenderer for TextBoard {
    fn render_board(&self, history: &[HistoryEntry], max_attempts: usize) -> String {
        let mut lines = vec![Self::rule('='), HEADER.to_string(), Self::rule('=')];

        for entry in history {
            lines.push(Self::guess_row(entry));
            lines.push(Self::rule('-'));
        }

        for turn in history.len() + 1..=max_attempts {
            lines.push(Self::blank_row(turn));
            lines.push(Self::rule('-'));
        }

        lines.push(Self::rule('='));
        lines.join("\n")
    }

    fn render_code(&self, code: &Code) -> String {
        let pegs: Vec<String> = code.digits().iter().map(|&d| peg_cell(d)).collect();
        format!("|{}|", pegs.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, MAX_ATTEMPTS};

    fn plain() {
        colored::control::set_override(false);
    }

    fn played(secret: &str, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::with_secret(Code::parse(secret).unwrap());
        for guess in guesses {
            session.submit_guess(guess);
        }
        session
    }

    #[test]
    fn empty_board_has_all_blank_turns() {
        plain();
        let board = TextBoard::new().render_board(&[], MAX_ATTEMPTS);
        let lines: Vec<&str> = board.lines().collect();

        // 3 header lines, 2 per turn, closing rule
        assert_eq!(lines.len(), 3 + 2 * MAX_ATTEMPTS + 1);
        assert_eq!(lines[1], "| Turn ||           Guesses             ||   Clues   |");
        assert_eq!(
            lines[3],
            "|  1   ||       |       |       |       ||           |"
        );
        assert_eq!(
            lines[25],
            "|  12  ||       |       |       |       ||           |"
        );
    }

    #[test]
    fn every_line_has_board_width() {
        plain();
        let session = played("1234", &["1243", "5555"]);
        let board = TextBoard::new().render_board(session.history(), MAX_ATTEMPTS);
        for line in board.lines() {
            assert_eq!(line.chars().count(), BOARD_WIDTH + 2, "bad width: {line:?}");
        }
    }

    #[test]
    fn played_turns_show_guess_and_clues() {
        plain();
        let session = played("1234", &["1243", "bad", "5561"]);
        let board = TextBoard::new().render_board(session.history(), MAX_ATTEMPTS);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(
            lines[3],
            "|  1   ||   1   |   2   |   4   |   3   ||   ••••    |"
        );
        assert_eq!(
            lines[5],
            "|  2   ||   5   |   5   |   6   |   1   ||   •       |"
        );
        assert_eq!(
            lines[7],
            "|  3   ||       |       |       |       ||           |"
        );
    }

    #[test]
    fn full_board_has_no_blank_rows() {
        plain();
        let guesses = vec!["6666"; MAX_ATTEMPTS];
        let session = played("1234", &guesses);
        let board = TextBoard::new().render_board(session.history(), MAX_ATTEMPTS);
        assert!(!board.contains("|       |       |"));
    }

    #[test]
    fn code_row_shows_each_digit() {
        plain();
        let code = Code::parse("6213").unwrap();
        assert_eq!(
            TextBoard::new().render_code(&code),
            "|   6   |   2   |   1   |   3   |"
        );
    }
}
