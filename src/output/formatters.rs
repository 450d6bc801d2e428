//! Formatting utilities for terminal output

use crate::core::{ClueSet, Digit, PegColor};
use crate::game::MAX_ATTEMPTS;
use colored::{Color, Colorize};

/// Width of one guess cell, without borders
pub const PEG_CELL_WIDTH: usize = 7;

/// Width of the clue column, without borders
pub const CLUE_CELL_WIDTH: usize = 11;

/// Marker used for both kinds of clue; exact clues are drawn red
pub const CLUE_MARKER: &str = "•";

/// Map a peg colour onto the terminal palette
#[must_use]
pub const fn terminal_color(color: PegColor) -> Color {
    match color {
        PegColor::Magenta => Color::Magenta,
        PegColor::Cyan => Color::Cyan,
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::Blue,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
    }
}

/// A guess cell: the digit centred on its peg colour
#[must_use]
pub fn peg_cell(digit: Digit) -> String {
    format!("{:^width$}", digit.value(), width = PEG_CELL_WIDTH)
        .on_color(terminal_color(digit.color()))
        .bold()
        .to_string()
}

/// An empty guess cell for a turn not yet played
#[must_use]
pub fn blank_peg_cell() -> String {
    " ".repeat(PEG_CELL_WIDTH)
}

/// The turn number column
#[must_use]
pub fn turn_cell(turn: usize) -> String {
    format!("  {turn:<2}  ")
}

/// Clue markers for a guess, padded to the clue column
///
/// Exact clues come first in red, present clues follow uncoloured and absent
/// clues are left out.
#[must_use]
pub fn clue_cell(clues: &ClueSet) -> String {
    let exact = clues.exact_count();
    let present = clues.present_count();
    let trailing = CLUE_CELL_WIDTH.saturating_sub(3 + exact + present);

    format!(
        "   {}{}{}",
        CLUE_MARKER.repeat(exact).red(),
        CLUE_MARKER.repeat(present),
        " ".repeat(trailing)
    )
}

/// Welcome banner and rules shown at startup
#[must_use]
pub fn welcome_text() -> String {
    format!(
        "\n                         *** {title} ***\n\n\
         Mastermind is a code-breaking game for two players: you and the computer.\n\n\
         The code maker picks a secret code of four colours, each shown as a digit\n\
         from 1 to 6. The code breaker must find the code within {MAX_ATTEMPTS} attempts!\n\n\
         After each attempt, the code breaker is given clues as follows:\n\
         {exact} - the correct colour is in the right spot.\n\
         {CLUE_MARKER} - the correct colour is selected but it is in the wrong spot.\n",
        title = "Welcome to Mastermind!".underline(),
        exact = CLUE_MARKER.red(),
    )
}

/// Mode selection prompt
pub const MODE_PROMPT: &str =
    "Please enter '1' if you would like to be the code breaker or '2' if you would like to be the code maker";

/// Instructions printed once the secret has been set
#[must_use]
pub fn breaker_intro() -> String {
    format!(
        "When prompted, enter your guess as four digits representing the colours.\n\
         For example 1234, then press enter to log your guess and get your clues.\n\n\
         The secret code has been set, you now have {MAX_ATTEMPTS} attempts to break the code, good luck!\n"
    )
}

/// Per-turn guess prompt
#[must_use]
pub fn guess_prompt(turn: usize) -> String {
    format!("\nPlease enter guess number {turn}:")
}

/// Message shown for any malformed guess
pub const INVALID_GUESS: &str = "That guess is not valid, please try again";

/// Code-maker mode message
pub const MAKER_MESSAGE: &str = "Computer says: You're the code maker and I broke your code!!";

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn peg_cell_centres_digit() {
        plain();
        assert_eq!(peg_cell(digit(4)), "   4   ");
        assert_eq!(peg_cell(digit(4)).len(), PEG_CELL_WIDTH);
    }

    #[test]
    fn turn_cell_is_fixed_width() {
        assert_eq!(turn_cell(1), "  1   ");
        assert_eq!(turn_cell(12), "  12  ");
    }

    #[test]
    fn clue_cell_lists_exact_then_present() {
        plain();
        let secret = crate::core::Code::parse("1234").unwrap();
        let guess = crate::core::Code::parse("1243").unwrap();
        let cell = clue_cell(&ClueSet::calculate(&guess, &secret));
        assert_eq!(cell, "   ••••    ");
        assert_eq!(cell.chars().count(), CLUE_CELL_WIDTH);
    }

    #[test]
    fn clue_cell_empty_when_all_absent() {
        plain();
        let secret = crate::core::Code::parse("1234").unwrap();
        let guess = crate::core::Code::parse("5566").unwrap();
        assert_eq!(clue_cell(&ClueSet::calculate(&guess, &secret)), " ".repeat(11));
    }

    #[test]
    fn terminal_colours_follow_palette() {
        assert_eq!(terminal_color(digit(1).color()), Color::Magenta);
        assert_eq!(terminal_color(digit(6).color()), Color::Yellow);
    }

    #[test]
    fn guess_prompt_names_turn() {
        assert_eq!(guess_prompt(7), "\nPlease enter guess number 7:");
    }

    #[test]
    fn welcome_mentions_attempt_limit() {
        plain();
        assert!(welcome_text().contains("within 12 attempts"));
    }
}
