//! Line-based game
//!
//! The classic flow: banner, mode prompt, then one guess per line until the
//! code is broken or the attempts run out. Input and output are injected so
//! the whole game can be driven from memory.

use crate::game::{GameResult, GameSession, GuessOutcome, MAX_ATTEMPTS, RejectReason};
use crate::output::formatters::{
    INVALID_GUESS, MAKER_MESSAGE, MODE_PROMPT, breaker_intro, guess_prompt, welcome_text,
};
use crate::output::{BoardRenderer, TextBoard};
use anyhow::{Result, bail};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Which side of the table the player takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Breaker,
    Maker,
}

impl Mode {
    /// Interpret the mode selector: `1` is code breaker, anything else code maker
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == "1" {
            Self::Breaker
        } else {
            Self::Maker
        }
    }
}

/// Options for the line-based game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Mode chosen up front; prompt for it when `None`
    pub mode: Option<Mode>,
    /// Show the secret before the first guess
    pub reveal_secret: bool,
}

/// Run the line-based game from banner to finish
///
/// Returns the result of the code-breaker game, or `None` in code-maker mode.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the input
/// ends before the game does.
pub fn run_play<R, W, G>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
    config: PlayConfig,
) -> Result<Option<GameResult>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    write!(output, "{}", welcome_text())?;

    let mode = match config.mode {
        Some(mode) => mode,
        None => {
            writeln!(output, "{MODE_PROMPT}")?;
            let selector = read_line(input, output)?;
            writeln!(output)?;
            Mode::from_selector(&selector)
        }
    };
    info!(?mode, "mode selected");

    match mode {
        Mode::Maker => {
            run_maker(output)?;
            Ok(None)
        }
        Mode::Breaker => {
            let mut session = GameSession::new(rng);
            run_breaker(&mut session, input, output, &TextBoard::new(), config.reveal_secret)
                .map(Some)
        }
    }
}

/// Code-maker mode: the computer claims victory and the game ends
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_maker<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{MAKER_MESSAGE}")?;
    Ok(())
}

/// Play a code-breaker session to the end
///
/// Malformed guesses are reported and asked for again without using an attempt.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the input
/// ends before the game does.
pub fn run_breaker<R, W, B>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
    renderer: &B,
    reveal_secret: bool,
) -> Result<GameResult>
where
    R: BufRead,
    W: Write,
    B: BoardRenderer + ?Sized,
{
    writeln!(output, "{}", breaker_intro())?;
    if reveal_secret {
        writeln!(output, "{}", renderer.render_code(session.secret()))?;
    }

    loop {
        if let Some(result) = session.result() {
            write_result(output, renderer, session, result)?;
            return Ok(result);
        }

        writeln!(output, "{}", guess_prompt(session.turn()))?;
        let guess = read_line(input, output)?;
        writeln!(output)?;

        match session.submit_guess(&guess) {
            GuessOutcome::Accepted { turn, clues } => {
                debug!(turn, exact = clues.exact_count(), "turn played");
            }
            GuessOutcome::Rejected(RejectReason::InvalidFormat(_)) => {
                writeln!(output, "{INVALID_GUESS}")?;
            }
            GuessOutcome::Rejected(RejectReason::GameOver) => {}
        }

        writeln!(
            output,
            "{}",
            renderer.render_board(session.history(), MAX_ATTEMPTS)
        )?;
    }
}

fn write_result<W, B>(
    output: &mut W,
    renderer: &B,
    session: &GameSession,
    result: GameResult,
) -> Result<()>
where
    W: Write,
    B: BoardRenderer + ?Sized,
{
    match result {
        GameResult::Won(turns) => {
            let noun = if turns == 1 { "turn" } else { "turns" };
            writeln!(output, "\nYou broke the code in {turns} {noun}!")?;
        }
        GameResult::Lost => {
            writeln!(output, "\nOut of attempts! The secret code was:")?;
            writeln!(output, "{}", renderer.render_code(session.secret()))?;
        }
    }
    Ok(())
}

/// Read one line, without its line terminator
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the game finished");
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}
