//! Code-breaker session
//!
//! Coordinates one game: validates each raw guess, scores it against the
//! secret and records it until the code is broken or the attempts run out.

use crate::core::{ClueSet, Code, CodeError, generate_secret};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Number of accepted guesses allowed per game
pub const MAX_ATTEMPTS: usize = 12;

/// One accepted guess and its clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub turn: usize,
    pub guess: Code,
    pub clues: ClueSet,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Won,
    Lost,
}

/// Final outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Broken on the given turn
    Won(usize),
    Lost,
}

/// Why a submitted guess was not recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    InvalidFormat(CodeError),
    GameOver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(err) => write!(f, "Invalid guess: {err}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for RejectReason {}

/// Result of submitting a raw guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Accepted { turn: usize, clues: ClueSet },
    Rejected(RejectReason),
}

/// A single code-breaker game
///
/// The secret is fixed at construction. Only accepted guesses advance the
/// turn counter; rejected input leaves the session untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Code,
    turn: usize,
    history: Vec<HistoryEntry>,
    solved: bool,
}

impl GameSession {
    /// Start a session with a secret drawn from `rng`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let session = Self::with_secret(generate_secret(rng));
        info!(max_attempts = MAX_ATTEMPTS, "secret code has been set");
        session
    }

    /// Start a session with a known secret
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            turn: 1,
            history: Vec::new(),
            solved: false,
        }
    }

    /// Validate, score and record a raw guess
    ///
    /// Invalid input or a finished game yields `Rejected` and changes nothing.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::game::{GameResult, GameSession, GuessOutcome};
    ///
    /// let mut session = GameSession::with_secret(Code::parse("1234").unwrap());
    ///
    /// assert!(matches!(session.submit_guess("12"), GuessOutcome::Rejected(_)));
    /// assert_eq!(session.turn(), 1);
    ///
    /// assert!(matches!(session.submit_guess("1234"), GuessOutcome::Accepted { turn: 1, .. }));
    /// assert_eq!(session.result(), Some(GameResult::Won(1)));
    /// ```
    pub fn submit_guess(&mut self, raw_input: &str) -> GuessOutcome {
        if self.is_terminal() {
            debug!(input = raw_input, "guess submitted after game over");
            return GuessOutcome::Rejected(RejectReason::GameOver);
        }

        let guess = match Code::parse(raw_input) {
            Ok(code) => code,
            Err(err) => {
                debug!(input = raw_input, turn = self.turn, reason = %err, "guess rejected");
                return GuessOutcome::Rejected(RejectReason::InvalidFormat(err));
            }
        };

        let turn = self.turn;
        let clues = ClueSet::calculate(&guess, &self.secret);
        self.history.push(HistoryEntry { turn, guess, clues });
        self.turn += 1;
        self.solved = guess == self.secret;

        debug!(
            turn,
            %guess,
            exact = clues.exact_count(),
            present = clues.present_count(),
            "guess accepted"
        );

        match self.result() {
            Some(GameResult::Won(turns)) => info!(turns, "code broken"),
            Some(GameResult::Lost) => info!(secret = %self.secret, "out of attempts"),
            None => {}
        }

        GuessOutcome::Accepted { turn, clues }
    }

    /// Check if the game has finished
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.solved || self.turn > MAX_ATTEMPTS
    }

    /// Get the final result, or `None` while guesses are still expected
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.solved {
            Some(GameResult::Won(self.history.len()))
        } else if self.turn > MAX_ATTEMPTS {
            Some(GameResult::Lost)
        } else {
            None
        }
    }

    /// Get the lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.result() {
            None => SessionState::AwaitingGuess,
            Some(GameResult::Won(_)) => SessionState::Won,
            Some(GameResult::Lost) => SessionState::Lost,
        }
    }

    /// Get the number of the turn awaiting a guess (starts at 1)
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Get accepted guesses in turn order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Get the secret code
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Number of guesses still available
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }
}
