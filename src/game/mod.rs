//! Game session state
//!
//! Owns the secret, the turn counter and the guess history for one game.

mod session;

pub use session::{
    GameResult, GameSession, GuessOutcome, HistoryEntry, MAX_ATTEMPTS, RejectReason, SessionState,
};
