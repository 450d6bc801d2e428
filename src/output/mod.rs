//! Terminal output formatting
//!
//! Board rendering and the fixed texts shown by the line-based game.

pub mod board;
pub mod formatters;

pub use board::{BoardRenderer, TextBoard};
