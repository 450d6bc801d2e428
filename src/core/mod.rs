//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: digits, codes, clues and
//! the colour palette. Everything here is pure and holds no session state.

mod clue;
mod code;
mod palette;

pub use clue::{ClueSet, ClueState, score};
pub use code::{CODE_LENGTH, Code, CodeError, Digit, PALETTE_SIZE, generate_secret};
pub use palette::PegColor;
