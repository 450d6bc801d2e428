//! Mastermind
//!
//! A terminal Mastermind game: break a secret code of four colours, drawn from
//! six, within twelve attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{ClueState, Code, score};
//!
//! let secret = Code::parse("1234").unwrap();
//! let guess = Code::parse("1243").unwrap();
//!
//! let clues = score(&guess, &secret);
//! assert_eq!(clues.states()[0], ClueState::Exact);
//! assert_eq!(clues.present_count(), 2);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
