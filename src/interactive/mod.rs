//! Interactive TUI interface
//!
//! Full-screen code-breaker game built on ratatui.

pub mod app;
mod rendering;

pub use app::{App, run_tui};
