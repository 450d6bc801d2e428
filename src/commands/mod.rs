//! Command implementations

pub mod play;

pub use play::{Mode, PlayConfig, run_breaker, run_maker, run_play};
