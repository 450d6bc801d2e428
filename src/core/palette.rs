//! Colour palette
//!
//! Each of the six legal digits is drawn as a coloured peg. The core only knows
//! the colour identity and its ANSI background code; renderers translate it to
//! their own colour types.

use super::Digit;

/// Display colour of a single peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegColor {
    Magenta,
    Cyan,
    Red,
    Blue,
    Green,
    Yellow,
}

impl PegColor {
    /// All colours in digit order (index 0 is digit 1)
    pub const ALL: [Self; 6] = [
        Self::Magenta,
        Self::Cyan,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
    ];

    /// Colour assigned to a digit
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Digit, PegColor};
    ///
    /// let digit = Digit::new(3).unwrap();
    /// assert_eq!(PegColor::from_digit(digit), PegColor::Red);
    /// ```
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self::ALL[(digit.value() - 1) as usize]
    }

    /// SGR background code used when colouring the peg in a plain terminal
    #[must_use]
    pub const fn ansi_background(self) -> u8 {
        match self {
            Self::Magenta => 45,
            Self::Cyan => 46,
            Self::Red => 41,
            Self::Blue => 44,
            Self::Green => 42,
            Self::Yellow => 43,
        }
    }

    /// Human readable colour name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}
