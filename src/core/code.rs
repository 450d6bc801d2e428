//! Mastermind code representation
//!
//! A `Code` is an ordered sequence of four digits in `1..=6`. The same type is
//! used for the secret and for every guess.

use super::PegColor;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of positions in a code
pub const CODE_LENGTH: usize = 4;

/// Number of colours (digits `1..=PALETTE_SIZE`)
pub const PALETTE_SIZE: u8 = 6;

/// A single validated digit in `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` when `value` is outside `1..=6`
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= PALETTE_SIZE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric value (1-6)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the peg colour for this digit
    #[inline]
    #[must_use]
    pub const fn color(self) -> PegColor {
        PegColor::from_digit(self)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for guesses that are not a well-formed code
///
/// Every variant is the same "invalid format" outcome to the player; the
/// variants only exist so the reason can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit(char),
    OutOfRange(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "Code contains non-digit character {ch:?}"),
            Self::OutOfRange(value) => {
                write!(f, "Digit {value} is outside 1-{PALETTE_SIZE}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

/// An ordered four-digit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Digit; CODE_LENGTH]);

impl Code {
    /// Create a code from already validated digits
    #[inline]
    #[must_use]
    pub const fn new(digits: [Digit; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    /// Create a code from raw values, returning `None` if any is outside `1..=6`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// assert!(Code::from_values([1, 2, 3, 4]).is_some());
    /// assert!(Code::from_values([0, 2, 3, 4]).is_none());
    /// ```
    #[must_use]
    pub fn from_values(values: [u8; CODE_LENGTH]) -> Option<Self> {
        let mut digits = [Digit(1); CODE_LENGTH];
        for (slot, value) in digits.iter_mut().zip(values) {
            *slot = Digit::new(value)?;
        }
        Some(Self(digits))
    }

    /// Parse a guess typed by the player
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The input is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - Any digit is outside 1-6
    ///
    /// A single bad character rejects the whole guess.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::parse("1243").unwrap();
    /// assert_eq!(code.to_string(), "1243");
    ///
    /// assert!(Code::parse("12345").is_err());
    /// assert!(Code::parse("1270").is_err());
    /// assert!(Code::parse("12a4").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let len = input.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [Digit(1); CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(input.chars()) {
            if !ch.is_ascii_digit() {
                return Err(CodeError::NonDigit(ch));
            }
            let value = ch as u8 - b'0';
            *slot = Digit::new(value).ok_or(CodeError::OutOfRange(value))?;
        }

        Ok(Self(digits))
    }

    /// Draw a code with each digit independent and uniform over `1..=6`
    ///
    /// Repeated digits are allowed.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Digit(rng.random_range(1..=PALETTE_SIZE))))
    }

    /// Get the digits in position order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[Digit; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> Digit {
        self.0[position]
    }

    /// Check whether the digit occurs at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Generate a fresh secret code from a session-local random source
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Code {
    Code::generate(rng)
}
