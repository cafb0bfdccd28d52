//! Single-roll pinfall value.
//!
//! A `Roll` is the number of pins knocked down by one ball, always in
//! `0..=10`. Construction from untrusted input goes through
//! `TryFrom<i64>`, which is where out-of-range values are rejected.

use serde::{Deserialize, Serialize};

use super::error::BowlingError;

/// Pins standing at the start of a frame.
pub const PINS: u8 = 10;

/// Number of pins knocked down by a single ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Roll(u8);

impl Roll {
    /// A roll that knocks down every pin.
    pub const STRIKE: Roll = Roll(PINS);

    /// A roll that knocks down nothing.
    pub const GUTTER: Roll = Roll(0);

    /// Create a roll from a known-good pin count.
    ///
    /// Panics if `pins > 10`. Use `Roll::try_from` for unvalidated input.
    #[must_use]
    pub const fn new(pins: u8) -> Self {
        assert!(pins <= PINS, "A roll knocks down at most 10 pins");
        Self(pins)
    }

    /// Pins knocked down.
    #[must_use]
    pub const fn pins(self) -> u8 {
        self.0
    }

    /// Pinfall as a score value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0 as i32
    }

    /// Did this ball clear all ten pins?
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.0 == PINS
    }
}

impl TryFrom<i64> for Roll {
    type Error = BowlingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(pins) if pins <= PINS => Ok(Self(pins)),
            _ => Err(BowlingError::OutOfRangeRoll { value }),
        }
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert raw pin counts into rolls, panicking on values above 10.
///
/// Intended for literals in tests and examples:
///
/// ```
/// use bowling_score::core::rolls;
///
/// let game = rolls(&[10, 7, 3]);
/// assert_eq!(game.len(), 3);
/// assert!(game[0].is_strike());
/// ```
#[must_use]
pub fn rolls(pins: &[u8]) -> Vec<Roll> {
    pins.iter().copied().map(Roll::new).collect()
}
