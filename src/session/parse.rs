//! Parsing a line of roll values.

use tracing::warn;

use crate::core::{BowlingError, Roll};

/// Result of parsing one input line.
///
/// Bad tokens do not abort the line: they are skipped and recorded so the
/// caller can report them, and the valid values keep their order.
#[derive(Debug, Default)]
pub struct ParsedRolls {
    /// Valid rolls in input order.
    pub rolls: Vec<Roll>,
    /// One `NotANumber` or `OutOfRangeRoll` per skipped token.
    pub rejected: Vec<BowlingError>,
}

impl ParsedRolls {
    /// True if every token was a valid roll.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Split `line` on whitespace and keep the tokens that are rolls.
///
/// ```
/// use bowling_score::session::parse_rolls;
///
/// let parsed = parse_rolls("10 4 x 11 5");
/// assert_eq!(parsed.rolls.len(), 3);
/// assert_eq!(parsed.rejected.len(), 2);
/// ```
pub fn parse_rolls(line: &str) -> ParsedRolls {
    let mut parsed = ParsedRolls::default();

    for token in line.split_whitespace() {
        let result = token
            .parse::<i64>()
            .map_err(|_| BowlingError::NotANumber {
                token: token.to_string(),
            })
            .and_then(Roll::try_from);

        match result {
            Ok(roll) => parsed.rolls.push(roll),
            Err(err) => {
                warn!(token, code = err.error_code(), "skipping input token");
                parsed.rejected.push(err);
            }
        }
    }

    parsed
}
