//! The console collaborator around the scoring engine.
//!
//! - `parse_rolls`: one line of text → valid rolls + rejected tokens
//! - `read_valid_rolls`: prompt until a complete game is entered
//! - `write_report`: frame table and total, as text or JSON
//! - `run_session`: all three, in order

pub mod parse;
pub mod prompt;
pub mod report;

pub use parse::{parse_rolls, ParsedRolls};
pub use prompt::{read_valid_rolls, run_session};
pub use report::write_report;
