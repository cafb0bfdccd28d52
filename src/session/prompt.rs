//! Interactive input: prompt, parse, check, re-prompt.
//!
//! Generic over `BufRead`/`Write` so the loop runs the same against a
//! terminal and against in-memory buffers in tests.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::parse::parse_rolls;
use super::report::write_report;
use crate::config::SessionConfig;
use crate::core::{BowlingError, BowlingResult, Roll};
use crate::game::{check_complete, ScoredGame};
use crate::scoring::build_frames;

/// Read lines until one holds a complete game, and return its rolls.
///
/// Each attempt prints `config.prompt`, reads one line, reports any
/// skipped tokens, then checks that the remaining rolls form ten complete
/// frames. An incomplete game prints the reason and asks again.
///
/// Fails with `AttemptsExhausted` once `config.max_attempts` attempts have
/// failed (if non-zero), `EndOfInput` if the input closes first, and `Io`
/// on read or write errors.
pub fn read_valid_rolls<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &SessionConfig,
) -> BowlingResult<Vec<Roll>> {
    let mut failures = 0u32;
    let mut line = String::new();

    loop {
        if !config.allows_attempt(failures) {
            warn!(attempts = failures, "giving up on input");
            return Err(BowlingError::AttemptsExhausted { attempts: failures });
        }

        writeln!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(BowlingError::EndOfInput);
        }

        let parsed = parse_rolls(&line);
        for err in &parsed.rejected {
            writeln!(output, "{}", err)?;
        }

        let frames = build_frames(&parsed.rolls);
        match check_complete(&frames) {
            Ok(()) => {
                debug!(rolls = parsed.rolls.len(), attempt = failures + 1, "accepted input");
                return Ok(parsed.rolls);
            }
            Err(err) if err.is_incomplete_game() => {
                writeln!(output, "{}", err)?;
                failures += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Collect a complete game, score it and write the report.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &SessionConfig,
) -> BowlingResult<ScoredGame> {
    let rolls = read_valid_rolls(input, output, config)?;
    let game = ScoredGame::from_rolls(&rolls)?;
    info!(
        total = game.total(),
        strikes = game.strike_count(),
        spares = game.spare_count(),
        "game scored"
    );

    write_report(output, &game, config)?;
    Ok(game)
}
