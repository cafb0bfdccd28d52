//! Rendering a scored game.

use std::io::Write;

use serde::Serialize;

use crate::config::{ReportFormat, SessionConfig};
use crate::core::{BowlingResult, Frame};
use crate::game::ScoredGame;

/// JSON shape of a report.
#[derive(Serialize)]
struct JsonReport<'a> {
    frames: &'a [Frame],
    frame_scores: &'a [i32],
    running_totals: Vec<i32>,
    total: i32,
}

/// Write the frame table and total for `game`.
///
/// Text output:
///
/// ```text
///
/// *** Frame Table Score ***
/// Frame 1: Frame([10])
/// ...
/// Total Score: 167
/// ```
pub fn write_report<W: Write>(
    output: &mut W,
    game: &ScoredGame,
    config: &SessionConfig,
) -> BowlingResult<()> {
    match config.format {
        ReportFormat::Text => write_text(output, game, config.show_running_totals),
        ReportFormat::Json => write_json(output, game),
    }
}

fn write_text<W: Write>(
    output: &mut W,
    game: &ScoredGame,
    show_running_totals: bool,
) -> BowlingResult<()> {
    writeln!(output)?;
    writeln!(output, "*** Frame Table Score ***")?;

    for ((i, frame), running) in game.frames().iter().enumerate().zip(game.running_totals()) {
        if show_running_totals {
            writeln!(output, "Frame {}: {} -> {}", i + 1, frame, running)?;
        } else {
            writeln!(output, "Frame {}: {}", i + 1, frame)?;
        }
    }

    writeln!(output, "Total Score: {}", game.total())?;
    Ok(())
}

fn write_json<W: Write>(output: &mut W, game: &ScoredGame) -> BowlingResult<()> {
    let report = JsonReport {
        frames: game.frames(),
        frame_scores: game.frame_scores(),
        running_totals: game.running_totals().collect(),
        total: game.total(),
    };

    serde_json::to_writer_pretty(&mut *output, &report)?;
    writeln!(output)?;
    Ok(())
}
