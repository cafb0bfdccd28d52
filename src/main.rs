//! Bowling score calculator.
//!
//! Reads a game's rolls from stdin (or the command line), checks it is a
//! complete ten-frame game and prints the frame table and total.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use bowling_score::{
    parse_rolls, random_game, replay_game, run_session, write_report, BowlerProfile, LaneRng,
    LaneRngState, ReportFormat, ScoredGame, SessionConfig,
};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Score a ten-pin bowling game
#[derive(Parser, Debug)]
#[command(name = "bowling")]
#[command(about = "Ten-pin bowling score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Space-separated roll values; prompts on stdin when omitted
    #[arg(long, conflicts_with_all = ["random", "replay"])]
    rolls: Option<String>,

    /// Score a generated game from this seed; prints its replay state to stderr
    #[arg(long, conflicts_with = "replay")]
    random: Option<u64>,

    /// Re-bowl a generated game from the JSON state printed by --random
    #[arg(long)]
    replay: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Show the running total after each frame
    #[arg(long)]
    running_totals: bool,

    /// Stop after this many rejected games (0 = keep asking)
    #[arg(long, default_value_t = 0)]
    max_attempts: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SessionConfig::default()
        .with_format(cli.format.into())
        .with_running_totals(cli.running_totals)
        .with_max_attempts(cli.max_attempts);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(line) = cli.rolls.as_deref() {
        let parsed = parse_rolls(line);
        if let Some(err) = parsed.rejected.into_iter().next() {
            return Err(err).context("invalid --rolls value");
        }
        let game = ScoredGame::from_rolls(&parsed.rolls).context("--rolls is not a complete game")?;
        report(&mut out, &game, &config)?;
    } else if let Some(seed) = cli.random {
        let mut rng = LaneRng::new(seed);
        let state = serde_json::to_string(&rng.state())?;
        eprintln!("replay state: {state}");

        let rolls = random_game(&mut rng, &BowlerProfile::default());
        let game = ScoredGame::from_rolls(&rolls).context("generated game is incomplete")?;
        info!(seed, rolls = rolls.len(), "generated game");
        report(&mut out, &game, &config)?;
    } else if let Some(state) = cli.replay.as_deref() {
        let state: LaneRngState =
            serde_json::from_str(state).context("invalid --replay state")?;
        let rolls = replay_game(&state, &BowlerProfile::default());
        let game = ScoredGame::from_rolls(&rolls).context("replayed game is incomplete")?;
        info!(seed = state.seed, rolls = rolls.len(), "replayed game");
        report(&mut out, &game, &config)?;
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        run_session(&mut input, &mut out, &config).context("failed to read a complete game")?;
    }

    out.flush()?;
    Ok(())
}

fn report<W: Write>(out: &mut W, game: &ScoredGame, config: &SessionConfig) -> Result<()> {
    info!(total = game.total(), "game scored");
    write_report(out, game, config)?;
    Ok(())
}
