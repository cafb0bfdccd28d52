//! # bowling-score
//!
//! Ten-pin bowling score calculation from a flat sequence of rolls.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Frame building and scoring are functions over borrowed
//!    slices. No I/O, no shared state, no errors.
//!
//! 2. **Derived, Not Stored**: Strike and spare are computed from a frame's
//!    rolls, never kept as flags that could drift.
//!
//! 3. **Validate at the Edge**: Range checks and the ten-frame completeness
//!    check live with the caller (`session`, `game`), not in the scorer.
//!
//! ## Scoring
//!
//! ```
//! use bowling_score::core::rolls;
//! use bowling_score::scoring::{build_frames, calculate_score};
//!
//! let frames = build_frames(&rolls(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]));
//! assert_eq!(frames.len(), 10);
//! assert_eq!(calculate_score(&frames), 167);
//! ```
//!
//! ## Modules
//!
//! - `core`: Rolls, frames, boundary errors
//! - `scoring`: Frame segmentation and score aggregation
//! - `game`: Completeness check and scored games
//! - `session`: Console input parsing, re-prompting and reports
//! - `sim`: Seeded random games for tests and benchmarks
//! - `config`: Session configuration

pub mod config;
pub mod core;
pub mod game;
pub mod scoring;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{rolls, BowlingError, BowlingResult, Frame, FrameKind, Roll};

pub use crate::scoring::{
    build_frames, calculate_score, frame_scores, running_totals, FRAMES_PER_GAME, PERFECT_SCORE,
};

pub use crate::game::{check_complete, is_complete, ScoredGame};

pub use crate::session::{parse_rolls, read_valid_rolls, run_session, write_report, ParsedRolls};

pub use crate::config::{ReportFormat, SessionConfig};

pub use crate::sim::{random_game, replay_game, BowlerProfile, LaneRng, LaneRngState};
