//! The scoring engine: frame segmentation and score aggregation.
//!
//! Both halves are pure functions over borrowed slices:
//! - `build_frames`: rolls → frames (at most ten)
//! - `calculate_score`: frames → total, resolving strike and spare bonuses
//!   by looking forward only
//!
//! Neither validates its input. Use `game::check_complete` (or
//! `ScoredGame::from_rolls`) before trusting a total.

pub mod builder;
pub mod calculator;

pub use builder::build_frames;
pub use calculator::{calculate_score, frame_score, frame_scores, running_totals};

/// Frames in a game.
pub const FRAMES_PER_GAME: usize = 10;

/// Highest possible total (twelve strikes).
pub const PERFECT_SCORE: i32 = 300;
