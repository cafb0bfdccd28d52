//! Whole games: completeness checking and scored results.
//!
//! This is the caller side of the scoring engine. `check_complete` enforces
//! the ten-frame shape before a total is trusted, and `ScoredGame` bundles
//! the frames with their scores for reporting.

pub mod completeness;
pub mod scored;

pub use completeness::{check_complete, is_complete};
pub use scored::ScoredGame;
