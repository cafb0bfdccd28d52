//! A checked, fully scored game.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::completeness::check_complete;
use crate::core::{BowlingResult, Frame, Roll};
use crate::scoring::{build_frames, frame_scores};

/// Frames, per-frame scores and total of one complete game.
///
/// Built once from a roll sequence and never modified; different rolls
/// mean a new `ScoredGame`. Only the frames are read back when
/// deserializing; scores are always recomputed from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScoredGameRepr")]
pub struct ScoredGame {
    frames: Vec<Frame>,
    frame_scores: Vec<i32>,
    total: i32,
}

impl ScoredGame {
    /// Build frames, check the game is complete, then score it.
    ///
    /// ```
    /// use bowling_score::core::rolls;
    /// use bowling_score::game::ScoredGame;
    ///
    /// let game = ScoredGame::from_rolls(&rolls(&[5; 21])).unwrap();
    /// assert_eq!(game.total(), 150);
    ///
    /// assert!(ScoredGame::from_rolls(&rolls(&[5; 20])).is_err());
    /// ```
    pub fn from_rolls(rolls: &[Roll]) -> BowlingResult<Self> {
        let frames = build_frames(rolls);
        check_complete(&frames)?;
        Ok(Self::score_unchecked(frames))
    }

    /// Score frames without the completeness check.
    ///
    /// The total of an incomplete game is meaningless as a final score but
    /// is still useful as a partial scoresheet.
    pub fn score_unchecked(frames: Vec<Frame>) -> Self {
        let frame_scores = frame_scores(&frames);
        let total: i32 = frame_scores.iter().sum();
        debug!(frames = frames.len(), total, "scored game");

        Self {
            frames,
            frame_scores,
            total,
        }
    }

    /// Frames in play order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Contribution of each frame, bonuses included.
    #[must_use]
    pub fn frame_scores(&self) -> &[i32] {
        &self.frame_scores
    }

    /// Cumulative total after each frame.
    pub fn running_totals(&self) -> impl Iterator<Item = i32> + '_ {
        self.frame_scores.iter().scan(0, |total, score| {
            *total += score;
            Some(*total)
        })
    }

    /// Final score.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Strikes bowled, fill balls excluded.
    #[must_use]
    pub fn strike_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_strike()).count()
    }

    /// Spares converted.
    #[must_use]
    pub fn spare_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_spare()).count()
    }
}

/// Wire form of a scored game. Stored scores are ignored.
#[derive(Deserialize)]
struct ScoredGameRepr {
    frames: Vec<Frame>,
}

impl From<ScoredGameRepr> for ScoredGame {
    fn from(repr: ScoredGameRepr) -> Self {
        Self::score_unchecked(repr.frames)
    }
}
