//! Frames: the 1-3 rolls that make up one turn at the lane.
//!
//! Strike and spare are derived from the rolls on demand rather than
//! stored, so a frame can never disagree with its own contents.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::BowlingError;
use super::roll::{Roll, PINS};

/// Most rolls a frame can hold (tenth frame with a strike or spare).
pub const MAX_FRAME_ROLLS: usize = 3;

/// How a frame is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// First ball cleared the pins: 10 + next two rolls.
    Strike,
    /// Two balls cleared the pins: 10 + next roll.
    Spare,
    /// Pins left standing: sum of the two rolls.
    Open,
}

/// One frame of a game.
///
/// Immutable after construction. Frames 1-9 hold one roll (strike) or two;
/// only the tenth frame ever holds three. Deserialization goes through the
/// same 1-3 roll check as `Frame::new`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FrameRepr")]
pub struct Frame {
    /// SmallVec keeps all three rolls inline, no heap allocation per frame.
    rolls: SmallVec<[Roll; MAX_FRAME_ROLLS]>,
}

impl Frame {
    /// Create a frame from 1-3 rolls.
    ///
    /// Panics on an empty slice or more than three rolls.
    #[must_use]
    pub fn new(rolls: &[Roll]) -> Self {
        assert!(!rolls.is_empty(), "A frame holds at least 1 roll");
        assert!(
            rolls.len() <= MAX_FRAME_ROLLS,
            "A frame holds at most 3 rolls"
        );

        Self {
            rolls: SmallVec::from_slice(rolls),
        }
    }

    /// Rolls in the order they were bowled.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Number of rolls in this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Always false for a constructed frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// First ball knocked down all ten pins.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.rolls.first().is_some_and(|r| r.is_strike())
    }

    /// Not a strike, and the first two balls together knocked down ten pins.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        self.rolls.len() >= 2
            && !self.is_strike()
            && self.first_roll_value() + self.second_roll_value() == i32::from(PINS)
    }

    /// Strike, spare or open.
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Value of the roll at `index`, or 0 if the frame has no such roll.
    #[must_use]
    pub fn roll_value(&self, index: usize) -> i32 {
        self.rolls.get(index).map_or(0, |r| r.value())
    }

    #[must_use]
    pub fn first_roll_value(&self) -> i32 {
        self.roll_value(0)
    }

    #[must_use]
    pub fn second_roll_value(&self) -> i32 {
        self.roll_value(1)
    }

    /// Fill ball of the tenth frame, or 0.
    #[must_use]
    pub fn third_roll_value(&self) -> i32 {
        self.roll_value(2)
    }

    /// Pins knocked down across every roll in the frame, bonuses excluded.
    #[must_use]
    pub fn pinfall(&self) -> i32 {
        self.rolls.iter().map(|r| r.value()).sum()
    }
}

/// Unchecked wire form of a frame.
#[derive(Deserialize)]
struct FrameRepr {
    rolls: Vec<Roll>,
}

impl TryFrom<FrameRepr> for Frame {
    type Error = BowlingError;

    fn try_from(repr: FrameRepr) -> Result<Self, Self::Error> {
        if (1..=MAX_FRAME_ROLLS).contains(&repr.rolls.len()) {
            Ok(Self {
                rolls: SmallVec::from_vec(repr.rolls),
            })
        } else {
            Err(BowlingError::InvalidFrame {
                rolls: repr.rolls.len(),
            })
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame([")?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", roll)?;
        }
        write!(f, "])")
    }
}
