//! Core types: rolls, frames and boundary errors.
//!
//! Rolls and frames are immutable values. A game is just an ordered slice
//! of frames; nothing here holds state between scoring passes.

pub mod error;
pub mod frame;
pub mod roll;

pub use error::{BowlingError, BowlingResult};
pub use frame::{Frame, FrameKind, MAX_FRAME_ROLLS};
pub use roll::{rolls, Roll, PINS};
