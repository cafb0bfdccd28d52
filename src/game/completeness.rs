//! Is a frame list a finished game?
//!
//! Frame building accepts any roll sequence, so a short or malformed one
//! still produces frames and a total. This check decides whether that
//! total can be trusted.

use tracing::warn;

use crate::core::{BowlingError, BowlingResult, Frame};
use crate::scoring::FRAMES_PER_GAME;

/// Verify that `frames` form a complete game.
///
/// - Fewer than ten frames: `IncompleteGame`.
/// - Tenth frame opening with a strike or spare must hold 3 rolls,
///   otherwise exactly 2: `InvalidTenthFrame` if not.
pub fn check_complete(frames: &[Frame]) -> BowlingResult<()> {
    let Some(tenth) = frames.get(FRAMES_PER_GAME - 1) else {
        warn!(frames = frames.len(), "incomplete game");
        return Err(BowlingError::IncompleteGame {
            frames: frames.len(),
        });
    };

    let strike_or_spare = tenth.is_strike() || tenth.is_spare();
    let expected = if strike_or_spare { 3 } else { 2 };

    if tenth.len() != expected {
        warn!(
            rolls = tenth.len(),
            expected,
            frame = %tenth,
            "invalid tenth frame"
        );
        return Err(BowlingError::InvalidTenthFrame {
            rolls: tenth.len(),
            strike_or_spare,
        });
    }

    Ok(())
}

/// Convenience wrapper around `check_complete`.
pub fn is_complete(frames: &[Frame]) -> bool {
    check_complete(frames).is_ok()
}
