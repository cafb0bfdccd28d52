//! Frame segmentation.
//!
//! Walks the roll sequence once, left to right, cutting it into frames:
//! one roll for a strike, two for an open or spare frame, and three for
//! the tenth frame whenever three rolls remain.

use tracing::debug;

use super::FRAMES_PER_GAME;
use crate::core::{Frame, Roll};

/// Index of the tenth frame.
const TENTH_FRAME: usize = FRAMES_PER_GAME - 1;

/// Split a roll sequence into at most ten frames.
///
/// Never fails. Rolls are taken in order until ten frames exist or the
/// remaining rolls cannot start another frame; anything left over is
/// ignored. A short sequence yields a short frame list, and callers that
/// need a finished game must check it with `game::check_complete`.
///
/// The tenth frame takes three rolls whenever three remain, whatever the
/// first of them is. With fewer left it follows the ordinary rule, so a
/// tenth-frame strike missing a fill ball becomes a one-roll frame and
/// loses its bonus.
///
/// ```
/// use bowling_score::core::rolls;
/// use bowling_score::scoring::build_frames;
///
/// let frames = build_frames(&rolls(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]));
/// assert_eq!(frames.len(), 10);
/// assert_eq!(frames[9].to_string(), "Frame([10, 8, 1])");
/// ```
pub fn build_frames(rolls: &[Roll]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(FRAMES_PER_GAME);
    let mut i = 0;

    while frames.len() < FRAMES_PER_GAME && i < rolls.len() {
        let remaining = rolls.len() - i;

        let take = if frames.len() == TENTH_FRAME && remaining >= 3 {
            3
        } else if rolls[i].is_strike() {
            1
        } else if remaining >= 2 {
            2
        } else {
            // Lone non-strike roll: not enough to close a frame.
            break;
        };

        frames.push(Frame::new(&rolls[i..i + take]));
        i += take;
    }

    debug!(
        rolls = rolls.len(),
        consumed = i,
        frames = frames.len(),
        "built frames"
    );

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rolls;

    fn shapes(frames: &[Frame]) -> Vec<usize> {
        frames.iter().map(Frame::len).collect()
    }

    #[test]
    fn test_mixed_game_segmentation() {
        let frames = build_frames(&rolls(&[
            10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1,
        ]));

        assert_eq!(frames.len(), 10);
        assert_eq!(shapes(&frames), vec![1, 2, 2, 1, 2, 2, 2, 1, 1, 3]);
    }

    #[test]
    fn test_perfect_game_segmentation() {
        let frames = build_frames(&rolls(&[10; 12]));
        assert_eq!(shapes(&frames), vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 3]);
    }

    #[test]
    fn test_all_spares_segmentation() {
        let frames = build_frames(&rolls(&[5; 21]));
        assert_eq!(shapes(&frames), vec![2, 2, 2, 2, 2, 2, 2, 2, 2, 3]);
    }

    #[test]
    fn test_open_game_tenth_frame_has_two_rolls() {
        let frames = build_frames(&rolls(&[
            3, 4, 5, 2, 1, 1, 0, 6, 2, 3, 3, 3, 4, 2, 5, 1, 2, 1, 3, 4,
        ]));
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[9].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_frames(&[]).is_empty());
    }

    #[test]
    fn test_lone_non_strike_roll_produces_no_frame() {
        let frames = build_frames(&rolls(&[3, 4, 5]));
        assert_eq!(shapes(&frames), vec![2]);
    }

    #[test]
    fn test_trailing_strike_still_builds_frame() {
        let frames = build_frames(&rolls(&[3, 4, 10]));
        assert_eq!(shapes(&frames), vec![2, 1]);
        assert!(frames[1].is_strike());
    }

    #[test]
    fn test_tenth_frame_takes_three_even_when_open() {
        let mut pins = vec![1u8; 18];
        pins.extend([2, 3, 4]);
        let frames = build_frames(&rolls(&pins));

        assert_eq!(frames.len(), 10);
        assert_eq!(frames[9].len(), 3);
        assert!(!frames[9].is_strike() && !frames[9].is_spare());
    }

    #[test]
    fn test_tenth_frame_strike_with_two_remaining_takes_one_roll() {
        let mut pins = vec![1u8; 18];
        pins.extend([10, 10]);
        let frames = build_frames(&rolls(&pins));

        assert_eq!(frames.len(), 10);
        assert_eq!(frames[9].len(), 1);
        assert!(frames[9].is_strike());
    }

    #[test]
    fn test_tenth_frame_spare_with_two_remaining_is_two_roll_frame() {
        let mut pins = vec![1u8; 18];
        pins.extend([6, 4]);
        let frames = build_frames(&rolls(&pins));

        assert_eq!(frames.len(), 10);
        assert_eq!(frames[9].len(), 2);
        assert!(frames[9].is_spare());
    }

    #[test]
    fn test_tenth_frame_lone_strike() {
        let mut pins = vec![1u8; 18];
        pins.push(10);
        let frames = build_frames(&rolls(&pins));

        assert_eq!(frames.len(), 10);
        assert_eq!(frames[9].len(), 1);
    }

    #[test]
    fn test_surplus_rolls_ignored() {
        let frames = build_frames(&rolls(&[10; 20]));
        assert_eq!(frames.len(), 10);
        let used: usize = frames.iter().map(Frame::len).sum();
        assert_eq!(used, 12);
    }

    #[test]
    fn test_order_sensitive() {
        let a = build_frames(&rolls(&[10, 3, 4]));
        let b = build_frames(&rolls(&[3, 4, 10]));
        assert_ne!(a, b);
        assert_ne!(shapes(&a), shapes(&b));
    }
}
