//! Score aggregation.
//!
//! Each frame is scored in index order. Strikes and spares borrow pinfall
//! from rolls that come after them: first from later frames, and for the
//! tenth frame from its own fill balls.

use tracing::debug;

use crate::core::{Frame, FrameKind, PINS};

/// Bonus rolls owed by a strike.
const STRIKE_BONUS_ROLLS: usize = 2;

/// Total score of a frame sequence.
///
/// Pure: the same frames always produce the same total. No clamping is
/// applied, so a total outside `0..=300` means the frames did not come from
/// a valid game.
///
/// ```
/// use bowling_score::core::rolls;
/// use bowling_score::scoring::{build_frames, calculate_score};
///
/// let frames = build_frames(&rolls(&[10; 12]));
/// assert_eq!(calculate_score(&frames), 300);
/// ```
pub fn calculate_score(frames: &[Frame]) -> i32 {
    let total: i32 = (0..frames.len()).map(|i| frame_score(frames, i)).sum();
    debug!(frames = frames.len(), total, "calculated score");
    total
}

/// Contribution of each frame to the total, bonuses included.
pub fn frame_scores(frames: &[Frame]) -> Vec<i32> {
    (0..frames.len()).map(|i| frame_score(frames, i)).collect()
}

/// Cumulative total after each frame, as written on a scoresheet.
pub fn running_totals(frames: &[Frame]) -> Vec<i32> {
    frame_scores(frames)
        .into_iter()
        .scan(0, |total, score| {
            *total += score;
            Some(*total)
        })
        .collect()
}

/// Score of the frame at `current`, looking only forward.
///
/// Panics if `current` is out of bounds.
pub fn frame_score(frames: &[Frame], current: usize) -> i32 {
    let frame = &frames[current];
    match frame.kind() {
        FrameKind::Strike => i32::from(PINS) + strike_bonus(frames, current),
        FrameKind::Spare => i32::from(PINS) + spare_bonus(frames, current),
        FrameKind::Open => frame.first_roll_value() + frame.second_roll_value(),
    }
}

/// Sum of the next two rolls after the strike at `current`.
///
/// Rolls from later frames come first. If the game ends before two are
/// found, the strike frame's own rolls after its first fill the gap.
fn strike_bonus(frames: &[Frame], current: usize) -> i32 {
    let following = frames[current + 1..]
        .iter()
        .flat_map(|f| f.rolls().iter());
    let own_fill = frames[current].rolls().iter().skip(1);

    following
        .chain(own_fill)
        .take(STRIKE_BONUS_ROLLS)
        .map(|r| r.value())
        .sum()
}

/// The roll after the spare at `current`.
///
/// First roll of the next frame, or the frame's own third roll when it is
/// the last one, or 0.
fn spare_bonus(frames: &[Frame], current: usize) -> i32 {
    match frames.get(current + 1) {
        Some(next) => next.first_roll_value(),
        None => frames[current].third_roll_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rolls;
    use crate::scoring::build_frames;

    fn score(pins: &[u8]) -> i32 {
        calculate_score(&build_frames(&rolls(pins)))
    }

    #[test]
    fn test_perfect_game() {
        assert_eq!(score(&[10; 12]), 300);
    }

    #[test]
    fn test_all_spares() {
        assert_eq!(score(&[5; 21]), 150);
    }

    #[test]
    fn test_no_strikes_or_spares() {
        assert_eq!(
            score(&[3, 4, 5, 2, 1, 1, 0, 6, 2, 3, 3, 3, 4, 2, 5, 1, 2, 1, 3, 4]),
            55
        );
    }

    #[test]
    fn test_typical_game() {
        assert_eq!(
            score(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]),
            167
        );
    }

    #[test]
    fn test_gutter_game() {
        assert_eq!(score(&[0; 20]), 0);
    }

    #[test]
    fn test_typical_game_frame_scores() {
        let frames = build_frames(&rolls(&[
            10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1,
        ]));

        assert_eq!(
            frame_scores(&frames),
            vec![20, 19, 9, 18, 8, 10, 6, 30, 28, 19]
        );
        assert_eq!(
            running_totals(&frames),
            vec![20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
        );
    }

    #[test]
    fn test_strike_bonus_spans_two_frames() {
        // Strike, strike, then 4: first strike collects 10 + 4.
        let frames = build_frames(&rolls(&[10, 10, 4, 2]));
        assert_eq!(frame_score(&frames, 0), 24);
        assert_eq!(frame_score(&frames, 1), 16);
        assert_eq!(frame_score(&frames, 2), 6);
    }

    #[test]
    fn test_tenth_frame_strike_uses_own_fill_balls() {
        let mut pins = vec![0u8; 18];
        pins.extend([10, 7, 2]);
        let frames = build_frames(&rolls(&pins));
        assert_eq!(frame_score(&frames, 9), 19);
        assert_eq!(calculate_score(&frames), 19);
    }

    #[test]
    fn test_tenth_frame_spare_uses_third_roll() {
        let mut pins = vec![0u8; 18];
        pins.extend([6, 4, 7]);
        let frames = build_frames(&rolls(&pins));
        assert_eq!(frame_score(&frames, 9), 17);
    }

    #[test]
    fn test_ninth_frame_strike_reads_into_tenth() {
        let mut pins = vec![0u8; 16];
        pins.extend([10, 3, 7, 5]);
        let frames = build_frames(&rolls(&pins));
        assert_eq!(frames.len(), 10);
        assert_eq!(frame_score(&frames, 8), 20);
        assert_eq!(frame_score(&frames, 9), 15);
    }

    #[test]
    fn test_open_tenth_frame_ignores_third_roll() {
        let mut pins = vec![0u8; 18];
        pins.extend([2, 3, 4]);
        let frames = build_frames(&rolls(&pins));
        assert_eq!(calculate_score(&frames), 5);
    }

    #[test]
    fn test_truncated_strike_bonus() {
        // A final strike with no rolls after it scores just its own ten.
        assert_eq!(score(&[10]), 10);
        assert_eq!(score(&[10, 10]), 30);
    }

    #[test]
    fn test_trailing_spare_without_bonus() {
        assert_eq!(score(&[6, 4]), 10);
    }

    #[test]
    fn test_tenth_frame_strike_with_only_two_rolls() {
        // The strike closes the frame alone; the second 10 is never scored.
        let mut pins = vec![0u8; 18];
        pins.extend([10, 10]);
        assert_eq!(score(&pins), 10);
    }

    #[test]
    fn test_idempotent() {
        let frames = build_frames(&rolls(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]));
        assert_eq!(calculate_score(&frames), calculate_score(&frames));
    }

    #[test]
    fn test_empty_frames() {
        assert_eq!(calculate_score(&[]), 0);
        assert!(frame_scores(&[]).is_empty());
        assert!(running_totals(&[]).is_empty());
    }
}
