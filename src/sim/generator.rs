//! Random but rule-valid games.
//!
//! Every sequence produced here is a complete ten-frame game: no frame
//! knocks down more than ten pins, and the tenth frame gets its fill
//! balls exactly when it opens with a strike or spare.

use serde::{Deserialize, Serialize};

use super::rng::{LaneRng, LaneRngState};
use crate::core::{Roll, PINS};
use crate::scoring::FRAMES_PER_GAME;

/// How a simulated bowler tends to play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BowlerProfile {
    /// Probability a first ball is a strike.
    pub strike_chance: f64,

    /// Probability a second ball converts the spare.
    pub spare_chance: f64,
}

impl Default for BowlerProfile {
    fn default() -> Self {
        Self {
            strike_chance: 0.2,
            spare_chance: 0.4,
        }
    }
}

impl BowlerProfile {
    /// Never strikes or spares.
    pub fn novice() -> Self {
        Self {
            strike_chance: 0.0,
            spare_chance: 0.0,
        }
    }

    /// Strikes every ball.
    pub fn perfect() -> Self {
        Self {
            strike_chance: 1.0,
            spare_chance: 1.0,
        }
    }

    #[must_use]
    pub fn with_strike_chance(mut self, chance: f64) -> Self {
        self.strike_chance = chance;
        self
    }

    #[must_use]
    pub fn with_spare_chance(mut self, chance: f64) -> Self {
        self.spare_chance = chance;
        self
    }

    fn first_ball(&self, rng: &mut LaneRng) -> u8 {
        if rng.gen_bool(self.strike_chance) {
            PINS
        } else {
            rng.knock_down_some(PINS)
        }
    }

    fn second_ball(&self, rng: &mut LaneRng, standing: u8) -> u8 {
        if rng.gen_bool(self.spare_chance) {
            standing
        } else {
            rng.knock_down_some(standing)
        }
    }
}

/// Bowl the game that `random_game` produced from an RNG in `state`.
///
/// Pair with `LaneRng::state` taken just before the original game was
/// bowled.
pub fn replay_game(state: &LaneRngState, profile: &BowlerProfile) -> Vec<Roll> {
    random_game(&mut LaneRng::from_state(state), profile)
}

/// Bowl one complete game.
pub fn random_game(rng: &mut LaneRng, profile: &BowlerProfile) -> Vec<Roll> {
    let mut pins = Vec::with_capacity(21);

    for _ in 0..FRAMES_PER_GAME - 1 {
        let first = profile.first_ball(rng);
        pins.push(first);
        if first < PINS {
            pins.push(profile.second_ball(rng, PINS - first));
        }
    }

    // Tenth frame: pins are reset after a strike or a spare.
    let first = profile.first_ball(rng);
    pins.push(first);
    if first == PINS {
        let second = profile.first_ball(rng);
        pins.push(second);
        let third = if second == PINS {
            profile.first_ball(rng)
        } else {
            profile.second_ball(rng, PINS - second)
        };
        pins.push(third);
    } else {
        let second = profile.second_ball(rng, PINS - first);
        pins.push(second);
        if first + second == PINS {
            pins.push(profile.first_ball(rng));
        }
    }

    pins.into_iter().map(Roll::new).collect()
}
