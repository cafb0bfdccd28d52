//! Simulated games for tests, benchmarks and demos.

pub mod generator;
pub mod rng;

pub use generator::{random_game, replay_game, BowlerProfile};
pub use rng::{LaneRng, LaneRngState};
