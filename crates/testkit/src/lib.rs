#![warn(missing_docs)]
//! Test doubles and determinism helpers shared by the workspace's tests.

mod digest;
mod generator;

pub use digest::*;
pub use generator::*;

use noel_luxe_core::{scene_rng, SceneSeed};
use rand::rngs::StdRng;

/// Seeded RNG, identical to what a `SceneSeed::Fixed(seed)` run draws from.
pub fn fixed_rng(seed: u64) -> StdRng {
    scene_rng(SceneSeed::Fixed(seed))
}
