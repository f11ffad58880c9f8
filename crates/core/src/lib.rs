#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod material;
pub mod placement;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use material::{MaterialPalette, MaterialSpec, Rgb, PALETTE};
pub use placement::Placement;

/// Where the decorative randomness for a generation run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneSeed {
    /// Fresh OS entropy; every run differs.
    #[default]
    Entropy,
    /// Reproducible stream for tests and stable captures.
    Fixed(u64),
}

impl SceneSeed {
    /// The fixed seed, if any.
    pub fn fixed(self) -> Option<u64> {
        match self {
            SceneSeed::Entropy => None,
            SceneSeed::Fixed(seed) => Some(seed),
        }
    }
}

impl From<Option<u64>> for SceneSeed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SceneSeed::Entropy, SceneSeed::Fixed)
    }
}

/// Build the RNG a generation run should draw from.
pub fn scene_rng(seed: SceneSeed) -> StdRng {
    match seed {
        SceneSeed::Entropy => StdRng::from_entropy(),
        SceneSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
    }
}
