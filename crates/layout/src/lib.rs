#![warn(missing_docs)]
//! Procedural ornament layouts for the holiday tree scene.
//!
//! Everything here produces plain [`Placement`] data for an instanced
//! renderer. Generators that need randomness take any [`rand::Rng`], so a
//! seeded source gives reproducible output.

pub mod category;
pub mod garland;
pub mod gifts;
pub mod scene;
pub mod sparkles;
pub mod star;
pub mod tree;
pub mod trunk;

pub use category::{classify, CategoryBin, OrnamentCategory, ScaleTransform, CATEGORY_TABLE};
pub use garland::{generate_garlands, is_droplet, GarlandBead, GarlandPair, GarlandParams};
pub use gifts::{default_gifts, GiftBox};
pub use noel_luxe_core::{Placement, SceneSeed};
pub use scene::{GarlandShape, SceneLayout, SceneParams};
pub use sparkles::SparkleField;
pub use star::{StarLayout, StarShape};
pub use tree::{generate_tree_body, OrnamentLayout, TreeBodyParams};
pub use trunk::TrunkStand;
