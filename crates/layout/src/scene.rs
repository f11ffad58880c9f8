//! Whole-scene assembly.

use noel_luxe_core::{scene_rng, SceneSeed};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::garland::{generate_garlands, GarlandPair, GarlandParams};
use crate::gifts::{default_gifts, GiftBox};
use crate::sparkles::SparkleField;
use crate::star::{StarLayout, StarShape};
use crate::tree::{generate_tree_body, OrnamentLayout, TreeBodyParams};
use crate::trunk::TrunkStand;

/// Garland settings that do not come from the tree body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarlandShape {
    /// Beads per strand.
    pub point_count: u32,
    /// Full turns from bottom to top.
    pub wrap_count: f32,
}

impl Default for GarlandShape {
    fn default() -> Self {
        Self {
            point_count: 180,
            wrap_count: 4.5,
        }
    }
}

/// Everything needed to generate a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    /// Tree body cone.
    pub tree: TreeBodyParams,
    /// Garland density and winding.
    pub garland: GarlandShape,
    /// Tree-top star.
    pub star: StarShape,
    /// Randomness source.
    pub seed: SceneSeed,
}

impl SceneParams {
    /// Garland parameters wrapped around this tree body.
    pub fn garland_params(&self) -> GarlandParams {
        GarlandParams::for_tree(
            &self.tree,
            self.garland.point_count,
            self.garland.wrap_count,
        )
    }

    /// RNG for the configured seed.
    pub fn rng(&self) -> StdRng {
        scene_rng(self.seed)
    }
}

/// Generated scene data handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    /// Seed used, when reproducible.
    pub seed: Option<u64>,
    /// Tree-body ornaments by category.
    pub ornaments: OrnamentLayout,
    /// Twin garlands.
    pub garlands: GarlandPair,
    /// Star silhouette, halo and outline.
    pub star: StarLayout,
    /// Stand under the tree.
    pub trunk: TrunkStand,
    /// Gifts under the tree.
    pub gifts: Vec<GiftBox>,
    /// Gold dust around the tree.
    pub sparkles: SparkleField,
}

impl SceneLayout {
    /// Generate with the RNG implied by `params.seed`.
    pub fn from_params(params: &SceneParams) -> Self {
        let mut rng = params.rng();
        Self::generate(params, &mut rng)
    }

    /// Generate with a caller-supplied RNG.
    pub fn generate<R: Rng + ?Sized>(params: &SceneParams, rng: &mut R) -> Self {
        let ornaments = generate_tree_body(&params.tree, rng);
        let garlands = generate_garlands(&params.garland_params());
        debug!(
            ornaments = ornaments.len(),
            beads = garlands.len(),
            seed = ?params.seed,
            "Generated scene layout"
        );
        Self {
            seed: params.seed.fixed(),
            ornaments,
            garlands,
            star: StarLayout::from(params.star),
            trunk: TrunkStand::default(),
            gifts: default_gifts(),
            sparkles: SparkleField::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_is_reproducible() {
        let params = SceneParams {
            seed: SceneSeed::Fixed(17),
            ..Default::default()
        };
        let a = SceneLayout::from_params(&params);
        let b = SceneLayout::from_params(&params);
        assert_eq!(a, b);
        assert_eq!(a.seed, Some(17));
    }

    #[test]
    fn different_seeds_differ() {
        let a = SceneLayout::from_params(&SceneParams {
            seed: SceneSeed::Fixed(1),
            ..Default::default()
        });
        let b = SceneLayout::from_params(&SceneParams {
            seed: SceneSeed::Fixed(2),
            ..Default::default()
        });
        assert_ne!(a.ornaments, b.ornaments);
        assert_eq!(a.garlands, b.garlands);
    }

    #[test]
    fn garland_follows_tree_dimensions() {
        let mut params = SceneParams::default();
        params.tree.base_radius = 3.0;
        params.tree.height = 6.0;
        params.garland.point_count = 10;
        let garland = params.garland_params();
        assert_eq!(garland.base_radius, 3.0);
        assert_eq!(garland.height, 6.0);
        assert_eq!(garland.point_count, 10);
    }

    #[test]
    fn json_shape_matches_renderer_contract() {
        let layout = SceneLayout::from_params(&SceneParams {
            seed: SceneSeed::Fixed(3),
            ..Default::default()
        });
        let value = serde_json::to_value(&layout).expect("serialize layout");

        let bead = &value["garlands"]["silver"][0];
        assert_eq!(bead["droplet"], true);
        assert_eq!(value["garlands"]["silver"][1]["droplet"], false);
        let position = bead["position"].as_array().expect("flat position");
        assert_eq!(position.len(), 3);
        assert!(position.iter().all(|c| c.is_f64()));

        let outline = value["star"]["outline"].as_array().expect("outline");
        assert_eq!(outline.len(), 10);
        assert_eq!(outline[0].as_array().expect("vertex").len(), 2);
        assert_eq!(value["star"]["points"], 5);
        let halo = value["star"]["halo_radius"].as_f64().expect("halo");
        assert!((halo - 0.8).abs() < 1e-6);

        let trunk_y = value["trunk"]["center"][1].as_f64().expect("trunk centre");
        assert!((trunk_y + 2.8).abs() < 1e-6);
        assert_eq!(value["sparkles"]["count"], 150);
        assert_eq!(value["sparkles"]["color"], "#ffd700");
        assert_eq!(value["seed"], 3);
    }
}
