//! Twin helical garlands wrapped around the tree.
//!
//! Both strands share height and radius at every index; the gold strand is
//! the silver strand rotated by half a turn, so the two never cross.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use noel_luxe_core::Placement;
use serde::{Deserialize, Serialize};

use crate::tree::TreeBodyParams;

/// Garlands stop short of the apex at this fraction of the tree height.
pub const HEIGHT_FRACTION: f32 = 0.95;
/// Gap between the cone surface and the garland.
pub const SURFACE_OFFSET: f32 = 0.15;
/// Every `DROPLET_PERIOD`-th bead is a droplet.
pub const DROPLET_PERIOD: u32 = 5;
/// Uniform scale of droplet beads.
pub const DROPLET_SCALE: f32 = 0.12;
/// Uniform scale of ordinary chain links.
pub const LINK_SCALE: f32 = 0.05;

/// Shape of the garland pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarlandParams {
    /// Beads per strand.
    pub point_count: u32,
    /// Full turns from bottom to top.
    pub wrap_count: f32,
    /// Radius of the tree at its base.
    pub base_radius: f32,
    /// Height of the tree.
    pub height: f32,
    /// Height of the tree base.
    pub start_y: f32,
}

impl Default for GarlandParams {
    fn default() -> Self {
        Self::for_tree(&TreeBodyParams::default(), 180, 4.5)
    }
}

impl GarlandParams {
    /// Garlands hugging the given tree body.
    pub fn for_tree(tree: &TreeBodyParams, point_count: u32, wrap_count: f32) -> Self {
        Self {
            point_count,
            wrap_count,
            base_radius: tree.base_radius,
            height: tree.height,
            start_y: tree.start_y,
        }
    }

    /// Height fraction of bead `index`.
    pub fn t_at(&self, index: u32) -> f32 {
        index as f32 / self.point_count as f32
    }

    /// Distance from the trunk axis at height fraction `t`.
    pub fn radius_at(&self, t: f32) -> f32 {
        self.base_radius * (1.0 - t) + SURFACE_OFFSET
    }

    /// Bead height at fraction `t`.
    pub fn height_at(&self, t: f32) -> f32 {
        self.start_y + t * self.height * HEIGHT_FRACTION
    }

    /// Silver and gold strand angles at fraction `t`.
    pub fn angles_at(&self, t: f32) -> (f32, f32) {
        let first = t * TAU * self.wrap_count;
        (first, first + PI)
    }
}

/// Whether bead `index` is a droplet.
pub fn is_droplet(index: u32) -> bool {
    index % DROPLET_PERIOD == 0
}

/// One bead on a garland strand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GarlandBead {
    /// Where the bead is drawn. Rotation is always zero.
    #[serde(flatten)]
    pub placement: Placement,
    /// Angle around the trunk (radians, unwrapped).
    pub angle: f32,
    /// Larger accent bead.
    pub droplet: bool,
}

/// The two interleaved strands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GarlandPair {
    /// Crystal/silver strand.
    pub silver: Vec<GarlandBead>,
    /// Gold/pearl strand, half a turn ahead of silver.
    pub gold: Vec<GarlandBead>,
}

impl GarlandPair {
    /// Beads per strand.
    pub fn len(&self) -> usize {
        self.silver.len()
    }

    /// True when no bead was generated.
    pub fn is_empty(&self) -> bool {
        self.silver.is_empty()
    }
}

fn bead(angle: f32, radius: f32, y: f32, droplet: bool) -> GarlandBead {
    let scale = if droplet { DROPLET_SCALE } else { LINK_SCALE };
    GarlandBead {
        placement: Placement::uniform(
            Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
            scale,
        ),
        angle,
        droplet,
    }
}

/// Lay out both strands. Deterministic; no randomness involved.
pub fn generate_garlands(params: &GarlandParams) -> GarlandPair {
    let capacity = params.point_count as usize;
    let mut pair = GarlandPair {
        silver: Vec::with_capacity(capacity),
        gold: Vec::with_capacity(capacity),
    };

    for index in 0..params.point_count {
        let t = params.t_at(index);
        let y = params.height_at(t);
        let radius = params.radius_at(t);
        let (silver_angle, gold_angle) = params.angles_at(t);
        let droplet = is_droplet(index);

        pair.silver.push(bead(silver_angle, radius, y, droplet));
        pair.gold.push(bead(gold_angle, radius, y, droplet));
    }

    pair
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_is_empty() {
        let params = GarlandParams {
            point_count: 0,
            ..Default::default()
        };
        let pair = generate_garlands(&params);
        assert!(pair.is_empty());
        assert!(pair.gold.is_empty());
    }

    #[test]
    fn droplets_every_fifth_bead() {
        let pair = generate_garlands(&GarlandParams::default());
        assert_eq!(pair.len(), 180);
        for (index, (silver, gold)) in pair.silver.iter().zip(&pair.gold).enumerate() {
            let expected = index % 5 == 0;
            assert_eq!(silver.droplet, expected);
            assert_eq!(gold.droplet, expected);
            let scale = if expected { DROPLET_SCALE } else { LINK_SCALE };
            assert_eq!(silver.placement.scale, Vec3::splat(scale));
            assert_eq!(gold.placement.scale, Vec3::splat(scale));
        }
        assert_eq!(pair.silver.iter().filter(|b| b.droplet).count(), 36);
    }

    #[test]
    fn strands_are_antipodal() {
        let pair = generate_garlands(&GarlandParams::default());
        for (silver, gold) in pair.silver.iter().zip(&pair.gold) {
            assert_eq!(gold.angle, silver.angle + PI);
            assert_eq!(gold.placement.position.y, silver.placement.position.y);
            let sum = silver.placement.position + gold.placement.position;
            assert!(sum.x.abs() < 1e-4 && sum.z.abs() < 1e-4, "{sum:?}");
        }
    }

    #[test]
    fn first_bead_starts_at_base_outside_surface() {
        let params = GarlandParams::default();
        let pair = generate_garlands(&params);
        let first = pair.silver[0].placement.position;
        assert_eq!(first, Vec3::new(params.base_radius + SURFACE_OFFSET, params.start_y, 0.0));
        assert_eq!(pair.silver[0].placement.rotation, Vec3::ZERO);
    }

    #[test]
    fn garland_stops_short_of_apex() {
        let params = GarlandParams::default();
        let top = params.start_y + params.height * HEIGHT_FRACTION;
        let pair = generate_garlands(&params);
        assert!(pair
            .silver
            .iter()
            .chain(&pair.gold)
            .all(|b| b.placement.position.y < top));
    }
}
