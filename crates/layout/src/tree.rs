//! Tree body generation.
//!
//! The body is a stack of rings on a cone. Each ring holds a number of
//! ornaments proportional to its circumference; every ornament is then sorted
//! into a category through [`crate::category::classify`].

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use noel_luxe_core::Placement;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{classify, OrnamentCategory};

/// Ornaments per unit of ring circumference.
pub const RING_DENSITY: f32 = 6.0;
/// Smallest ring, so the tip never goes bare.
pub const MIN_ITEMS_PER_RING: u32 = 4;
/// Upper bound of the per-item angular jitter (radians).
pub const ANGLE_JITTER: f32 = 0.5;
/// Items sit between half the ring radius and slightly past it.
pub const RADIUS_FRACTION_MIN: f32 = 0.5;
/// Width of the radius fraction range.
pub const RADIUS_FRACTION_SPAN: f32 = 0.55;
/// Upper bound of the per-item vertical jitter.
pub const VERTICAL_JITTER: f32 = 0.4;
/// Ornament size at the bottom ring.
pub const SIZE_AT_BASE: f32 = 0.35;
/// How much the ornament size shrinks from bottom to top.
pub const SIZE_FALLOFF: f32 = 0.15;
/// Lower bound of the per-axis scale jitter factor.
pub const SCALE_JITTER_MIN: f32 = 0.8;
/// Width of the per-axis scale jitter range.
pub const SCALE_JITTER_SPAN: f32 = 0.4;

/// Cone the ornaments are scattered over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeBodyParams {
    /// Number of rings.
    pub layer_count: u32,
    /// Vertical extent from the bottom ring to the apex.
    pub height: f32,
    /// Radius of the bottom ring.
    pub base_radius: f32,
    /// Height of the bottom ring.
    pub start_y: f32,
}

impl Default for TreeBodyParams {
    fn default() -> Self {
        Self {
            layer_count: 28,
            height: 5.2,
            base_radius: 2.0,
            start_y: -2.5,
        }
    }
}

impl TreeBodyParams {
    /// Cone radius at height fraction `t`.
    pub fn radius_at(&self, t: f32) -> f32 {
        self.base_radius * (1.0 - t)
    }

    /// Ring height at fraction `t`.
    pub fn height_at(&self, t: f32) -> f32 {
        self.start_y + t * self.height
    }

    /// Number of ornaments on a ring of the given radius.
    pub fn items_for_radius(radius: f32) -> u32 {
        let circumference = TAU * radius;
        let count = (circumference * RING_DENSITY).floor().max(0.0) as u32;
        count.max(MIN_ITEMS_PER_RING)
    }

    /// Unjittered ornament size at height fraction `t`.
    pub fn size_base_at(t: f32) -> f32 {
        SIZE_AT_BASE - t * SIZE_FALLOFF
    }
}

/// Tree-body ornaments, one sequence per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrnamentLayout {
    /// Gold baubles.
    pub spheres: Vec<Placement>,
    /// Gold boxes.
    pub gold: Vec<Placement>,
    /// Cream boxes.
    pub cream: Vec<Placement>,
    /// Emissive boxes.
    pub glow: Vec<Placement>,
    /// Green foliage.
    pub foliage: Vec<Placement>,
}

impl OrnamentLayout {
    /// Placements for one category.
    pub fn category(&self, category: OrnamentCategory) -> &[Placement] {
        match category {
            OrnamentCategory::Sphere => &self.spheres,
            OrnamentCategory::Gold => &self.gold,
            OrnamentCategory::Cream => &self.cream,
            OrnamentCategory::Glow => &self.glow,
            OrnamentCategory::Foliage => &self.foliage,
        }
    }

    fn category_mut(&mut self, category: OrnamentCategory) -> &mut Vec<Placement> {
        match category {
            OrnamentCategory::Sphere => &mut self.spheres,
            OrnamentCategory::Gold => &mut self.gold,
            OrnamentCategory::Cream => &mut self.cream,
            OrnamentCategory::Glow => &mut self.glow,
            OrnamentCategory::Foliage => &mut self.foliage,
        }
    }

    /// Total ornaments across all categories.
    pub fn len(&self) -> usize {
        OrnamentCategory::ALL
            .iter()
            .map(|&category| self.category(category).len())
            .sum()
    }

    /// True when no ornament was generated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every placement tagged with its category.
    pub fn iter(&self) -> impl Iterator<Item = (OrnamentCategory, &Placement)> + '_ {
        OrnamentCategory::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |placement| (category, placement))
        })
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    rng.gen::<f32>() * span
}

/// Scatter ornaments over the cone described by `params`.
///
/// Zero layers yields an empty layout.
pub fn generate_tree_body<R: Rng + ?Sized>(params: &TreeBodyParams, rng: &mut R) -> OrnamentLayout {
    let mut layout = OrnamentLayout::default();
    if params.layer_count == 0 {
        return layout;
    }

    for layer in 0..params.layer_count {
        let t = layer as f32 / params.layer_count as f32;
        let y = params.height_at(t);
        let r_max = params.radius_at(t);
        let item_count = TreeBodyParams::items_for_radius(r_max);
        let size_base = TreeBodyParams::size_base_at(t);

        for item in 0..item_count {
            let angle = (item as f32 / item_count as f32) * TAU + uniform(rng, ANGLE_JITTER);
            let r = r_max * (RADIUS_FRACTION_MIN + uniform(rng, RADIUS_FRACTION_SPAN));
            let position = Vec3::new(
                angle.cos() * r,
                y + uniform(rng, VERTICAL_JITTER),
                angle.sin() * r,
            );

            let rotation = Vec3::new(uniform(rng, PI), uniform(rng, PI), uniform(rng, PI));

            let jitter = Vec3::new(
                SCALE_JITTER_MIN + uniform(rng, SCALE_JITTER_SPAN),
                SCALE_JITTER_MIN + uniform(rng, SCALE_JITTER_SPAN),
                SCALE_JITTER_MIN + uniform(rng, SCALE_JITTER_SPAN),
            );
            let scale = jitter * size_base;

            let bin = classify(rng.gen::<f32>());
            let placement = Placement::new(position, rotation, bin.transform.apply(scale, size_base));
            layout.category_mut(bin.category).push(placement);
        }
    }

    debug!(
        layers = params.layer_count,
        spheres = layout.spheres.len(),
        gold = layout.gold.len(),
        cream = layout.cream.len(),
        glow = layout.glow.len(),
        foliage = layout.foliage.len(),
        "Generated tree body"
    );

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn zero_layers_is_empty() {
        let params = TreeBodyParams {
            layer_count: 0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_tree_body(&params, &mut rng).is_empty());
    }

    #[test]
    fn ring_counts_follow_circumference_with_floor() {
        assert_eq!(TreeBodyParams::items_for_radius(2.0), 75);
        assert_eq!(TreeBodyParams::items_for_radius(0.05), MIN_ITEMS_PER_RING);
        assert_eq!(TreeBodyParams::items_for_radius(0.0), MIN_ITEMS_PER_RING);
        assert_eq!(TreeBodyParams::items_for_radius(-1.0), MIN_ITEMS_PER_RING);
    }

    #[test]
    fn total_count_matches_ring_sum() {
        let params = TreeBodyParams::default();
        let expected: u32 = (0..params.layer_count)
            .map(|i| {
                let t = i as f32 / params.layer_count as f32;
                TreeBodyParams::items_for_radius(params.radius_at(t))
            })
            .sum();
        let mut rng = StdRng::seed_from_u64(99);
        let layout = generate_tree_body(&params, &mut rng);
        assert_eq!(layout.len(), expected as usize);
        assert_eq!(layout.iter().count(), layout.len());
    }

    #[test]
    fn single_layer_sits_on_base_ring() {
        let params = TreeBodyParams {
            layer_count: 1,
            height: 4.0,
            base_radius: 1.0,
            start_y: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let layout = generate_tree_body(&params, &mut rng);
        assert_eq!(layout.len(), TreeBodyParams::items_for_radius(1.0) as usize);
        for (_, placement) in layout.iter() {
            let horizontal = placement.position.x.hypot(placement.position.z);
            assert!((0.5 - 1e-5..=1.05 + 1e-5).contains(&horizontal));
            assert!((0.0..=VERTICAL_JITTER).contains(&placement.position.y));
        }
    }

    #[test]
    fn spheres_are_uniformly_scaled() {
        let mut rng = StdRng::seed_from_u64(2024);
        let layout = generate_tree_body(&TreeBodyParams::default(), &mut rng);
        assert!(!layout.spheres.is_empty());
        for sphere in &layout.spheres {
            assert_eq!(sphere.scale.x, sphere.scale.y);
            assert_eq!(sphere.scale.y, sphere.scale.z);
        }
    }
}
