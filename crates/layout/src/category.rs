//! Ornament categories and the categorical draw table.
//!
//! A single uniform draw in `[0, 1)` picks both an item's category and the
//! scale adjustment it receives. The bins are contiguous and ordered; each
//! upper bound is exclusive.

use glam::Vec3;
use noel_luxe_core::{MaterialPalette, MaterialSpec};
use serde::Serialize;

/// Mutually exclusive tree-body ornament kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrnamentCategory {
    /// Gold baubles.
    Sphere,
    /// Gold boxes.
    Gold,
    /// Cream boxes.
    Cream,
    /// Emissive light boxes.
    Glow,
    /// Green foliage tetrahedra.
    Foliage,
}

impl OrnamentCategory {
    /// All categories in table order.
    pub const ALL: [OrnamentCategory; 5] = [
        OrnamentCategory::Sphere,
        OrnamentCategory::Gold,
        OrnamentCategory::Cream,
        OrnamentCategory::Glow,
        OrnamentCategory::Foliage,
    ];

    /// Stable lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            OrnamentCategory::Sphere => "sphere",
            OrnamentCategory::Gold => "gold",
            OrnamentCategory::Cream => "cream",
            OrnamentCategory::Glow => "glow",
            OrnamentCategory::Foliage => "foliage",
        }
    }

    /// Material this category is drawn with.
    pub fn material(self, palette: &MaterialPalette) -> &MaterialSpec {
        match self {
            OrnamentCategory::Sphere | OrnamentCategory::Gold => &palette.gold,
            OrnamentCategory::Cream => &palette.cream,
            OrnamentCategory::Glow => &palette.glow,
            OrnamentCategory::Foliage => &palette.foliage,
        }
    }
}

/// Scale adjustment applied after classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleTransform {
    /// Keep the jittered scale.
    Keep,
    /// Discard jitter: uniform `size_base * factor`.
    UniformOfBase(f32),
    /// Multiply the jittered scale.
    Multiply(f32),
}

impl ScaleTransform {
    /// Apply to a jittered scale whose unjittered size was `size_base`.
    pub fn apply(self, scale: Vec3, size_base: f32) -> Vec3 {
        match self {
            ScaleTransform::Keep => scale,
            ScaleTransform::UniformOfBase(factor) => Vec3::splat(size_base * factor),
            ScaleTransform::Multiply(factor) => scale * factor,
        }
    }
}

/// One row of the categorical table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBin {
    /// Exclusive upper bound of the bin.
    pub upper_bound: f32,
    /// Category assigned to draws in this bin.
    pub category: OrnamentCategory,
    /// Scale adjustment for the category.
    pub transform: ScaleTransform,
}

/// Cumulative bins over `[0, 1)`: 12% spheres, 8% gold, 15% cream, 7% glow,
/// 58% foliage.
pub const CATEGORY_TABLE: [CategoryBin; 5] = [
    CategoryBin {
        upper_bound: 0.12,
        category: OrnamentCategory::Sphere,
        transform: ScaleTransform::UniformOfBase(0.8),
    },
    CategoryBin {
        upper_bound: 0.20,
        category: OrnamentCategory::Gold,
        transform: ScaleTransform::Keep,
    },
    CategoryBin {
        upper_bound: 0.35,
        category: OrnamentCategory::Cream,
        transform: ScaleTransform::Keep,
    },
    CategoryBin {
        upper_bound: 0.42,
        category: OrnamentCategory::Glow,
        transform: ScaleTransform::Keep,
    },
    CategoryBin {
        upper_bound: 1.0,
        category: OrnamentCategory::Foliage,
        transform: ScaleTransform::Multiply(1.4),
    },
];

/// Look up the bin for a uniform draw. Draws at or past 1.0 land in the
/// last bin.
pub fn classify(draw: f32) -> &'static CategoryBin {
    CATEGORY_TABLE
        .iter()
        .find(|bin| draw < bin.upper_bound)
        .unwrap_or(&CATEGORY_TABLE[CATEGORY_TABLE.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use noel_luxe_core::PALETTE;

    #[test]
    fn bins_are_contiguous_and_cover_unit_interval() {
        let mut previous = 0.0;
        for bin in &CATEGORY_TABLE {
            assert!(bin.upper_bound > previous);
            previous = bin.upper_bound;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn every_category_appears_once() {
        let categories: Vec<_> = CATEGORY_TABLE.iter().map(|bin| bin.category).collect();
        assert_eq!(categories, OrnamentCategory::ALL.to_vec());
    }

    #[test]
    fn classify_table() {
        let cases = [
            (0.0, OrnamentCategory::Sphere),
            (0.05, OrnamentCategory::Sphere),
            (0.119, OrnamentCategory::Sphere),
            (0.12, OrnamentCategory::Gold),
            (0.19, OrnamentCategory::Gold),
            (0.20, OrnamentCategory::Cream),
            (0.349, OrnamentCategory::Cream),
            (0.35, OrnamentCategory::Glow),
            (0.419, OrnamentCategory::Glow),
            (0.42, OrnamentCategory::Foliage),
            (0.999, OrnamentCategory::Foliage),
            (1.0, OrnamentCategory::Foliage),
        ];
        for (draw, expected) in cases {
            assert_eq!(classify(draw).category, expected, "draw {draw}");
        }
    }

    #[test]
    fn transforms_follow_category() {
        let jittered = Vec3::new(0.3, 0.25, 0.35);
        let size_base = 0.3;

        let sphere = classify(0.01).transform.apply(jittered, size_base);
        assert!(sphere.abs_diff_eq(Vec3::splat(0.24), 1e-6));

        for draw in [0.15, 0.3, 0.4] {
            assert_eq!(classify(draw).transform.apply(jittered, size_base), jittered);
        }

        let foliage = classify(0.9).transform.apply(jittered, size_base);
        assert!(foliage.abs_diff_eq(jittered * 1.4, 1e-6));
    }

    #[test]
    fn materials_match_categories() {
        assert_eq!(OrnamentCategory::Sphere.material(&PALETTE), &PALETTE.gold);
        assert_eq!(OrnamentCategory::Glow.material(&PALETTE), &PALETTE.glow);
        assert_eq!(OrnamentCategory::Foliage.material(&PALETTE), &PALETTE.foliage);
    }
}
