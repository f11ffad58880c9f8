//! Trunk stand the tree rests on.

use glam::Vec3;
use serde::Serialize;

/// Tapered cylinder under the lowest ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrunkStand {
    /// Centre of the cylinder.
    pub center: Vec3,
    /// Radius at the top face.
    pub top_radius: f32,
    /// Radius at the bottom face.
    pub bottom_radius: f32,
    /// Cylinder height.
    pub height: f32,
    /// Facets around the circumference.
    pub radial_segments: u32,
}

impl Default for TrunkStand {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, -2.8, 0.0),
            top_radius: 0.4,
            bottom_radius: 0.6,
            height: 0.6,
            radial_segments: 8,
        }
    }
}

impl TrunkStand {
    /// Height of the bottom face.
    pub fn base_y(&self) -> f32 {
        self.center.y - self.height * 0.5
    }
}
