//! Floating gold dust around the tree.

use glam::Vec3;
use noel_luxe_core::Rgb;
use serde::Serialize;

/// Particle cloud drawn as point sprites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparkleField {
    /// Number of particles.
    pub count: u32,
    /// Edge length of the cube the particles drift in.
    pub extent: f32,
    /// Centre of that cube.
    pub center: Vec3,
    /// Sprite size.
    pub size: f32,
    /// Drift speed.
    pub speed: f32,
    /// Sprite opacity.
    pub opacity: f32,
    /// Sprite colour.
    pub color: Rgb,
}

impl Default for SparkleField {
    fn default() -> Self {
        Self {
            count: 150,
            extent: 7.0,
            center: Vec3::ZERO,
            size: 4.0,
            speed: 0.2,
            opacity: 0.6,
            color: Rgb(0xffd700),
        }
    }
}

impl SparkleField {
    /// Whether `point` lies inside the drift volume.
    pub fn contains(&self, point: Vec3) -> bool {
        let half = self.extent * 0.5;
        (point - self.center).abs().max_element() <= half
    }
}
