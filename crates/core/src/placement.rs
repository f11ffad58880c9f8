//! Instance placements consumed by instanced draws.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Where and how a single decorative instance is drawn.
///
/// Rotation is stored as XYZ Euler angles in radians, matching the order
/// instanced renderers apply them in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Instance origin in tree space.
    pub position: Vec3,
    /// Euler angles (radians, XYZ order).
    pub rotation: Vec3,
    /// Per-axis scale; always strictly positive for generated placements.
    pub scale: Vec3,
}

impl Placement {
    /// Create a placement from its three components.
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Unrotated placement with a uniform scale.
    pub fn uniform(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(scale),
        }
    }

    /// Replace the scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// True when every scale component is strictly positive.
    pub fn has_positive_scale(&self) -> bool {
        self.scale.cmpgt(Vec3::ZERO).all()
    }

    /// Rotation as a quaternion.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix for an instance buffer.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.position)
    }
}
