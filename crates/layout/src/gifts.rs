//! Wrapped gift boxes around the trunk.

use glam::Vec3;
use noel_luxe_core::{Placement, Rgb};
use serde::Serialize;

/// Edge length of an unscaled gift box.
pub const BOX_SIZE: f32 = 0.5;
/// Width of the ribbon bands.
pub const RIBBON_WIDTH: f32 = 0.1;
/// Floor height the gifts rest on, in tree space.
pub const FLOOR_Y: f32 = -3.1;

/// A single gift under the tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GiftBox {
    /// Box transform; the box bottom sits at the placement origin.
    pub placement: Placement,
    /// Wrapping paper colour.
    pub wrap: Rgb,
}

const GIFTS: [(f32, f32, f32, f32, Rgb); 5] = [
    (1.4, 0.5, 0.5, 1.2, Rgb(0x7f1d1d)),
    (-1.2, 1.2, -0.4, 1.3, Rgb(0x064e3b)),
    (0.2, 1.6, 0.2, 1.0, Rgb(0xfdf5e6)),
    (-0.8, -1.2, 2.1, 0.9, Rgb(0xffd700)),
    (0.8, -1.0, -1.5, 1.1, Rgb(0x1e3a8a)),
];

/// The fixed gift arrangement.
pub fn default_gifts() -> Vec<GiftBox> {
    GIFTS
        .iter()
        .map(|&(x, z, rotation_y, scale, wrap)| GiftBox {
            placement: Placement::new(
                Vec3::new(x, FLOOR_Y, z),
                Vec3::new(0.0, rotation_y, 0.0),
                Vec3::splat(scale),
            ),
            wrap,
        })
        .collect()
}
