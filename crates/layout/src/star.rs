//! Tree-top star outline.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Star silhouette and where it hovers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarShape {
    /// Number of tips.
    pub points: u32,
    /// Tip radius.
    pub outer_radius: f32,
    /// Notch radius.
    pub inner_radius: f32,
    /// Extrusion depth.
    pub depth: f32,
    /// Centre of the star in tree space.
    pub center: Vec3,
    /// Radius of the translucent halo sphere around the star.
    pub halo_radius: f32,
}

impl Default for StarShape {
    fn default() -> Self {
        Self {
            points: 5,
            outer_radius: 0.6,
            inner_radius: 0.25,
            depth: 0.2,
            center: Vec3::new(0.0, 3.0, 0.0),
            halo_radius: 0.8,
        }
    }
}

impl StarShape {
    /// Closed polygon alternating tip and notch, first tip pointing down
    /// the -Y axis of the outline plane.
    pub fn outline(&self) -> Vec<Vec2> {
        let vertices = self.points * 2;
        (0..vertices)
            .map(|i| {
                let angle = i as f32 * PI / self.points as f32 - FRAC_PI_2;
                let radius = if i % 2 == 0 {
                    self.outer_radius
                } else {
                    self.inner_radius
                };
                Vec2::new(angle.cos() * radius, angle.sin() * radius)
            })
            .collect()
    }
}

/// Star parameters together with the outline the renderer extrudes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarLayout {
    /// Shape parameters.
    #[serde(flatten)]
    pub shape: StarShape,
    /// Polygon from [`StarShape::outline`].
    pub outline: Vec<Vec2>,
}

impl From<StarShape> for StarLayout {
    fn from(shape: StarShape) -> Self {
        Self {
            outline: shape.outline(),
            shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_alternates_tip_and_notch() {
        let star = StarShape::default();
        let outline = star.outline();
        assert_eq!(outline.len(), 10);
        for (i, vertex) in outline.iter().enumerate() {
            let expected = if i % 2 == 0 { 0.6 } else { 0.25 };
            assert!((vertex.length() - expected).abs() < 1e-5);
        }
        assert!(outline[0].abs_diff_eq(Vec2::new(0.0, -0.6), 1e-5));
    }

    #[test]
    fn zero_points_yields_empty_outline() {
        let star = StarShape {
            points: 0,
            ..Default::default()
        };
        assert!(star.outline().is_empty());
    }

    #[test]
    fn halo_encloses_the_tips() {
        let star = StarShape::default();
        assert_eq!(star.halo_radius, 0.8);
        assert!(star.halo_radius > star.outer_radius);
    }

    #[test]
    fn layout_carries_outline() {
        let layout = StarLayout::from(StarShape::default());
        assert_eq!(layout.outline, layout.shape.outline());
        assert_eq!(layout.outline.len(), 10);
    }
}
