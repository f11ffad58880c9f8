//! Shared, immutable material descriptions.
//!
//! Materials are built once as constants and handed to the renderer by
//! reference; nothing mutates them per frame.

use serde::{Serialize, Serializer};

/// 24-bit sRGB colour stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Red, green and blue channels as bytes.
    pub const fn channels(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    /// Channels normalized to `[0, 1]`.
    pub fn to_f32(self) -> [f32; 3] {
        self.channels().map(|c| f32::from(c) / 255.0)
    }

    /// `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// PBR-style surface description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialSpec {
    /// Albedo colour.
    pub base_color: Rgb,
    /// Microfacet roughness in `[0, 1]`.
    pub roughness: f32,
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
    /// Emissive colour, if the surface glows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive: Option<Rgb>,
    /// Multiplier on the emissive colour.
    pub emissive_intensity: f32,
    /// Opacity; below 1.0 the material is drawn transparent.
    pub opacity: f32,
    /// Whether tone mapping applies (glowing bits opt out to feed bloom).
    pub tone_mapped: bool,
    /// Faceted normals.
    pub flat_shading: bool,
    /// Ignores scene lighting.
    pub unlit: bool,
}

impl MaterialSpec {
    /// Opaque, tone-mapped, smooth-shaded material.
    pub const fn standard(base_color: Rgb, roughness: f32, metalness: f32) -> Self {
        Self {
            base_color,
            roughness,
            metalness,
            emissive: None,
            emissive_intensity: 0.0,
            opacity: 1.0,
            tone_mapped: true,
            flat_shading: false,
            unlit: false,
        }
    }

    /// Self-lit material that bypasses tone mapping.
    pub const fn glowing(base_color: Rgb, emissive: Rgb, intensity: f32) -> Self {
        let mut spec = Self::standard(base_color, 1.0, 0.0);
        spec.emissive = Some(emissive);
        spec.emissive_intensity = intensity;
        spec.tone_mapped = false;
        spec
    }

    /// Same material with a different opacity.
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Same material with faceted normals.
    pub const fn faceted(mut self) -> Self {
        self.flat_shading = true;
        self
    }

    /// Same material drawn without lighting.
    pub const fn unlit(mut self) -> Self {
        self.unlit = true;
        self
    }

    /// True when the renderer must sort and blend this material.
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Every material the scene draws with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialPalette {
    /// Deep forest green foliage.
    pub foliage: MaterialSpec,
    /// Polished gold (boxes, spheres, gold garland).
    pub gold: MaterialSpec,
    /// Polished silver garland links.
    pub silver: MaterialSpec,
    /// Matte cream boxes.
    pub cream: MaterialSpec,
    /// Clear crystal droplets.
    pub crystal: MaterialSpec,
    /// Warm emissive light boxes.
    pub glow: MaterialSpec,
    /// Tree-top star.
    pub star: MaterialSpec,
    /// Gift ribbons.
    pub ribbon: MaterialSpec,
    /// Dark wood trunk stand.
    pub trunk: MaterialSpec,
    /// Faint glow sphere around the star.
    pub halo: MaterialSpec,
}

/// The scene palette.
pub const PALETTE: MaterialPalette = MaterialPalette {
    foliage: MaterialSpec::standard(Rgb(0x1a472a), 0.7, 0.1).faceted(),
    gold: MaterialSpec::standard(Rgb(0xffd700), 0.1, 1.0),
    silver: MaterialSpec::standard(Rgb(0xe0e0e0), 0.1, 1.0),
    cream: MaterialSpec::standard(Rgb(0xfffdd0), 0.4, 0.1),
    crystal: MaterialSpec::standard(Rgb(0xffffff), 0.0, 0.1).with_opacity(0.8),
    glow: MaterialSpec::glowing(Rgb(0xfff59d), Rgb(0xfbc02d), 3.0),
    star: MaterialSpec::glowing(Rgb(0xffff00), Rgb(0xffd700), 2.0),
    ribbon: MaterialSpec::standard(Rgb(0xffd700), 0.2, 0.9),
    trunk: MaterialSpec::standard(Rgb(0x2a1b15), 0.8, 0.0),
    halo: MaterialSpec::standard(Rgb(0xffeb3b), 1.0, 0.0)
        .unlit()
        .with_opacity(0.15),
};
