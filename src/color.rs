//! sRGB colors as written in CSS, with conversion to linear space for the GPU

use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB color with channels in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::from_hex(0xffffff);

    /// Opaque color from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with a different alpha (clamped to 0..=1)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear-space RGBA for vertex colors on an sRGB surface
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a,
        ]
    }

    /// Clear color for a render pass
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BACKGROUND, PALETTE};

    #[test]
    fn test_from_hex_channels() {
        let c = Rgba::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(BACKGROUND, Rgba::from_hex(0x0e1111));
        assert_eq!(PALETTE[0], Rgba::from_hex(0xfff176));
        assert_eq!(PALETTE[18], Rgba::from_hex(0x852eba));
        assert!(PALETTE.iter().all(|c| c.a == 1.0));
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha(-0.5).a, 0.0);
        assert_eq!(Rgba::WHITE.with_alpha(0.25).a, 0.25);
        assert_eq!(Rgba::WHITE.with_alpha(3.0).a, 1.0);
    }

    #[test]
    fn test_to_linear_endpoints() {
        assert_eq!(Rgba::WHITE.to_linear(), [1.0, 1.0, 1.0, 1.0]);
        let black = Rgba::from_hex(0x000000).to_linear();
        assert_eq!(black, [0.0, 0.0, 0.0, 1.0]);
        // Mid grey is darker in linear space
        let grey = Rgba::from_hex(0x808080).to_linear();
        assert!(grey[0] > 0.2 && grey[0] < 0.25);
    }
}
